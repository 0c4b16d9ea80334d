pub mod nav;
pub mod game {
    pub mod create_game_modal;
}
pub mod tournament {
    pub mod details_step;
    pub mod draft;
    pub mod games_step;
    pub mod review_step;
    pub mod teams_step;
    pub mod wizard;
}
pub mod common_modal;
pub mod common_toast;
pub mod footer;
