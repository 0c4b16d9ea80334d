use shared::{CreatePlayerEntry, CreateTeamEntry, CreateTournamentRequest};
use std::rc::Rc;
use yew::Reducible;

/// Avatar choices offered to players during setup.
pub const AVATARS: &[&str] = &[
    "fox", "owl", "panda", "tiger", "koala", "otter", "penguin", "raccoon",
];

/// Linear wizard steps. Navigation goes through `next`/`prev` only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    Details,
    Teams,
    Games,
    Review,
}

impl WizardStep {
    pub fn next(self) -> Self {
        match self {
            WizardStep::Details => WizardStep::Teams,
            WizardStep::Teams => WizardStep::Games,
            WizardStep::Games => WizardStep::Review,
            WizardStep::Review => WizardStep::Review,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            WizardStep::Details => WizardStep::Details,
            WizardStep::Teams => WizardStep::Details,
            WizardStep::Games => WizardStep::Teams,
            WizardStep::Review => WizardStep::Games,
        }
    }

    pub fn index(self) -> usize {
        match self {
            WizardStep::Details => 0,
            WizardStep::Teams => 1,
            WizardStep::Games => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Details => "Details",
            WizardStep::Teams => "Teams & Players",
            WizardStep::Games => "Games",
            WizardStep::Review => "Review",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct PlayerDraft {
    pub name: String,
    pub avatar: String,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TeamDraft {
    pub name: String,
    pub players: Vec<PlayerDraft>,
}

impl TeamDraft {
    fn empty() -> Self {
        Self {
            name: String::new(),
            players: vec![PlayerDraft::default()],
        }
    }
}

/// The wizard's single unified state. Every step edits this one object, so
/// navigating backwards never discards entered data.
#[derive(Clone, Debug, PartialEq)]
pub struct TournamentDraft {
    pub name: String,
    pub description: String,
    pub teams: Vec<TeamDraft>,
    pub selected_game_ids: Vec<String>,
}

impl Default for TournamentDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            teams: vec![TeamDraft::empty(), TeamDraft::empty()],
            selected_game_ids: vec![],
        }
    }
}

impl TournamentDraft {
    pub fn details_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// At least two teams, every team named, every team has at least one
    /// player, every player named with an avatar chosen.
    pub fn teams_valid(&self) -> bool {
        self.teams.len() >= 2
            && self.teams.iter().all(|team| {
                !team.name.trim().is_empty()
                    && !team.players.is_empty()
                    && team
                        .players
                        .iter()
                        .all(|p| !p.name.trim().is_empty() && !p.avatar.is_empty())
            })
    }

    pub fn games_valid(&self) -> bool {
        !self.selected_game_ids.is_empty()
    }

    /// Forward guard for the given step.
    pub fn can_advance(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Details => self.details_valid(),
            WizardStep::Teams => self.teams_valid(),
            WizardStep::Games => self.games_valid(),
            WizardStep::Review => false,
        }
    }

    /// Assembles the creation payload from the accumulated state.
    pub fn to_request(&self) -> CreateTournamentRequest {
        CreateTournamentRequest {
            name: self.name.trim().to_string(),
            description: {
                let d = self.description.trim().to_string();
                if d.is_empty() { None } else { Some(d) }
            },
            teams: self
                .teams
                .iter()
                .map(|team| CreateTeamEntry {
                    name: team.name.trim().to_string(),
                    players: team
                        .players
                        .iter()
                        .map(|p| CreatePlayerEntry {
                            name: p.name.trim().to_string(),
                            avatar: p.avatar.clone(),
                        })
                        .collect(),
                })
                .collect(),
            game_ids: self.selected_game_ids.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DraftAction {
    SetName(String),
    SetDescription(String),
    AddTeam,
    RemoveTeam(usize),
    SetTeamName(usize, String),
    AddPlayer(usize),
    RemovePlayer(usize, usize),
    SetPlayerName(usize, usize, String),
    SetPlayerAvatar(usize, usize, String),
    ToggleGame(String),
}

impl Reducible for TournamentDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut draft = (*self).clone();
        match action {
            DraftAction::SetName(name) => draft.name = name,
            DraftAction::SetDescription(description) => draft.description = description,
            DraftAction::AddTeam => draft.teams.push(TeamDraft::empty()),
            DraftAction::RemoveTeam(i) => {
                if i < draft.teams.len() {
                    draft.teams.remove(i);
                }
            }
            DraftAction::SetTeamName(i, name) => {
                if let Some(team) = draft.teams.get_mut(i) {
                    team.name = name;
                }
            }
            DraftAction::AddPlayer(i) => {
                if let Some(team) = draft.teams.get_mut(i) {
                    team.players.push(PlayerDraft::default());
                }
            }
            DraftAction::RemovePlayer(i, j) => {
                if let Some(team) = draft.teams.get_mut(i) {
                    if j < team.players.len() {
                        team.players.remove(j);
                    }
                }
            }
            DraftAction::SetPlayerName(i, j, name) => {
                if let Some(player) = draft.teams.get_mut(i).and_then(|t| t.players.get_mut(j)) {
                    player.name = name;
                }
            }
            DraftAction::SetPlayerAvatar(i, j, avatar) => {
                if let Some(player) = draft.teams.get_mut(i).and_then(|t| t.players.get_mut(j)) {
                    player.avatar = avatar;
                }
            }
            DraftAction::ToggleGame(game_id) => {
                if let Some(pos) = draft.selected_game_ids.iter().position(|id| *id == game_id) {
                    draft.selected_game_ids.remove(pos);
                } else {
                    draft.selected_game_ids.push(game_id);
                }
            }
        }
        Rc::new(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> TournamentDraft {
        TournamentDraft {
            name: "Spring Bash".to_string(),
            description: String::new(),
            teams: vec![
                TeamDraft {
                    name: "Red".to_string(),
                    players: vec![PlayerDraft {
                        name: "Ada".to_string(),
                        avatar: "fox".to_string(),
                    }],
                },
                TeamDraft {
                    name: "Blue".to_string(),
                    players: vec![PlayerDraft {
                        name: "Grace".to_string(),
                        avatar: "owl".to_string(),
                    }],
                },
            ],
            selected_game_ids: vec!["game-1".to_string()],
        }
    }

    #[test]
    fn test_details_guard_requires_name() {
        let mut draft = valid_draft();
        assert!(draft.can_advance(WizardStep::Details));
        draft.name = "   ".to_string();
        assert!(!draft.can_advance(WizardStep::Details));
    }

    #[test]
    fn test_teams_guard_requires_two_teams() {
        let mut draft = valid_draft();
        draft.teams.pop();
        assert!(!draft.can_advance(WizardStep::Teams));
    }

    #[test]
    fn test_teams_guard_requires_named_teams() {
        let mut draft = valid_draft();
        draft.teams[1].name = String::new();
        assert!(!draft.can_advance(WizardStep::Teams));
    }

    #[test]
    fn test_teams_guard_requires_players_on_every_team() {
        let mut draft = valid_draft();
        draft.teams[0].players.clear();
        assert!(!draft.can_advance(WizardStep::Teams));
    }

    #[test]
    fn test_teams_guard_requires_player_name_and_avatar() {
        let mut draft = valid_draft();
        draft.teams[0].players[0].avatar = String::new();
        assert!(!draft.can_advance(WizardStep::Teams));

        let mut draft = valid_draft();
        draft.teams[0].players[0].name = String::new();
        assert!(!draft.can_advance(WizardStep::Teams));
    }

    #[test]
    fn test_games_guard_requires_selection() {
        let mut draft = valid_draft();
        assert!(draft.can_advance(WizardStep::Games));
        draft.selected_game_ids.clear();
        assert!(!draft.can_advance(WizardStep::Games));
    }

    #[test]
    fn test_step_navigation_is_linear_and_clamped() {
        assert_eq!(WizardStep::Details.next(), WizardStep::Teams);
        assert_eq!(WizardStep::Teams.next(), WizardStep::Games);
        assert_eq!(WizardStep::Games.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::Details.prev(), WizardStep::Details);
        assert_eq!(WizardStep::Review.prev(), WizardStep::Games);
    }

    #[test]
    fn test_reducer_preserves_other_fields() {
        let draft = Rc::new(valid_draft());
        let updated = draft.reduce(DraftAction::SetTeamName(0, "Crimson".to_string()));
        assert_eq!(updated.teams[0].name, "Crimson");
        // Everything entered elsewhere survives the edit.
        assert_eq!(updated.name, "Spring Bash");
        assert_eq!(updated.teams[1].players[0].name, "Grace");
        assert_eq!(updated.selected_game_ids, vec!["game-1".to_string()]);
    }

    #[test]
    fn test_toggle_game_adds_and_removes() {
        let draft = Rc::new(valid_draft());
        let added = draft.reduce(DraftAction::ToggleGame("game-2".to_string()));
        assert_eq!(added.selected_game_ids.len(), 2);
        let removed = added.reduce(DraftAction::ToggleGame("game-2".to_string()));
        assert_eq!(removed.selected_game_ids, vec!["game-1".to_string()]);
    }

    #[test]
    fn test_request_assembly_trims_and_drops_empty_description() {
        let mut draft = valid_draft();
        draft.name = "  Spring Bash  ".to_string();
        draft.description = "   ".to_string();
        let request = draft.to_request();
        assert_eq!(request.name, "Spring Bash");
        assert_eq!(request.description, None);
        assert_eq!(request.teams.len(), 2);
        assert_eq!(request.teams[0].players[0].avatar, "fox");
    }
}
