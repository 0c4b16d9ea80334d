use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{SessionContext, SessionProvider};
use crate::components::common_toast::ToastProvider;
use crate::components::footer::Footer;
use crate::components::nav::Nav;

pub mod api;
pub mod auth;
pub mod codes;
pub mod components;
pub mod config;
pub mod optimistic;
pub mod realtime;
pub mod stats;
pub mod pages {
    pub mod create_tournament;
    pub mod dashboard;
    pub mod game_details;
    pub mod home;
    pub mod login;
    pub mod not_found;
    pub mod scoreboard;
    pub mod scoring;
    pub mod tournament_leaderboard;
}

use pages::{
    create_tournament::CreateTournament, dashboard::Dashboard, game_details::GameDetails,
    home::Home, login::Login, not_found::NotFound, scoreboard::Scoreboard,
    scoring::ScoringConsole, tournament_leaderboard::TournamentLeaderboard,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/tournament/create")]
    CreateTournament,
    #[at("/game/:game_id")]
    GameView { game_id: String },
    #[at("/tournament/:tournament_id/scoring")]
    ScoringConsole { tournament_id: String },
    #[at("/tournament/:tournament_id/leaderboard")]
    TournamentLeaderboard { tournament_id: String },
    #[at("/scoreboard")]
    Scoreboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <SessionProvider>
                <BrowserRouter>
                    <div class="app-container flex flex-col min-h-screen">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            </SessionProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Gate for admin-only routes: unauthenticated (or freshly expired) sessions
/// are bounced to the login page.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().unwrap();
    let is_authenticated = session.state.is_authenticated();

    {
        let navigator = navigator.clone();
        use_effect_with(is_authenticated, move |authed| {
            if !*authed {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    if is_authenticated {
        html! {
            <>
                {props.children.clone()}
            </>
        }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Dashboard => html! {
            <ProtectedRoute>
                <Dashboard />
            </ProtectedRoute>
        },
        Route::CreateTournament => html! {
            <ProtectedRoute>
                <CreateTournament />
            </ProtectedRoute>
        },
        Route::GameView { game_id } => html! { <GameDetails game_id={game_id} /> },
        Route::ScoringConsole { tournament_id } => html! {
            <ProtectedRoute>
                <ScoringConsole tournament_id={tournament_id} />
            </ProtectedRoute>
        },
        Route::TournamentLeaderboard { tournament_id } => html! {
            <TournamentLeaderboard tournament_id={tournament_id} />
        },
        Route::Scoreboard => html! { <Scoreboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    // Mount the app
    info!("Mounting application to #app");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
