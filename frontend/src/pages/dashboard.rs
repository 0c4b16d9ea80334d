use gloo::dialogs::{alert, confirm};
use gloo_timers::callback::Timeout;
use log::error;
use shared::{GameDto, TournamentDto};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::games::{delete_game, get_all_games};
use crate::api::tournaments::{
    get_all_tournaments, get_all_tournaments_with_abort, update_tournament_status,
};
use crate::components::common_toast::{Toast, ToastContext, ToastType};
use crate::components::game::create_game_modal::CreateGameModal;
use crate::config::AGGREGATE_FETCH_TIMEOUT_MS;
use crate::optimistic::{apply_status_toggle, Tentative};
use crate::stats::{highest_player_score, highest_team_score};
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Games,
    Tournaments,
}

/// Fetches both dashboard aggregates. The tournament fetch is guarded by an
/// abort-after-10-seconds controller so a hung request cannot pin the
/// loading state.
async fn fetch_dashboard_data() -> Result<(Vec<TournamentDto>, Vec<GameDto>), String> {
    let controller = AbortController::new().ok();

    if let Some(c) = &controller {
        let c = c.clone();
        Timeout::new(AGGREGATE_FETCH_TIMEOUT_MS, move || c.abort()).forget();
    }

    let tournaments = match &controller {
        Some(c) => get_all_tournaments_with_abort(&c.signal()).await?,
        None => get_all_tournaments().await?,
    };
    let games = get_all_games().await?;
    Ok((tournaments, games))
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let navigator = use_navigator().unwrap();
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let tournaments = use_state(|| None::<Vec<TournamentDto>>);
    let games = use_state(|| None::<Vec<GameDto>>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let active_tab = use_state(|| DashboardTab::Tournaments);
    let show_create_game = use_state(|| false);

    // Initial load shows the spinner; later refetches are silent so stale
    // data stays visible instead of flickering.
    let load = {
        let tournaments = tournaments.clone();
        let games = games.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        Callback::from(move |silent: bool| {
            let tournaments = tournaments.clone();
            let games = games.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();

            if !silent {
                loading.set(true);
            }

            spawn_local(async move {
                match fetch_dashboard_data().await {
                    Ok((tournament_list, game_list)) => {
                        tournaments.set(Some(tournament_list));
                        games.set(Some(game_list));
                        load_error.set(None);
                    }
                    Err(e) => {
                        error!("Dashboard load failed: {}", e);
                        load_error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(false);
            || ()
        });
    }

    // Optimistic status toggle: rewrite the list locally, then confirm with
    // the server. Success replaces everything with a fresh fetch; failure
    // restores the snapshot and alerts.
    let on_toggle_status = {
        let tournaments = tournaments.clone();
        let load = load.clone();
        Callback::from(move |id: String| {
            let Some(current) = (*tournaments).clone() else {
                return;
            };
            // Unknown id: nothing to do.
            let Some((optimistic, new_status)) = apply_status_toggle(&current, &id) else {
                return;
            };

            let tentative = Tentative::capture(&current);
            tournaments.set(Some(optimistic));

            let tournaments = tournaments.clone();
            let load = load.clone();
            spawn_local(async move {
                match update_tournament_status(&id, new_status).await {
                    Ok(()) => {
                        tentative.commit();
                        // Server is the source of truth; replace wholesale.
                        load.emit(true);
                    }
                    Err(e) => {
                        tournaments.set(Some(tentative.revert()));
                        alert(&format!("Failed to update tournament status: {}", e));
                    }
                }
            });
        })
    };

    let on_delete_game = {
        let load = load.clone();
        Callback::from(move |(id, name): (String, String)| {
            if !confirm(&format!("Delete game \"{}\"?", name)) {
                return;
            }
            let load = load.clone();
            spawn_local(async move {
                match delete_game(&id).await {
                    Ok(()) => load.emit(true),
                    Err(e) => alert(&format!("Failed to delete game: {}", e)),
                }
            });
        })
    };

    let on_game_created = {
        let show_create_game = show_create_game.clone();
        let load = load.clone();
        let toast_context = toast_context.clone();
        Callback::from(move |game: GameDto| {
            show_create_game.set(false);
            toast_context.add_toast.emit(Toast::new(
                format!("Game \"{}\" created", game.name),
                ToastType::Success,
            ));
            load.emit(true);
        })
    };

    let on_retry = {
        let load = load.clone();
        Callback::from(move |_| load.emit(false))
    };

    let tournament_list = (*tournaments).clone().unwrap_or_default();
    let game_list = (*games).clone().unwrap_or_default();
    let top_team_score = highest_team_score(&tournament_list);
    let top_player_score = highest_player_score(&tournament_list);

    let stat_card = |label: &str, value: String, icon: &str| {
        html! {
            <div class="bg-white shadow rounded-lg p-5">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-sm text-gray-500">{label}</p>
                        <p class="text-2xl font-bold text-gray-900">{value}</p>
                    </div>
                    <div class="text-3xl">{icon}</div>
                </div>
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between mb-8">
                    <div>
                        <h1 class="text-3xl font-bold text-gray-900">{"Dashboard"}</h1>
                        <p class="mt-1 text-gray-600">{"Manage games and tournaments."}</p>
                    </div>
                    <div class="flex gap-2">
                        <button
                            onclick={{
                                let show_create_game = show_create_game.clone();
                                Callback::from(move |_| show_create_game.set(true))
                            }}
                            class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                        >
                            {"+ New game"}
                        </button>
                        <button
                            onclick={{
                                let navigator = navigator.clone();
                                Callback::from(move |_| navigator.push(&Route::CreateTournament))
                            }}
                            class="px-4 py-2 bg-green-600 text-white rounded-md hover:bg-green-700"
                        >
                            {"+ New tournament"}
                        </button>
                    </div>
                </div>

                if *loading {
                    <div class="p-12 text-center">
                        <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                        <p class="mt-2 text-gray-600">{"Loading dashboard..."}</p>
                    </div>
                } else if let Some(message) = &*load_error {
                    <div class="bg-white shadow rounded-lg p-8 text-center">
                        <h3 class="text-lg font-medium text-gray-900 mb-2">{"Failed to load dashboard"}</h3>
                        <p class="text-gray-500 mb-4">{message}</p>
                        <div class="flex justify-center gap-3">
                            <button
                                onclick={on_retry}
                                class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                            >
                                {"Retry"}
                            </button>
                            <Link<Route> to={Route::Home} classes="px-4 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300">
                                {"Back to home"}
                            </Link<Route>>
                        </div>
                    </div>
                } else {
                    <>
                    // Stats cards
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                        {stat_card("Tournaments", tournament_list.len().to_string(), "🏆")}
                        {stat_card("Games", game_list.len().to_string(), "🎮")}
                        {stat_card("Highest team score", top_team_score.to_string(), "👥")}
                        {stat_card("Highest player score", top_player_score.to_string(), "⭐")}
                    </div>

                    // Tabs
                    <div class="bg-white shadow rounded-lg">
                        <div class="border-b border-gray-200 flex">
                            <button
                                onclick={{
                                    let active_tab = active_tab.clone();
                                    Callback::from(move |_| active_tab.set(DashboardTab::Tournaments))
                                }}
                                class={classes!(
                                    "px-6", "py-3", "text-sm", "font-medium",
                                    if *active_tab == DashboardTab::Tournaments {
                                        "border-b-2 border-blue-600 text-blue-600"
                                    } else {
                                        "text-gray-500 hover:text-gray-700"
                                    }
                                )}
                            >
                                {"Tournaments"}
                            </button>
                            <button
                                onclick={{
                                    let active_tab = active_tab.clone();
                                    Callback::from(move |_| active_tab.set(DashboardTab::Games))
                                }}
                                class={classes!(
                                    "px-6", "py-3", "text-sm", "font-medium",
                                    if *active_tab == DashboardTab::Games {
                                        "border-b-2 border-blue-600 text-blue-600"
                                    } else {
                                        "text-gray-500 hover:text-gray-700"
                                    }
                                )}
                            >
                                {"Games"}
                            </button>
                        </div>

                        {match *active_tab {
                            DashboardTab::Tournaments => html! {
                                <TournamentTable
                                    tournaments={tournament_list.clone()}
                                    on_toggle_status={on_toggle_status.clone()}
                                />
                            },
                            DashboardTab::Games => html! {
                                <GameTable
                                    games={game_list.clone()}
                                    on_delete={on_delete_game.clone()}
                                />
                            },
                        }}
                    </div>
                    </>
                }

                <CreateGameModal
                    is_open={*show_create_game}
                    on_close={{
                        let show_create_game = show_create_game.clone();
                        Callback::from(move |_| show_create_game.set(false))
                    }}
                    on_created={on_game_created}
                />
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct TournamentTableProps {
    tournaments: Vec<TournamentDto>,
    on_toggle_status: Callback<String>,
}

#[function_component(TournamentTable)]
fn tournament_table(props: &TournamentTableProps) -> Html {
    if props.tournaments.is_empty() {
        return html! {
            <div class="p-8 text-center text-gray-500">
                {"No tournaments yet. Create one to get the party started."}
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Name"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Teams"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Players"}</th>
                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {for props.tournaments.iter().map(|tournament| {
                        let id = tournament.id.clone();
                        let is_active = tournament.status.is_active();
                        let on_toggle = {
                            let on_toggle_status = props.on_toggle_status.clone();
                            let id = id.clone();
                            Callback::from(move |_| on_toggle_status.emit(id.clone()))
                        };
                        html! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4 whitespace-nowrap">
                                    <div class="text-sm font-medium text-gray-900">{&tournament.name}</div>
                                    if let Some(description) = &tournament.description {
                                        <div class="text-sm text-gray-500 truncate max-w-xs">{description}</div>
                                    }
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap">
                                    <span class={classes!(
                                        "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium",
                                        if is_active { "bg-green-100 text-green-800" } else { "bg-gray-100 text-gray-600" }
                                    )}>
                                        {if is_active { "Active" } else { "Inactive" }}
                                    </span>
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{tournament.team_count}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{tournament.player_count}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-3">
                                    <button
                                        onclick={on_toggle}
                                        class="text-blue-600 hover:text-blue-800 hover:underline"
                                    >
                                        {if is_active { "Deactivate" } else { "Activate" }}
                                    </button>
                                    <Link<Route>
                                        to={Route::ScoringConsole { tournament_id: id.clone() }}
                                        classes="text-green-600 hover:text-green-800 hover:underline"
                                    >
                                        {"Score"}
                                    </Link<Route>>
                                    <Link<Route>
                                        to={Route::TournamentLeaderboard { tournament_id: id.clone() }}
                                        classes="text-gray-600 hover:text-gray-800 hover:underline"
                                    >
                                        {"Leaderboard"}
                                    </Link<Route>>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct GameTableProps {
    games: Vec<GameDto>,
    on_delete: Callback<(String, String)>,
}

#[function_component(GameTable)]
fn game_table(props: &GameTableProps) -> Html {
    if props.games.is_empty() {
        return html! {
            <div class="p-8 text-center text-gray-500">
                {"No games yet. Create one to build your catalog."}
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Name"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Code"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Status"}</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Participants"}</th>
                        <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    {for props.games.iter().map(|game| {
                        let on_delete = {
                            let on_delete = props.on_delete.clone();
                            let id = game.id.clone();
                            let name = game.name.clone();
                            Callback::from(move |_| on_delete.emit((id.clone(), name.clone())))
                        };
                        html! {
                            <tr class="hover:bg-gray-50">
                                <td class="px-6 py-4 whitespace-nowrap">
                                    <div class="text-sm font-medium text-gray-900">{&game.name}</div>
                                    if let Some(description) = &game.description {
                                        <div class="text-sm text-gray-500 truncate max-w-xs">{description}</div>
                                    }
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm font-mono text-gray-900">{&game.code}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format!("{:?}", game.status)}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{game.participants.len()}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-3">
                                    <Link<Route>
                                        to={Route::GameView { game_id: game.id.clone() }}
                                        classes="text-blue-600 hover:text-blue-800 hover:underline"
                                    >
                                        {"View"}
                                    </Link<Route>>
                                    <button
                                        onclick={on_delete}
                                        class="text-red-600 hover:text-red-800 hover:underline"
                                    >
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
