use log::error;
use shared::{GameDto, LeaderboardSnapshotDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::games::{get_game_by_id, get_game_leaderboard};
use crate::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct GameDetailsProps {
    pub game_id: String,
}

/// Per-game view reached from the home code-entry flow: metadata,
/// participants, and this game's own leaderboard.
#[function_component(GameDetails)]
pub fn game_details(props: &GameDetailsProps) -> Html {
    let game = use_state(|| None::<GameDto>);
    let leaderboard = use_state(|| None::<LeaderboardSnapshotDto>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    let load = {
        let game = game.clone();
        let leaderboard = leaderboard.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let game_id = props.game_id.clone();
        Callback::from(move |_: ()| {
            let game = game.clone();
            let leaderboard = leaderboard.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let game_id = game_id.clone();

            loading.set(true);
            load_error.set(None);

            spawn_local(async move {
                match get_game_by_id(&game_id).await {
                    Ok(g) => {
                        game.set(Some(g));
                        // Leaderboard is best-effort: a game with no scores
                        // yet simply shows nothing.
                        match get_game_leaderboard(&game_id).await {
                            Ok(snapshot) => leaderboard.set(Some(snapshot)),
                            Err(e) => error!("No leaderboard for game {}: {}", game_id, e),
                        }
                    }
                    Err(e) => {
                        error!("Failed to load game: {}", e);
                        load_error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with(props.game_id.clone(), move |_| {
            load.emit(());
            || ()
        });
    }

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-4xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                if *loading {
                    <div class="p-12 text-center">
                        <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                        <p class="mt-2 text-gray-600">{"Loading game..."}</p>
                    </div>
                } else if let Some(message) = &*load_error {
                    <div class="bg-white shadow rounded-lg p-8 text-center">
                        <h3 class="text-lg font-medium text-gray-900 mb-2">{"Failed to load game"}</h3>
                        <p class="text-gray-500 mb-4">{message}</p>
                        <div class="flex justify-center gap-3">
                            <button
                                onclick={{
                                    let load = load.clone();
                                    Callback::from(move |_| load.emit(()))
                                }}
                                class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                            >
                                {"Retry"}
                            </button>
                            <Link<Route> to={Route::Home} classes="px-4 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300">
                                {"Back to home"}
                            </Link<Route>>
                        </div>
                    </div>
                } else if let Some(g) = &*game {
                    <>
                    <div class="bg-white shadow rounded-lg p-6 mb-6">
                        <div class="flex items-start justify-between">
                            <div>
                                <h1 class="text-3xl font-bold text-gray-900">{&g.name}</h1>
                                if let Some(description) = &g.description {
                                    <p class="mt-2 text-gray-600">{description}</p>
                                }
                            </div>
                            <span class="inline-flex items-center px-3 py-1 rounded-full text-sm font-mono bg-blue-100 text-blue-800">
                                {&g.code}
                            </span>
                        </div>

                        if let Some(scoring) = &g.scoring {
                            <p class="mt-3 text-sm text-gray-500">
                                {format!("{} rounds · up to {} points per round", scoring.rounds, scoring.max_points)}
                            </p>
                        }

                        if !g.participants.is_empty() {
                            <div class="mt-4">
                                <h2 class="text-sm font-medium text-gray-700 mb-2">{"Participants"}</h2>
                                <div class="flex flex-wrap gap-2">
                                    {for g.participants.iter().map(|name| html! {
                                        <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs bg-gray-100 text-gray-700">
                                            {name}
                                        </span>
                                    })}
                                </div>
                            </div>
                        }
                    </div>

                    if let Some(snapshot) = &*leaderboard {
                        <div class="bg-white shadow rounded-lg">
                            <div class="px-6 py-4 border-b border-gray-200 flex items-center justify-between">
                                <h2 class="text-lg font-medium text-gray-900">{"Leaderboard"}</h2>
                                <span class="text-xs text-gray-400">
                                    {format!("Updated {}", snapshot.generated_at.format("%Y-%m-%d %H:%M"))}
                                </span>
                            </div>
                            if snapshot.player_rankings.is_empty() {
                                <div class="p-8 text-center text-gray-500">{"No scores recorded yet."}</div>
                            } else {
                                <div class="divide-y divide-gray-100">
                                    {for snapshot.player_rankings.iter().map(|entry| html! {
                                        <div class="px-6 py-3 flex items-center justify-between">
                                            <div class="flex items-center gap-3">
                                                <span class="text-sm font-bold text-gray-400 w-6">{entry.rank}</span>
                                                <span class="text-sm font-medium text-gray-900">{&entry.player_name}</span>
                                                if !entry.team_name.is_empty() {
                                                    <span class="text-xs text-gray-400">{&entry.team_name}</span>
                                                }
                                            </div>
                                            <span class="text-sm font-semibold text-gray-900">{entry.total_points}</span>
                                        </div>
                                    })}
                                </div>
                            }
                        </div>
                    }
                    </>
                }
            </div>
        </div>
    }
}
