use log::error;
use shared::{GameBreakdownDto, LeaderboardSnapshotDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tournaments::get_active_leaderboard;
use crate::realtime::{ConnectionStatus, RealtimeClient};
use crate::Route;

/// Public scoreboard for the active tournament. Renders the server's
/// pre-aggregated snapshot and swaps it wholesale on every refetch signal.
#[function_component(Scoreboard)]
pub fn scoreboard() -> Html {
    let snapshot = use_state(|| None::<LeaderboardSnapshotDto>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let connection = use_state(|| ConnectionStatus::Connecting);
    // Room key for the realtime client, learned from the snapshot itself.
    let room_id = use_state(String::new);

    let load = {
        let snapshot = snapshot.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let room_id = room_id.clone();
        Callback::from(move |silent: bool| {
            let snapshot = snapshot.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let room_id = room_id.clone();

            if !silent {
                loading.set(true);
            }

            spawn_local(async move {
                match get_active_leaderboard().await {
                    Ok(s) => {
                        room_id.set(s.tournament_id.clone());
                        snapshot.set(Some(s));
                        load_error.set(None);
                    }
                    Err(e) => {
                        error!("Failed to load scoreboard: {}", e);
                        if !silent {
                            load_error.set(Some(e));
                        }
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

    // The socket follows whichever tournament the snapshot says is active.
    {
        let load = load.clone();
        let connection = connection.clone();
        use_effect_with((*room_id).clone(), move |room| {
            if room.is_empty() {
                return Box::new(|| {}) as Box<dyn FnOnce()>;
            }

            let on_refetch = {
                let load = load.clone();
                Callback::from(move |()| load.emit(true))
            };
            let on_status = {
                let connection = connection.clone();
                Callback::from(move |status: ConnectionStatus| connection.set(status))
            };
            let client = RealtimeClient::connect(room, on_refetch, on_status);

            Box::new(move || client.shutdown()) as Box<dyn FnOnce()>
        });
    }

    html! {
        <div class="min-h-screen bg-slate-900">
            <div class="max-w-6xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                if *loading {
                    <div class="p-12 text-center">
                        <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-400"></div>
                        <p class="mt-2 text-gray-400">{"Loading scoreboard..."}</p>
                    </div>
                } else if let Some(message) = &*load_error {
                    <div class="bg-slate-800 rounded-lg p-8 text-center">
                        <h3 class="text-lg font-medium text-white mb-2">{"Scoreboard unavailable"}</h3>
                        <p class="text-gray-400 mb-4">{message}</p>
                        <div class="flex justify-center gap-3">
                            <button
                                onclick={{
                                    let load = load.clone();
                                    Callback::from(move |_| load.emit(false))
                                }}
                                class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700"
                            >
                                {"Retry"}
                            </button>
                            <Link<Route> to={Route::Home} classes="px-4 py-2 bg-slate-700 text-gray-200 rounded-md hover:bg-slate-600">
                                {"Back to home"}
                            </Link<Route>>
                        </div>
                    </div>
                } else if let Some(s) = &*snapshot {
                    <>
                    <div class="flex items-center justify-between mb-8">
                        <div>
                            <h1 class="text-4xl font-bold text-white">{&s.tournament_name}</h1>
                            <p class="mt-1 text-gray-400 text-sm">
                                {format!("Updated {}", s.generated_at.format("%H:%M:%S"))}
                            </p>
                        </div>
                        <span class={classes!(
                            "inline-flex", "items-center", "px-3", "py-1", "rounded-full", "text-sm", "font-medium",
                            connection.badge_classes()
                        )}>
                            {connection.label()}
                        </span>
                    </div>

                    // Team rankings
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="lg:col-span-2">
                            <h2 class="text-xl font-semibold text-white mb-4">{"Teams"}</h2>
                            <div class="space-y-3">
                                {for s.team_rankings.iter().map(|team| {
                                    let highlight = match team.rank {
                                        1 => "border-yellow-400",
                                        2 => "border-gray-400",
                                        3 => "border-amber-600",
                                        _ => "border-slate-700",
                                    };
                                    html! {
                                        <div class={classes!(
                                            "bg-slate-800", "rounded-lg", "px-5", "py-4", "flex", "items-center", "justify-between",
                                            "border-l-4", highlight
                                        )}>
                                            <div class="flex items-center gap-4">
                                                <span class="text-2xl font-bold text-gray-500 w-8">{team.rank}</span>
                                                <span class="text-lg font-semibold text-white">{&team.team_name}</span>
                                            </div>
                                            <div class="text-right">
                                                <div class="text-2xl font-bold text-white">{team.combined_total}</div>
                                                <div class="text-xs text-gray-400">
                                                    {format!("{} + {} bonus", team.individual_total, team.bonus_total)}
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>
                        </div>

                        // Player rankings
                        <div>
                            <h2 class="text-xl font-semibold text-white mb-4">{"Top players"}</h2>
                            <div class="bg-slate-800 rounded-lg divide-y divide-slate-700">
                                {for s.player_rankings.iter().take(10).map(|player| html! {
                                    <div class="px-4 py-3 flex items-center justify-between">
                                        <div class="flex items-center gap-3">
                                            <span class="text-sm font-bold text-gray-500 w-6">{player.rank}</span>
                                            <div>
                                                <div class="text-sm font-medium text-white">{&player.player_name}</div>
                                                <div class="text-xs text-gray-400">{&player.team_name}</div>
                                            </div>
                                        </div>
                                        <span class="text-sm font-bold text-white">{player.total_points}</span>
                                    </div>
                                })}
                            </div>
                        </div>
                    </div>

                    // Per-game breakdowns
                    if !s.game_breakdowns.is_empty() {
                        <div class="mt-8">
                            <h2 class="text-xl font-semibold text-white mb-4">{"By game"}</h2>
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {for s.game_breakdowns.iter().map(|breakdown| html! {
                                    <GameBreakdownCard breakdown={breakdown.clone()} />
                                })}
                            </div>
                        </div>
                    }
                    </>
                }
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct GameBreakdownCardProps {
    breakdown: GameBreakdownDto,
}

#[function_component(GameBreakdownCard)]
fn game_breakdown_card(props: &GameBreakdownCardProps) -> Html {
    let expanded = use_state(|| false);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let shown: Vec<_> = if *expanded {
        props.breakdown.entries.iter().collect()
    } else {
        props.breakdown.entries.iter().take(3).collect()
    };

    html! {
        <div class="bg-slate-800 rounded-lg p-4">
            <h3 class="font-semibold text-white mb-2">{&props.breakdown.game_name}</h3>
            <div class="space-y-1">
                {for shown.iter().map(|entry| html! {
                    <div class="flex items-center justify-between text-sm">
                        <span class="text-gray-300">{&entry.team_name}</span>
                        <span class="text-gray-100 font-medium">{entry.points}</span>
                    </div>
                })}
            </div>
            if props.breakdown.entries.len() > 3 {
                <button
                    onclick={on_toggle}
                    class="mt-2 text-xs text-blue-400 hover:text-blue-300"
                >
                    {if *expanded { "Show less" } else { "Show all" }}
                </button>
            }
        </div>
    }
}
