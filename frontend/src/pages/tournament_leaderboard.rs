use log::error;
use shared::{TeamDto, TournamentDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tournaments::get_tournament_by_id;
use crate::realtime::{ConnectionStatus, RealtimeClient};
use crate::Route;

#[derive(Properties, Clone, PartialEq)]
pub struct TournamentLeaderboardProps {
    pub tournament_id: String,
}

/// Admin leaderboard for one tournament. The socket is a refetch signal
/// only; every update replaces the whole record. Stale data stays visible
/// while offline.
#[function_component(TournamentLeaderboard)]
pub fn tournament_leaderboard(props: &TournamentLeaderboardProps) -> Html {
    let tournament = use_state(|| None::<TournamentDto>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);
    let connection = use_state(|| ConnectionStatus::Connecting);

    let load = {
        let tournament = tournament.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let tournament_id = props.tournament_id.clone();
        Callback::from(move |silent: bool| {
            let tournament = tournament.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let tournament_id = tournament_id.clone();

            if !silent {
                loading.set(true);
            }

            spawn_local(async move {
                match get_tournament_by_id(&tournament_id).await {
                    Ok(t) => {
                        tournament.set(Some(t));
                        load_error.set(None);
                    }
                    Err(e) => {
                        error!("Failed to load tournament leaderboard: {}", e);
                        // Silent refetch failures keep the stale view.
                        if !silent {
                            load_error.set(Some(e));
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    // Initial load plus the realtime refetch trigger, torn down on unmount.
    {
        let load = load.clone();
        let connection = connection.clone();
        use_effect_with(props.tournament_id.clone(), move |tournament_id| {
            load.emit(false);

            let on_refetch = {
                let load = load.clone();
                Callback::from(move |()| load.emit(true))
            };
            let on_status = {
                let connection = connection.clone();
                Callback::from(move |status: ConnectionStatus| connection.set(status))
            };
            let client = RealtimeClient::connect(tournament_id, on_refetch, on_status);

            move || client.shutdown()
        });
    }

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                if *loading {
                    <div class="p-12 text-center">
                        <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                        <p class="mt-2 text-gray-600">{"Loading leaderboard..."}</p>
                    </div>
                } else if let Some(message) = &*load_error {
                    <div class="bg-white shadow rounded-lg p-8 text-center">
                        <h3 class="text-lg font-medium text-gray-900 mb-2">{"Failed to load leaderboard"}</h3>
                        <p class="text-gray-500 mb-4">{message}</p>
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
                            <Link<Route> to={Route::Home} classes="px-4 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300">
                                {"Back to home"}
                            </Link<Route>>
                        </div>
                    </div>
                } else if let Some(t) = &*tournament {
                    <>
                    <div class="flex items-center justify-between mb-6">
                        <div>
                            <h1 class="text-3xl font-bold text-gray-900">{format!("{} — Leaderboard", t.name)}</h1>
                            <p class="mt-1 text-gray-600">{"Team standings with player breakdowns."}</p>
                        </div>
                        <span class={classes!(
                            "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium",
                            connection.badge_classes()
                        )}>
                            {connection.label()}
                        </span>
                    </div>

                    {{
                        // Already-final scores; display order is a plain sort.
                        let mut teams = t.teams.clone();
                        teams.sort_by(|a, b| b.combined_total.cmp(&a.combined_total));
                        html! {
                            <div class="space-y-4">
                                {for teams.iter().enumerate().map(|(i, team)| html! {
                                    <TeamCard position={i + 1} team={team.clone()} />
                                })}
                            </div>
                        }
                    }}
                    </>
                }
            </div>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct TeamCardProps {
    position: usize,
    team: TeamDto,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let expanded = use_state(|| false);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let medal = match props.position {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "",
    };

    html! {
        <div class="bg-white shadow rounded-lg overflow-hidden">
            <button
                onclick={on_toggle}
                class="w-full px-6 py-4 flex items-center justify-between hover:bg-gray-50 text-left"
            >
                <div class="flex items-center gap-3">
                    <span class="text-lg font-bold text-gray-400 w-8">{props.position}</span>
                    <span class="text-xl">{medal}</span>
                    <span class="font-semibold text-gray-900">{&props.team.name}</span>
                </div>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-gray-500">
                        {format!("{} + {} bonus", props.team.individual_total, props.team.bonus_total)}
                    </span>
                    <span class="text-xl font-bold text-gray-900">{props.team.combined_total}</span>
                    <span class="text-gray-400">{if *expanded { "▲" } else { "▼" }}</span>
                </div>
            </button>

            if *expanded {
                <div class="border-t border-gray-200 divide-y divide-gray-100">
                    {for props.team.players.iter().map(|player| html! {
                        <div class="px-6 py-3">
                            <div class="flex items-center justify-between">
                                <div class="flex items-center gap-2">
                                    <span class="text-sm font-medium text-gray-900">{&player.name}</span>
                                    <span class="text-xs text-gray-400">{format!("({})", player.avatar)}</span>
                                </div>
                                <div class="text-xs text-gray-500">
                                    if let Some(team_rank) = player.team_rank {
                                        <span class="mr-3">{format!("Team rank #{}", team_rank)}</span>
                                    }
                                    if let Some(global_rank) = player.global_rank {
                                        <span>{format!("Overall #{}", global_rank)}</span>
                                    }
                                </div>
                            </div>
                            if !player.game_scores.is_empty() {
                                <div class="mt-1 flex flex-wrap gap-2">
                                    {for player.game_scores.iter().map(|gs| html! {
                                        <span class="inline-flex items-center px-2 py-0.5 rounded text-xs bg-gray-100 text-gray-600">
                                            {format!("{}: {}", gs.game_name, gs.points)}
                                        </span>
                                    })}
                                </div>
                            }
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
