use gloo::dialogs::alert;
use log::error;
use shared::{ScoreSubmission, ScoreType, TournamentDto};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::scoring::submit_scores;
use crate::api::tournaments::get_tournament_by_id;
use crate::components::common_toast::{Toast, ToastContext, ToastType};
use crate::Route;

/// Builds the submission from the operator's selections, or explains what is
/// missing. A `None` game/target or an unparseable value never reaches the
/// network.
fn build_submission(
    score_type: ScoreType,
    game_id: &str,
    team_id: &str,
    player: Option<(&str, &str)>,
    raw_value: &str,
    reason: &str,
) -> Result<(ScoreSubmission, i64), String> {
    if game_id.is_empty() {
        return Err("Select a game first".to_string());
    }

    let value: i64 = raw_value
        .trim()
        .parse()
        .map_err(|_| "Enter a whole-number point value".to_string())?;

    let submission = match score_type {
        ScoreType::Team => {
            if team_id.is_empty() {
                return Err("Select a team".to_string());
            }
            let reason = if reason.trim().is_empty() {
                "Manual adjustment".to_string()
            } else {
                reason.trim().to_string()
            };
            ScoreSubmission::for_team(team_id.to_string(), value, reason)
        }
        ScoreType::Player => {
            let (player_id, player_team_id) =
                player.ok_or_else(|| "Select a player".to_string())?;
            ScoreSubmission::for_player(
                player_id.to_string(),
                player_team_id.to_string(),
                value,
            )
        }
    };

    Ok((submission, value))
}

#[derive(Properties, Clone, PartialEq)]
pub struct ScoringConsoleProps {
    pub tournament_id: String,
}

/// Live scoring console for game masters: pick a game, a mode, a target and
/// a signed delta. Scores are never patched locally; every accepted
/// submission triggers exactly one full tournament refetch.
#[function_component(ScoringConsole)]
pub fn scoring_console(props: &ScoringConsoleProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let tournament = use_state(|| None::<TournamentDto>);
    let loading = use_state(|| true);
    let load_error = use_state(|| None::<String>);

    let selected_game = use_state(String::new);
    let score_type = use_state(|| ScoreType::Team);
    let selected_team = use_state(String::new);
    let selected_player = use_state(String::new);
    let value = use_state(String::new);
    let reason = use_state(String::new);
    let submitting = use_state(|| false);

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
                        error!("Failed to load tournament: {}", e);
                        load_error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with(props.tournament_id.clone(), move |_| {
            load.emit(false);
            || ()
        });
    }

    let on_submit = {
        let tournament = tournament.clone();
        let selected_game = selected_game.clone();
        let score_type = score_type.clone();
        let selected_team = selected_team.clone();
        let selected_player = selected_player.clone();
        let value = value.clone();
        let reason = reason.clone();
        let submitting = submitting.clone();
        let toast_context = toast_context.clone();
        let load = load.clone();
        let tournament_id = props.tournament_id.clone();

        Callback::from(move |_: MouseEvent| {
            let Some(current) = (*tournament).clone() else {
                return;
            };

            // Player mode needs the owning team for the payload.
            let player_target: Option<(String, String)> = if *score_type == ScoreType::Player
                && !(*selected_player).is_empty()
            {
                current.teams.iter().find_map(|team| {
                    team.players
                        .iter()
                        .find(|p| p.id == *selected_player)
                        .map(|p| (p.id.clone(), team.id.clone()))
                })
            } else {
                None
            };

            let built = build_submission(
                *score_type,
                &selected_game,
                &selected_team,
                player_target.as_ref().map(|(p, t)| (p.as_str(), t.as_str())),
                &value,
                &reason,
            );

            let (submission, delta) = match built {
                Ok(ok) => ok,
                Err(message) => {
                    // Validation failures block the request entirely.
                    alert(&message);
                    return;
                }
            };

            submitting.set(true);

            let value = value.clone();
            let reason = reason.clone();
            let submitting = submitting.clone();
            let toast_context = toast_context.clone();
            let load = load.clone();
            let tournament_id = tournament_id.clone();
            let game_id = (*selected_game).clone();

            spawn_local(async move {
                match submit_scores(&tournament_id, &game_id, &submission).await {
                    Ok(()) => {
                        submitting.set(false);
                        value.set(String::new());
                        reason.set(String::new());
                        // Wording only: the server does the arithmetic.
                        let message = if delta >= 0 {
                            format!("Awarded {} points", delta)
                        } else {
                            format!("Deducted {} points", -delta)
                        };
                        toast_context
                            .add_toast
                            .emit(Toast::new(message, ToastType::Success));
                        load.emit(true);
                    }
                    Err(e) => {
                        submitting.set(false);
                        alert(&format!("Score submission failed: {}", e));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-4xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                if *loading {
                    <div class="p-12 text-center">
                        <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
                        <p class="mt-2 text-gray-600">{"Loading tournament..."}</p>
                    </div>
                } else if let Some(message) = &*load_error {
                    <div class="bg-white shadow rounded-lg p-8 text-center">
                        <h3 class="text-lg font-medium text-gray-900 mb-2">{"Failed to load tournament"}</h3>
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
                    <div class="mb-6">
                        <h1 class="text-3xl font-bold text-gray-900">{format!("Scoring: {}", t.name)}</h1>
                        <p class="mt-1 text-gray-600">{"Award or deduct points for a team or player. Totals and ranks come back from the server."}</p>
                    </div>

                    <div class="bg-white shadow rounded-lg p-6 space-y-4">
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">{"Game"}</label>
                                <select
                                    onchange={{
                                        let selected_game = selected_game.clone();
                                        Callback::from(move |e: Event| {
                                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                            selected_game.set(select.value());
                                        })
                                    }}
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                                >
                                    <option value="" selected={selected_game.is_empty()}>{"Select a game…"}</option>
                                    {for t.games.iter().map(|game| html! {
                                        <option value={game.id.clone()} selected={*selected_game == game.id}>
                                            {&game.name}
                                        </option>
                                    })}
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">{"Mode"}</label>
                                <div class="flex rounded-md overflow-hidden border border-gray-300">
                                    <button
                                        onclick={{
                                            let score_type = score_type.clone();
                                            Callback::from(move |_| score_type.set(ScoreType::Team))
                                        }}
                                        class={classes!(
                                            "flex-1", "px-3", "py-2", "text-sm",
                                            if *score_type == ScoreType::Team { "bg-blue-600 text-white" } else { "bg-white text-gray-700" }
                                        )}
                                    >
                                        {"Team"}
                                    </button>
                                    <button
                                        onclick={{
                                            let score_type = score_type.clone();
                                            Callback::from(move |_| score_type.set(ScoreType::Player))
                                        }}
                                        class={classes!(
                                            "flex-1", "px-3", "py-2", "text-sm",
                                            if *score_type == ScoreType::Player { "bg-blue-600 text-white" } else { "bg-white text-gray-700" }
                                        )}
                                    >
                                        {"Player"}
                                    </button>
                                </div>
                            </div>
                        </div>

                        {match *score_type {
                            ScoreType::Team => html! {
                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Team"}</label>
                                        <select
                                            onchange={{
                                                let selected_team = selected_team.clone();
                                                Callback::from(move |e: Event| {
                                                    let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                    selected_team.set(select.value());
                                                })
                                            }}
                                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                                        >
                                            <option value="" selected={selected_team.is_empty()}>{"Select a team…"}</option>
                                            {for t.teams.iter().map(|team| html! {
                                                <option value={team.id.clone()} selected={*selected_team == team.id}>
                                                    {&team.name}
                                                </option>
                                            })}
                                        </select>
                                    </div>
                                    <div>
                                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Reason (optional)"}</label>
                                        <input
                                            type="text"
                                            value={(*reason).clone()}
                                            oninput={{
                                                let reason = reason.clone();
                                                Callback::from(move |e: InputEvent| {
                                                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                    reason.set(input.value());
                                                })
                                            }}
                                            placeholder="Round win bonus"
                                            class="w-full px-3 py-2 border border-gray-300 rounded-md"
                                        />
                                    </div>
                                </div>
                            },
                            ScoreType::Player => html! {
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Player"}</label>
                                    <select
                                        onchange={{
                                            let selected_player = selected_player.clone();
                                            Callback::from(move |e: Event| {
                                                let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                                                selected_player.set(select.value());
                                            })
                                        }}
                                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                                    >
                                        <option value="" selected={selected_player.is_empty()}>{"Select a player…"}</option>
                                        {for t.teams.iter().flat_map(|team| {
                                            let team_name = team.name.clone();
                                            let selected_player = selected_player.clone();
                                            team.players.iter().map(move |player| html! {
                                                <option value={player.id.clone()} selected={*selected_player == player.id}>
                                                    {format!("{} ({})", player.name, team_name)}
                                                </option>
                                            }).collect::<Vec<Html>>()
                                        })}
                                    </select>
                                </div>
                            },
                        }}

                        <div class="flex items-end gap-3">
                            <div class="flex-1">
                                <label class="block text-sm font-medium text-gray-700 mb-1">{"Points (negative to deduct)"}</label>
                                <input
                                    type="text"
                                    value={(*value).clone()}
                                    oninput={{
                                        let value = value.clone();
                                        Callback::from(move |e: InputEvent| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            value.set(input.value());
                                        })
                                    }}
                                    placeholder="e.g. 5 or -3"
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                                />
                            </div>
                            <button
                                onclick={on_submit}
                                disabled={*submitting}
                                class="px-6 py-2 bg-green-600 text-white rounded-md hover:bg-green-700 disabled:opacity-50"
                            >
                                {if *submitting { "Submitting..." } else { "Submit" }}
                            </button>
                        </div>
                    </div>

                    // Current standings, straight from the last fetch
                    <div class="mt-8 bg-white shadow rounded-lg">
                        <div class="px-6 py-4 border-b border-gray-200">
                            <h2 class="text-lg font-medium text-gray-900">{"Current team totals"}</h2>
                        </div>
                        <div class="divide-y divide-gray-200">
                            {for t.teams.iter().map(|team| html! {
                                <div class="px-6 py-3 flex items-center justify-between">
                                    <span class="text-sm font-medium text-gray-900">{&team.name}</span>
                                    <span class="text-sm text-gray-600">
                                        {format!("{} pts ({} + {} bonus)", team.combined_total, team.individual_total, team.bonus_total)}
                                    </span>
                                </div>
                            })}
                        </div>
                    </div>
                    </>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_game_blocks_submission() {
        let result = build_submission(ScoreType::Team, "", "team-1", None, "5", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_team_blocks_submission() {
        let result = build_submission(ScoreType::Team, "game-1", "", None, "5", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_player_blocks_submission() {
        let result = build_submission(ScoreType::Player, "game-1", "", None, "5", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_value_blocks_submission() {
        let result = build_submission(ScoreType::Team, "game-1", "team-1", None, "lots", "");
        assert!(result.is_err());
        let result = build_submission(ScoreType::Team, "game-1", "team-1", None, "", "");
        assert!(result.is_err());
    }

    #[test]
    fn test_team_submission_carries_reason() {
        let (submission, delta) =
            build_submission(ScoreType::Team, "game-1", "team-1", None, "5", "Round win").unwrap();
        assert_eq!(delta, 5);
        let teams = submission.team_scores.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].reason, "Round win");
        assert!(submission.player_scores.is_none());
    }

    #[test]
    fn test_team_submission_defaults_blank_reason() {
        let (submission, _) =
            build_submission(ScoreType::Team, "game-1", "team-1", None, "2", "   ").unwrap();
        assert_eq!(
            submission.team_scores.unwrap()[0].reason,
            "Manual adjustment"
        );
    }

    #[test]
    fn test_player_submission_includes_owning_team() {
        let (submission, delta) = build_submission(
            ScoreType::Player,
            "game-1",
            "",
            Some(("player-9", "team-2")),
            "-4",
            "",
        )
        .unwrap();
        assert_eq!(delta, -4);
        let players = submission.player_scores.unwrap();
        assert_eq!(players[0].player_id, "player-9");
        assert_eq!(players[0].team_id, "team-2");
        assert!(submission.team_scores.is_none());
    }
}
