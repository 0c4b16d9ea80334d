use shared::GameDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::draft::{DraftAction, TournamentDraft};
use crate::api::games::get_all_games;

#[derive(Properties, Clone, PartialEq)]
pub struct GamesStepProps {
    pub draft: TournamentDraft,
    pub on_action: Callback<DraftAction>,
}

/// Game selection step. Loads the catalog once on mount; selection state
/// lives in the shared draft so it survives back-navigation.
#[function_component(GamesStep)]
pub fn games_step(props: &GamesStepProps) -> Html {
    let games = use_state(|| None::<Vec<GameDto>>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let games = games.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match get_all_games().await {
                    Ok(list) => {
                        games.set(Some(list));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        });
    }

    html! {
        <div class="space-y-4">
            <p class="text-sm text-gray-600">{"Pick at least one game for this tournament."}</p>

            if *loading {
                <div class="text-center py-6 text-gray-500">{"Loading games..."}</div>
            } else if let Some(message) = &*error {
                <div class="text-sm text-red-700 bg-red-50 border border-red-200 rounded-md p-3">
                    {message}
                </div>
            } else if let Some(game_list) = &*games {
                if game_list.is_empty() {
                    <div class="text-center py-6 text-gray-500">
                        {"No games yet. Create one from the dashboard first."}
                    </div>
                } else {
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                        {for game_list.iter().map(|game| {
                            let selected = props.draft.selected_game_ids.contains(&game.id);
                            let on_toggle = {
                                let on_action = props.on_action.clone();
                                let game_id = game.id.clone();
                                Callback::from(move |_| {
                                    on_action.emit(DraftAction::ToggleGame(game_id.clone()));
                                })
                            };
                            html! {
                                <button
                                    onclick={on_toggle}
                                    class={classes!(
                                        "text-left", "border", "rounded-lg", "p-3", "transition-colors",
                                        if selected {
                                            "border-blue-500 bg-blue-50"
                                        } else {
                                            "border-gray-200 hover:border-gray-300"
                                        }
                                    )}
                                >
                                    <div class="flex items-center justify-between">
                                        <span class="font-medium text-gray-900">{&game.name}</span>
                                        if selected {
                                            <span class="text-blue-600 font-bold">{"✓"}</span>
                                        }
                                    </div>
                                    if let Some(description) = &game.description {
                                        <p class="text-xs text-gray-500 mt-1 truncate">{description}</p>
                                    }
                                </button>
                            }
                        })}
                    </div>
                }
            }
        </div>
    }
}
