use yew::prelude::*;

use super::draft::TournamentDraft;

#[derive(Properties, Clone, PartialEq)]
pub struct ReviewStepProps {
    pub draft: TournamentDraft,
    pub submitting: bool,
    /// Submission failure, rendered inline; the wizard neither advances nor
    /// resets so the draft stays editable.
    pub error: Option<String>,
    pub on_submit: Callback<()>,
}

#[function_component(ReviewStep)]
pub fn review_step(props: &ReviewStepProps) -> Html {
    let player_count: usize = props.draft.teams.iter().map(|t| t.players.len()).sum();

    let on_submit_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };

    html! {
        <div class="space-y-4">
            if let Some(message) = &props.error {
                <div class="text-sm text-red-700 bg-red-50 border border-red-200 rounded-md p-3">
                    {"Failed to create tournament: "}{message}
                </div>
            }

            <div class="bg-gray-50 rounded-lg p-4">
                <h4 class="font-semibold text-gray-900">{&props.draft.name}</h4>
                if !props.draft.description.trim().is_empty() {
                    <p class="text-sm text-gray-600 mt-1">{&props.draft.description}</p>
                }
                <p class="text-sm text-gray-500 mt-2">
                    {format!(
                        "{} teams · {} players · {} games",
                        props.draft.teams.len(),
                        player_count,
                        props.draft.selected_game_ids.len()
                    )}
                </p>
            </div>

            <div class="space-y-3">
                {for props.draft.teams.iter().map(|team| html! {
                    <div class="border border-gray-200 rounded-lg p-3">
                        <div class="font-medium text-gray-900">{&team.name}</div>
                        <div class="mt-1 flex flex-wrap gap-2">
                            {for team.players.iter().map(|player| html! {
                                <span class="inline-flex items-center px-2 py-0.5 rounded-full text-xs bg-blue-100 text-blue-800">
                                    {format!("{} ({})", player.name, player.avatar)}
                                </span>
                            })}
                        </div>
                    </div>
                })}
            </div>

            <div class="flex justify-end">
                <button
                    onclick={on_submit_click}
                    disabled={props.submitting}
                    class="px-6 py-2 bg-green-600 text-white rounded-md hover:bg-green-700 disabled:opacity-50"
                >
                    {if props.submitting { "Creating..." } else { "Create tournament" }}
                </button>
            </div>
        </div>
    }
}
