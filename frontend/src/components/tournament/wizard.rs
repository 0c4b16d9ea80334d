use log::debug;
use shared::TournamentDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::details_step::DetailsStep;
use super::draft::{DraftAction, TournamentDraft, WizardStep};
use super::games_step::GamesStep;
use super::review_step::ReviewStep;
use super::teams_step::TeamsStep;
use crate::api::tournaments::create_tournament;

const STEPS: [WizardStep; 4] = [
    WizardStep::Details,
    WizardStep::Teams,
    WizardStep::Games,
    WizardStep::Review,
];

#[derive(Properties, Clone, PartialEq)]
pub struct TournamentWizardProps {
    pub on_created: Callback<TournamentDto>,
}

/// Multi-step tournament creation. One reducer holds the whole draft;
/// forward moves are gated per step and backward moves lose nothing.
#[function_component(TournamentWizard)]
pub fn tournament_wizard(props: &TournamentWizardProps) -> Html {
    let draft = use_reducer_eq(TournamentDraft::default);
    let step = use_state(|| WizardStep::Details);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    let on_action = {
        let draft = draft.clone();
        Callback::from(move |action: DraftAction| {
            draft.dispatch(action);
        })
    };

    let on_next = {
        let draft = draft.clone();
        let step = step.clone();
        Callback::from(move |_| {
            if draft.can_advance(*step) {
                step.set(step.next());
            }
        })
    };

    let on_back = {
        let step = step.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |_| {
            submit_error.set(None);
            step.set(step.prev());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let submit_error = submit_error.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |()| {
            let request = draft.to_request();
            debug!("Submitting tournament: {}", request.name);

            submitting.set(true);
            submit_error.set(None);

            let submitting = submitting.clone();
            let submit_error = submit_error.clone();
            let on_created = on_created.clone();
            spawn_local(async move {
                match create_tournament(&request).await {
                    Ok(tournament) => {
                        submitting.set(false);
                        on_created.emit(tournament);
                    }
                    Err(e) => {
                        // Stay on the review step with the error inline.
                        submitting.set(false);
                        submit_error.set(Some(e));
                    }
                }
            });
        })
    };

    let current = *step;

    html! {
        <div class="space-y-6">
            // Step indicator
            <div class="flex items-center justify-between">
                {for STEPS.iter().map(|s| {
                    let reached = s.index() <= current.index();
                    html! {
                        <div class="flex-1 flex flex-col items-center">
                            <div class={classes!(
                                "w-8", "h-8", "rounded-full", "flex", "items-center", "justify-center", "text-sm", "font-semibold",
                                if reached { "bg-blue-600 text-white" } else { "bg-gray-200 text-gray-500" }
                            )}>
                                {s.index() + 1}
                            </div>
                            <span class="mt-1 text-xs text-gray-600">{s.title()}</span>
                        </div>
                    }
                })}
            </div>

            {match current {
                WizardStep::Details => html! {
                    <DetailsStep draft={(*draft).clone()} on_action={on_action.clone()} />
                },
                WizardStep::Teams => html! {
                    <TeamsStep draft={(*draft).clone()} on_action={on_action.clone()} />
                },
                WizardStep::Games => html! {
                    <GamesStep draft={(*draft).clone()} on_action={on_action.clone()} />
                },
                WizardStep::Review => html! {
                    <ReviewStep
                        draft={(*draft).clone()}
                        submitting={*submitting}
                        error={(*submit_error).clone()}
                        on_submit={on_submit.clone()}
                    />
                },
            }}

            <div class="flex justify-between pt-4 border-t border-gray-200">
                <button
                    onclick={on_back}
                    disabled={current == WizardStep::Details || *submitting}
                    class="px-4 py-2 text-sm bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300 disabled:opacity-40"
                >
                    {"Back"}
                </button>
                if current != WizardStep::Review {
                    <button
                        onclick={on_next}
                        disabled={!draft.can_advance(current)}
                        class="px-4 py-2 text-sm bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-40"
                    >
                        {"Next"}
                    </button>
                }
            </div>
        </div>
    }
}
