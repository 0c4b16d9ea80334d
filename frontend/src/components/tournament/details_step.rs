use yew::prelude::*;

use super::draft::{DraftAction, TournamentDraft};

#[derive(Properties, Clone, PartialEq)]
pub struct DetailsStepProps {
    pub draft: TournamentDraft,
    pub on_action: Callback<DraftAction>,
}

#[function_component(DetailsStep)]
pub fn details_step(props: &DetailsStepProps) -> Html {
    let on_name_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_action.emit(DraftAction::SetName(input.value()));
        })
    };

    let on_description_input = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_action.emit(DraftAction::SetDescription(input.value()));
        })
    };

    html! {
        <div class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Tournament name"}</label>
                <input
                    type="text"
                    value={props.draft.name.clone()}
                    oninput={on_name_input}
                    placeholder="Spring Office Bash"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                />
                if props.draft.name.trim().is_empty() {
                    <p class="mt-1 text-xs text-gray-500">{"A name is required to continue."}</p>
                }
            </div>
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{"Description (optional)"}</label>
                <input
                    type="text"
                    value={props.draft.description.clone()}
                    oninput={on_description_input}
                    placeholder="Quarterly game night"
                    class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                />
            </div>
        </div>
    }
}
