use shared::{CreateGameRequest, GameDto, GameScoringDto};
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::games::create_game;
use crate::components::common_modal::Modal;

#[derive(Properties, Clone, PartialEq)]
pub struct CreateGameModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_created: Callback<GameDto>,
}

/// Controlled-input form for creating a game template. Kept inside the
/// shared modal so a failed submit leaves the inputs intact.
#[function_component(CreateGameModal)]
pub fn create_game_modal(props: &CreateGameModalProps) -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);
    let participants = use_state(String::new);
    let max_points = use_state(String::new);
    let rounds = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_participants_input = {
        let participants = participants.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            participants.set(input.value());
        })
    };

    let on_max_points_input = {
        let max_points = max_points.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            max_points.set(input.value());
        })
    };

    let on_rounds_input = {
        let rounds = rounds.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            rounds.set(input.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
        let participants = participants.clone();
        let max_points = max_points.clone();
        let rounds = rounds.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let scoring = match (
                (*max_points).trim().parse::<i32>(),
                (*rounds).trim().parse::<i32>(),
            ) {
                (Ok(max_points), Ok(rounds)) => Some(GameScoringDto { max_points, rounds }),
                _ => None,
            };

            let request = CreateGameRequest {
                name: (*name).trim().to_string(),
                description: {
                    let d = (*description).trim().to_string();
                    if d.is_empty() { None } else { Some(d) }
                },
                participants: (*participants)
                    .lines()
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect(),
                scoring,
            };

            if let Err(validation) = request.validate() {
                error.set(Some(validation.to_string()));
                return;
            }

            submitting.set(true);
            error.set(None);

            let name = name.clone();
            let description = description.clone();
            let participants = participants.clone();
            let max_points = max_points.clone();
            let rounds = rounds.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_created = on_created.clone();

            spawn_local(async move {
                match create_game(&request).await {
                    Ok(game) => {
                        submitting.set(false);
                        name.set(String::new());
                        description.set(String::new());
                        participants.set(String::new());
                        max_points.set(String::new());
                        rounds.set(String::new());
                        on_created.emit(game);
                    }
                    Err(e) => {
                        // Keep the modal open with inputs intact
                        submitting.set(false);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    html! {
        <Modal is_open={props.is_open} title={"Create Game".to_string()} on_close={props.on_close.clone()}>
            <form onsubmit={on_submit} class="space-y-4">
                if let Some(message) = &*error {
                    <div class="text-sm text-red-700 bg-red-50 border border-red-200 rounded-md p-3">
                        {message}
                    </div>
                }

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Name"}</label>
                    <input
                        type="text"
                        value={(*name).clone()}
                        oninput={on_name_input}
                        placeholder="Flip Cup"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                    <input
                        type="text"
                        value={(*description).clone()}
                        oninput={on_description_input}
                        placeholder="Relay-style cup flipping"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Participants (one per line)"}</label>
                    <textarea
                        value={(*participants).clone()}
                        oninput={on_participants_input}
                        rows="3"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                    />
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Max points per round"}</label>
                        <input
                            type="number"
                            value={(*max_points).clone()}
                            oninput={on_max_points_input}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Rounds"}</label>
                        <input
                            type="number"
                            value={(*rounds).clone()}
                            oninput={on_rounds_input}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>
                </div>

                <div class="flex justify-end gap-2 pt-2">
                    <button
                        type="button"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_| on_close.emit(()))
                        }}
                        class="px-4 py-2 text-sm bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="px-4 py-2 text-sm bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *submitting { "Creating..." } else { "Create game" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
