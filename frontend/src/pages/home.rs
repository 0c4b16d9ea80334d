use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::games::get_game_by_code;
use crate::codes::sanitize_game_code;
use crate::Route;

/// Landing page: players type a game code to jump straight to that game's
/// view, or head to the public scoreboard.
#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().unwrap();
    let code = use_state(String::new);
    let looking_up = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_code_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    let on_submit = {
        let code = code.clone();
        let looking_up = looking_up.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let sanitized = sanitize_game_code(&code);
            if sanitized.is_empty() {
                error.set(Some("Enter a game code".to_string()));
                return;
            }

            looking_up.set(true);
            error.set(None);

            let raw = (*code).clone();
            let looking_up = looking_up.clone();
            let error = error.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                match get_game_by_code(&raw).await {
                    Ok(game) => {
                        looking_up.set(false);
                        navigator.push(&Route::GameView { game_id: game.id });
                    }
                    Err(e) => {
                        looking_up.set(false);
                        error.set(Some(e));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center">
            <div class="max-w-md mx-auto w-full px-4 py-12">
                <div class="text-center mb-8">
                    <div class="text-6xl mb-4">{"🎉"}</div>
                    <h1 class="text-3xl font-bold text-gray-900">{"Party Night"}</h1>
                    <p class="mt-2 text-gray-600">{"Enter a game code to see its scores, or check the live scoreboard."}</p>
                </div>

                <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
                    if let Some(message) = &*error {
                        <div class="text-sm text-red-700 bg-red-50 border border-red-200 rounded-md p-3">
                            {message}
                        </div>
                    }

                    <div>
                        <label for="game-code" class="block text-sm font-medium text-gray-700 mb-1">
                            {"Game code"}
                        </label>
                        <input
                            id="game-code"
                            type="text"
                            value={(*code).clone()}
                            oninput={on_code_input}
                            placeholder="ABC123"
                            class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm text-center text-lg tracking-widest uppercase focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={*looking_up}
                        class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *looking_up { "Looking up..." } else { "Find game" }}
                    </button>
                </form>

                <div class="mt-6 text-center">
                    <Link<Route> to={Route::Scoreboard} classes="text-blue-600 hover:text-blue-800 hover:underline">
                        {"View the live scoreboard →"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
