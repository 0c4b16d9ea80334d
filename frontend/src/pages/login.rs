use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::SessionContext;
use crate::Route;

/// Admin login. Credentials go to `/auth/login`; the returned token is the
/// only thing persisted client-side.
#[function_component(Login)]
pub fn login() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().unwrap();
    let username = use_state(String::new);
    let password = use_state(String::new);

    // Already signed in (or just finished signing in): go to the dashboard.
    {
        let navigator = navigator.clone();
        let is_authenticated = session.state.is_authenticated();
        use_effect_with(is_authenticated, move |authed| {
            if *authed {
                navigator.push(&Route::Dashboard);
            }
            || ()
        });
    }

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let username = username.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            session
                .login
                .emit(((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center">
            <div class="max-w-sm mx-auto w-full px-4 py-12">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold text-gray-900">{"Admin Login"}</h1>
                    <p class="mt-1 text-gray-600 text-sm">{"Sign in to manage games and tournaments."}</p>
                </div>

                <form onsubmit={on_submit} class="bg-white shadow rounded-lg p-6 space-y-4">
                    if let Some(message) = &session.state.error {
                        <div class="text-sm text-red-700 bg-red-50 border border-red-200 rounded-md p-3">
                            {message}
                        </div>
                    }

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Username"}</label>
                        <input
                            type="text"
                            value={(*username).clone()}
                            oninput={on_username_input}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            type="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                            class="w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled={session.state.loading}
                        class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if session.state.loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="mt-6 text-center">
                    <Link<Route> to={Route::Home} classes="text-sm text-gray-500 hover:text-gray-700 hover:underline">
                        {"← Back to home"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
