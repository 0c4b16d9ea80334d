use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::SessionContext;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().unwrap();
    let is_mobile_menu_open = use_state(|| false);

    let on_logout_click = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session.logout.emit(());
            navigator.push(&Route::Home);
        })
    };

    let toggle_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_| {
            is_mobile_menu_open.set(!*is_mobile_menu_open);
        })
    };

    let close_mobile_menu = {
        let is_mobile_menu_open = is_mobile_menu_open.clone();
        Callback::from(move |_| {
            is_mobile_menu_open.set(false);
        })
    };

    let nav_links = |on_click: Callback<MouseEvent>| {
        html! {
            <>
                <Link<Route> to={Route::Home} classes="text-gray-200 hover:text-white px-3 py-2 text-sm font-medium">
                    <span onclick={on_click.clone()}>{"Home"}</span>
                </Link<Route>>
                <Link<Route> to={Route::Scoreboard} classes="text-gray-200 hover:text-white px-3 py-2 text-sm font-medium">
                    <span onclick={on_click.clone()}>{"Scoreboard"}</span>
                </Link<Route>>
                if session.state.is_authenticated() {
                    <Link<Route> to={Route::Dashboard} classes="text-gray-200 hover:text-white px-3 py-2 text-sm font-medium">
                        <span onclick={on_click.clone()}>{"Dashboard"}</span>
                    </Link<Route>>
                }
            </>
        }
    };

    html! {
        <nav class="bg-slate-900 shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center">
                        <Link<Route> to={Route::Home} classes="flex items-center">
                            <span class="text-2xl mr-2">{"🎉"}</span>
                            <span class="text-xl font-bold text-white tracking-tight">{"Party Night"}</span>
                        </Link<Route>>
                    </div>

                    <div class="hidden md:flex items-center space-x-2">
                        {nav_links(Callback::from(|_| ()))}
                        if session.state.is_authenticated() {
                            <div class="flex items-center ml-4 pl-4 border-l border-slate-700">
                                if let Some(username) = &session.state.username {
                                    <span class="text-gray-300 text-sm mr-3">{username}</span>
                                }
                                <button
                                    onclick={on_logout_click.clone()}
                                    class="px-3 py-1.5 text-sm bg-slate-700 text-white rounded-md hover:bg-slate-600"
                                >
                                    {"Log out"}
                                </button>
                            </div>
                        } else {
                            <Link<Route> to={Route::Login} classes="ml-4 px-3 py-1.5 text-sm bg-blue-600 text-white rounded-md hover:bg-blue-700">
                                {"Admin login"}
                            </Link<Route>>
                        }
                    </div>

                    <div class="md:hidden">
                        <button
                            onclick={toggle_mobile_menu}
                            class="text-gray-200 hover:text-white focus:outline-none p-2"
                        >
                            <span class="text-xl">{if *is_mobile_menu_open { "✕" } else { "☰" }}</span>
                        </button>
                    </div>
                </div>
            </div>

            if *is_mobile_menu_open {
                <div class="md:hidden px-4 pb-4 space-y-1 flex flex-col">
                    {nav_links(close_mobile_menu.clone())}
                    if session.state.is_authenticated() {
                        <button
                            onclick={on_logout_click}
                            class="mt-2 px-3 py-2 text-sm bg-slate-700 text-white rounded-md hover:bg-slate-600 text-left"
                        >
                            {"Log out"}
                        </button>
                    } else {
                        <Link<Route> to={Route::Login} classes="mt-2 px-3 py-2 text-sm bg-blue-600 text-white rounded-md hover:bg-blue-700">
                            <span onclick={close_mobile_menu}>{"Admin login"}</span>
                        </Link<Route>>
                    }
                </div>
            }
        </nav>
    }
}
