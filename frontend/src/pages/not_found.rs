use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex items-center">
            <div class="max-w-md mx-auto w-full px-4 py-12 text-center">
                <div class="text-6xl mb-4">{"🙈"}</div>
                <h1 class="text-3xl font-bold text-gray-900">{"404 — Page not found"}</h1>
                <p class="mt-2 text-gray-600">{"That page wandered off during the party."}</p>
                <div class="mt-6">
                    <Link<Route> to={Route::Home} classes="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
