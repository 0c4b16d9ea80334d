use shared::TournamentDto;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common_toast::{Toast, ToastContext, ToastType};
use crate::components::tournament::wizard::TournamentWizard;
use crate::Route;

/// Hosts the multi-step creation wizard. On success the admin lands back on
/// the dashboard with a confirmation toast.
#[function_component(CreateTournament)]
pub fn create_tournament() -> Html {
    let navigator = use_navigator().unwrap();
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_created = {
        let navigator = navigator.clone();
        let toast_context = toast_context.clone();
        Callback::from(move |tournament: TournamentDto| {
            toast_context.add_toast.emit(Toast::new(
                format!("Tournament \"{}\" created", tournament.name),
                ToastType::Success,
            ));
            navigator.push(&Route::Dashboard);
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Dashboard);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-3xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-3xl font-bold text-gray-900">{"New Tournament"}</h1>
                    <button
                        onclick={on_back}
                        class="text-sm text-gray-500 hover:text-gray-700 hover:underline"
                    >
                        {"← Back to dashboard"}
                    </button>
                </div>

                <div class="bg-white shadow rounded-lg p-6">
                    <TournamentWizard on_created={on_created} />
                </div>
            </div>
        </div>
    }
}
