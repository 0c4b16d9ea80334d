use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-slate-900 text-gray-400 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-2">
                    <p class="text-sm">
                        {"🎉 Party Night — tournaments for game nights"}
                    </p>
                    <p class="text-xs text-gray-500">
                        {"Scores update live while a tournament is running."}
                    </p>
                </div>
            </div>
        </footer>
    }
}
