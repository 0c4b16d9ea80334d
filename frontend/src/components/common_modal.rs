use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Shared modal shell: dimmed overlay, click-outside to close, children as
/// the body. Forms stay mounted while open so input is never lost on error.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = {
        Callback::from(|e: MouseEvent| {
            e.stop_propagation();
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="relative bg-white rounded-lg shadow-xl p-6 max-w-lg w-full mx-4"
                onclick={on_modal_click}
            >
                <div class="flex items-start justify-between mb-4">
                    <h3 class="text-lg font-medium text-gray-900">{&props.title}</h3>
                    <button
                        onclick={on_close_click}
                        class="text-gray-400 hover:text-gray-600 focus:outline-none"
                    >
                        <span class="text-xl">{"×"}</span>
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
