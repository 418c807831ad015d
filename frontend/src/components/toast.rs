use crate::state::toast::{use_toasts, ToastKind};
use leptos::*;

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-50 border-green-200 text-green-800",
        ToastKind::Error => "bg-red-50 border-red-200 text-red-800",
    }
}

/// Stacks the active toasts in the top-right corner; a click dismisses one.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let list = toasts.toasts();
    view! {
        <div class="fixed top-4 right-4 z-[200] flex flex-col gap-2" aria-live="polite">
            <For
                each=move || list.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "min-w-[240px] max-w-sm px-4 py-3 rounded-lg border shadow-md text-sm cursor-pointer {}",
                                toast_class(toast.kind),
                            )
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
