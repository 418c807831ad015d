use std::time::Duration;

use leptos::*;

use crate::utils::timer::run_after;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastState {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    auto_dismiss: bool,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
            auto_dismiss: cfg!(target_arch = "wasm32"),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));
        if self.auto_dismiss {
            let this = *self;
            run_after(TOAST_DURATION, move || this.dismiss(id));
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastState {
    let state = ToastState::new();
    provide_context(state);
    state
}

pub fn use_toasts() -> ToastState {
    use_context::<ToastState>().unwrap_or_else(provide_toasts)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn toasts_queue_in_order_and_dismiss_by_id() {
        with_runtime(|| {
            let toasts = ToastState::new();
            toasts.success("saved");
            toasts.error("failed");
            let list = toasts.toasts().get();
            assert_eq!(list.len(), 2);
            assert_eq!(list[0].kind, ToastKind::Success);
            assert_eq!(list[1].message, "failed");

            toasts.dismiss(list[0].id);
            let list = toasts.toasts().get();
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].message, "failed");
        });
    }

    #[test]
    fn use_toasts_shares_the_provided_state() {
        with_runtime(|| {
            let provided = provide_toasts();
            use_toasts().success("hello");
            assert_eq!(provided.toasts().get().len(), 1);
        });
    }
}
