use std::time::Duration;

use super::utils::{self, LeaveDraft, FIELD_END, FIELD_REASON, FIELD_START, FIELD_TYPE};
use crate::{
    data::{LeaveRequest, Role},
    state::{
        auth::{use_session, SessionStore},
        toast::{use_toasts, ToastState},
    },
    utils::{
        navigation::{use_navigator, Navigator},
        timer::run_after,
        validation::FieldErrors,
    },
};
use leptos::*;

pub const REDIRECT_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    pub leave_type: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl LeaveFormState {
    pub fn new(initial_date: &str) -> Self {
        Self {
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(initial_date.to_string()),
            end_date: create_rw_signal(initial_date.to_string()),
            reason: create_rw_signal(String::new()),
        }
    }

    pub fn draft(&self) -> LeaveDraft {
        LeaveDraft {
            leave_type: self.leave_type.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            reason: self.reason.get_untracked(),
        }
    }

    pub fn reset(&self) {
        self.leave_type.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    fn signal(&self, field: &str) -> Option<RwSignal<String>> {
        match field {
            FIELD_TYPE => Some(self.leave_type),
            FIELD_START => Some(self.start_date),
            FIELD_END => Some(self.end_date),
            FIELD_REASON => Some(self.reason),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ApplyLeaveViewModel {
    pub form: LeaveFormState,
    pub errors: RwSignal<FieldErrors>,
    pub submitted: RwSignal<Vec<LeaveRequest>>,
    session: SessionStore,
    toasts: ToastState,
    navigator: Navigator,
}

impl ApplyLeaveViewModel {
    pub fn new(initial_date: Option<String>) -> Self {
        Self {
            form: LeaveFormState::new(&utils::prefill_date(initial_date)),
            errors: create_rw_signal(FieldErrors::new()),
            submitted: create_rw_signal(Vec::new()),
            session: use_session(),
            toasts: use_toasts(),
            navigator: use_navigator(),
        }
    }

    /// Writes a field and drops its pending error.
    pub fn set_field(&self, field: &'static str, value: String) {
        if let Some(signal) = self.form.signal(field) {
            signal.set(value);
        }
        self.errors.update(|errors| errors.clear(field));
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn submit(&self) -> bool {
        match utils::validate(&self.form.draft()) {
            Ok(leave) => {
                let user_id = self
                    .session
                    .current_user()
                    .map(|user| user.id)
                    .unwrap_or_default();
                let sequence = self.submitted.with_untracked(Vec::len) + 1;
                let request = utils::pending_request(leave, &user_id, sequence);
                log::info!(
                    "leave application submitted: {} {}..{}",
                    request.leave_type.label(),
                    request.start_date,
                    request.end_date
                );
                self.submitted.update(|list| list.push(request));
                self.errors.set(FieldErrors::new());
                self.form.reset();
                self.toasts.success(utils::SUBMITTED_MESSAGE);
                let navigator = self.navigator.clone();
                run_after(REDIRECT_DELAY, move || {
                    navigator.go(Role::Employee.landing_path())
                });
                true
            }
            Err(errors) => {
                log::debug!("leave application rejected with {} field errors", errors.len());
                self.errors.set(errors);
                false
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::data::LeaveStatus;
    use crate::test_support::helpers::{
        employee_user, provide_recording_navigator, provide_session, provide_toast_state,
    };
    use crate::test_support::ssr::with_runtime;

    fn fill(vm: &ApplyLeaveViewModel, kind: &str, start: &str, end: &str, reason: &str) {
        vm.set_field(FIELD_TYPE, kind.into());
        vm.set_field(FIELD_START, start.into());
        vm.set_field(FIELD_END, end.into());
        vm.set_field(FIELD_REASON, reason.into());
    }

    #[test]
    fn end_before_start_blocks_submission() {
        with_runtime(|| {
            provide_session(Some(employee_user()));
            let toasts = provide_toast_state();
            let visited = provide_recording_navigator();
            let vm = ApplyLeaveViewModel::new(None);

            fill(&vm, "Annual", "2025-04-10", "2025-04-08", "Family trip");
            assert!(!vm.submit());

            assert_eq!(
                vm.error_for(FIELD_END).get().as_deref(),
                Some("End date must be after start date")
            );
            assert!(vm.submitted.get().is_empty());
            assert!(visited.borrow().is_empty());
            assert!(toasts.toasts().get().is_empty());
        });
    }

    #[test]
    fn valid_application_is_listed_and_redirects() {
        with_runtime(|| {
            provide_session(Some(employee_user()));
            let toasts = provide_toast_state();
            let visited = provide_recording_navigator();
            let vm = ApplyLeaveViewModel::new(None);

            fill(&vm, "Casual", "2025-04-08", "2025-04-09", "Errand");
            assert!(vm.submit());

            let submitted = vm.submitted.get();
            assert_eq!(submitted.len(), 1);
            assert_eq!(submitted[0].status, LeaveStatus::Pending);
            assert_eq!(submitted[0].user_id, "1");
            assert_eq!(
                toasts.toasts().get()[0].message,
                "Leave application submitted successfully!"
            );
            assert_eq!(visited.borrow().as_slice(), ["/employee/dashboard".to_string()]);
            assert!(vm.form.reason.get().is_empty());
        });
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        with_runtime(|| {
            provide_session(Some(employee_user()));
            provide_toast_state();
            provide_recording_navigator();
            let vm = ApplyLeaveViewModel::new(None);

            assert!(!vm.submit());
            assert_eq!(vm.errors.get().len(), 4);
            vm.set_field(FIELD_REASON, "Moving house".into());
            assert!(vm.error_for(FIELD_REASON).get().is_none());
            assert_eq!(
                vm.error_for(FIELD_TYPE).get().as_deref(),
                Some("Leave type is required")
            );
        });
    }

    #[test]
    fn calendar_date_prefills_both_ends() {
        with_runtime(|| {
            provide_session(Some(employee_user()));
            provide_recording_navigator();
            let vm = ApplyLeaveViewModel::new(Some("2025-04-08".into()));
            assert_eq!(vm.form.start_date.get(), "2025-04-08");
            assert_eq!(vm.form.end_date.get(), "2025-04-08");
        });
    }
}
