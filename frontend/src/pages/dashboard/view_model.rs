use std::rc::Rc;

use crate::{
    components::forms::current_month,
    data::{DataClient, User},
    pages::dashboard::{
        calendar::{self, CalendarCell, CellClick},
        snapshot::{use_status_source, StatusSource},
        utils::SelectedLeave,
    },
    state::auth::use_auth,
    utils::navigation::{use_navigator, Navigator},
};
use leptos::*;

#[derive(Clone)]
pub struct DashboardViewModel {
    pub data: DataClient,
    pub user: Signal<Option<User>>,
    pub selected_month: RwSignal<u32>,
    pub selected_leave: RwSignal<Option<SelectedLeave>>,
    pub status_source: Rc<dyn StatusSource>,
    navigator: Navigator,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let auth = use_auth();
        Self {
            data: use_context::<DataClient>().unwrap_or_default(),
            user: Signal::derive(move || auth.get().user),
            selected_month: create_rw_signal(current_month()),
            selected_leave: create_rw_signal(None),
            status_source: use_status_source(),
            navigator: use_navigator(),
        }
    }

    pub fn colleagues(&self) -> Vec<User> {
        let current = self.user.get_untracked().map(|u| u.id);
        self.data.colleagues_of(current.as_deref())
    }

    pub fn calendar_cells(&self, year: i32, month: u32) -> Vec<CalendarCell> {
        let schedules = self
            .user
            .get_untracked()
            .map(|u| self.data.schedules_for(&u.id))
            .unwrap_or_default();
        calendar::month_cells(year, month, self.data.public_holidays(), &schedules)
    }

    pub fn handle_cell_click(&self) -> impl Fn(CalendarCell) + Clone + 'static {
        let selected_leave = self.selected_leave;
        let navigator = self.navigator.clone();
        move |cell| match calendar::click_outcome(cell) {
            CellClick::Ignore => {}
            CellClick::ShowLeave { date, category } => {
                selected_leave.set(Some(SelectedLeave { date, category }))
            }
            CellClick::Apply(path) => navigator.go(&path),
        }
    }

    pub fn handle_colleague_click(&self) -> impl Fn(String) + Clone + 'static {
        let navigator = self.navigator.clone();
        move |id| navigator.go(&format!("/employee/colleagues/{id}"))
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
