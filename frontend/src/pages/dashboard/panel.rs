use crate::components::{cards::SectionCard, forms::MonthSelect};
use crate::config;
use crate::pages::dashboard::{
    components::{LeaveBalances, LeaveCalendar, LeaveRequestTable, RecentActivity, TeamSnapshot},
    utils::{activity_feed, dashboard_balances},
    view_model::use_dashboard_view_model,
};
use crate::utils::time;
use chrono::Datelike;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let cfg = config::current();
    let today = time::today();

    let activities = vm.data.hr_activities().to_vec();
    let selected_leave = vm.selected_leave;
    let feed = Signal::derive(move || activity_feed(&activities, selected_leave.get()));

    let calendar_cells = vm.calendar_cells(cfg.calendar_year, cfg.calendar_month);
    let on_cell = Callback::new(vm.handle_cell_click());
    let on_colleague = Callback::new(vm.handle_colleague_click());
    let selected_month = vm.selected_month;
    let month_picker = view! { <MonthSelect selected=selected_month /> }.into_view();
    let balances = dashboard_balances(&vm.data);
    let requests = vm.data.leave_requests().to_vec();
    let colleagues = vm.colleagues();
    let source = vm.status_source.clone();

    view! {
        <div class="w-full max-w-6xl mx-auto px-3 sm:px-4">
            <div class="flex flex-col gap-5 sm:gap-6">
                <SectionCard title="Leave Balances">
                    <LeaveBalances balances=balances />
                </SectionCard>

                <div class="flex flex-col md:flex-row gap-5 sm:gap-6">
                    <SectionCard title="Recent Leave Requests" class="flex-[3]">
                        <LeaveRequestTable requests=requests />
                    </SectionCard>
                    <div class="flex-[2] bg-white/20 backdrop-blur-[16px] rounded-xl p-4 sm:p-5 shadow-md">
                        <RecentActivity items=feed />
                    </div>
                </div>

                <SectionCard title="Employee Leave Calendar">
                    <LeaveCalendar cells=calendar_cells on_select=on_cell />
                </SectionCard>

                <SectionCard title="Our Team" action=month_picker>
                    <TeamSnapshot
                        colleagues=colleagues
                        month=selected_month
                        year=today.year()
                        today=today
                        source=source
                        on_select=on_colleague
                    />
                </SectionCard>
            </div>
        </div>
    }
}
