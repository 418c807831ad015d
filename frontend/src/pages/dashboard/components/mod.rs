pub mod activity;
pub mod balances;
pub mod leave_calendar;
pub mod requests;
pub mod team_snapshot;

pub use activity::RecentActivity;
pub use balances::LeaveBalances;
pub use leave_calendar::LeaveCalendar;
pub use requests::LeaveRequestTable;
pub use team_snapshot::TeamSnapshot;
