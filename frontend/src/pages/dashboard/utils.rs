use chrono::NaiveDate;

use crate::{
    data::{fixtures, ActivityKind, DataClient, HrActivity, LeaveBalance},
    pages::dashboard::calendar::DayCategory,
    utils::time,
};

/// The calendar day the user last clicked that was not a plain working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedLeave {
    pub date: NaiveDate,
    pub category: DayCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub key: String,
    pub kind: ActivityKind,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
}

impl ActivityItem {
    pub fn date_label(&self) -> String {
        time::format_short(self.date)
    }

    pub fn is_leave(&self) -> bool {
        self.kind == ActivityKind::Leave
    }
}

/// HR activities in table order, followed by the selected leave day if any.
pub fn activity_feed(activities: &[HrActivity], selected: Option<SelectedLeave>) -> Vec<ActivityItem> {
    let mut feed: Vec<ActivityItem> = activities
        .iter()
        .map(|activity| ActivityItem {
            key: format!("hr-{}", activity.id),
            kind: activity.kind,
            title: activity.title.clone(),
            date: activity.date,
            description: activity.description.clone(),
        })
        .collect();
    if let Some(leave) = selected {
        feed.push(ActivityItem {
            key: format!("leave-{}", leave.date),
            kind: ActivityKind::Leave,
            title: format!("Leave on {}", time::format_short(leave.date)),
            date: leave.date,
            description: format!("You are on {}.", leave.category.label()),
        });
    }
    feed
}

pub fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Announcement => "📣",
        ActivityKind::Workshop => "📘",
        ActivityKind::Event => "⭐",
        ActivityKind::Leave => "🏖",
    }
}

/// Regular balances plus the dashboard-only maternity entry.
pub fn dashboard_balances(data: &DataClient) -> Vec<LeaveBalance> {
    let mut balances = data.leave_balances().to_vec();
    balances.push(fixtures::maternity_balance());
    balances
}

pub fn balance_caption(balance: &LeaveBalance) -> String {
    format!("{} of {} days remaining", balance.balance, balance.total)
}

/// Inline width for the balance bar; follows the unclamped percentage.
pub fn balance_bar_style(balance: &LeaveBalance) -> String {
    format!("width: {}%", balance.percentage())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LeaveType;

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    #[test]
    fn feed_appends_selected_leave_last() {
        let activities = fixtures::hr_activities();
        let feed = activity_feed(
            &activities,
            Some(SelectedLeave {
                date: d(4, 21),
                category: DayCategory::PersonalLeave,
            }),
        );
        assert_eq!(feed.len(), activities.len() + 1);
        let last = feed.last().unwrap();
        assert_eq!(last.title, "Leave on Apr 21");
        assert_eq!(last.description, "You are on Personal Leave.");
        assert!(last.is_leave());
        assert!(!feed[0].is_leave());
    }

    #[test]
    fn feed_without_selection_is_just_activities() {
        let feed = activity_feed(&fixtures::hr_activities(), None);
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].title, "Company Picnic");
        assert_eq!(feed[0].date_label(), "May 15");
    }

    #[test]
    fn weekend_selection_names_the_category() {
        let feed = activity_feed(
            &[],
            Some(SelectedLeave {
                date: d(4, 5),
                category: DayCategory::Weekend,
            }),
        );
        assert_eq!(feed[0].description, "You are on Weekend.");
    }

    #[test]
    fn dashboard_balances_include_maternity() {
        let balances = dashboard_balances(&DataClient::new());
        assert_eq!(balances.len(), 4);
        assert_eq!(balances[3].leave_type, LeaveType::Maternity);
        assert_eq!(balance_caption(&balances[3]), "60 of 90 days remaining");
    }

    #[test]
    fn bar_width_matches_percentage() {
        let annual = LeaveBalance {
            leave_type: LeaveType::Annual,
            balance: 15,
            total: 20,
        };
        assert_eq!(balance_bar_style(&annual), "width: 75%");
    }

    #[test]
    fn bar_width_overflows_when_balance_exceeds_total() {
        let odd = LeaveBalance {
            leave_type: LeaveType::Sick,
            balance: 12,
            total: 10,
        };
        assert_eq!(balance_bar_style(&odd), "width: 120%");
    }
}
