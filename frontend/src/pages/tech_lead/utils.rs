use chrono::NaiveDate;

use crate::{
    data::{DataClient, LeaveSchedule, Role, User},
    utils::time,
};

pub fn team_members(data: &DataClient) -> Vec<User> {
    data.users_with_role(Role::Employee)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamLeave {
    pub member: String,
    pub schedule: LeaveSchedule,
}

impl TeamLeave {
    pub fn range_label(&self) -> String {
        if self.schedule.start_date == self.schedule.end_date {
            time::format_long(self.schedule.start_date)
        } else {
            format!(
                "{} - {}",
                time::format_long(self.schedule.start_date),
                time::format_long(self.schedule.end_date)
            )
        }
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, time::days_in_month(year, month))?;
    Some((first, last))
}

/// Team schedules overlapping the given month, by start date.
pub fn leave_in_month(data: &DataClient, year: i32, month: u32) -> Vec<TeamLeave> {
    let Some((first, last)) = month_bounds(year, month) else {
        return Vec::new();
    };
    let mut leave: Vec<TeamLeave> = team_members(data)
        .into_iter()
        .flat_map(|member| {
            data.schedules_for(&member.id)
                .into_iter()
                .filter(|s| s.start_date <= last && s.end_date >= first)
                .map(move |schedule| TeamLeave {
                    member: member.name.clone(),
                    schedule,
                })
        })
        .collect();
    leave.sort_by_key(|l| l.schedule.start_date);
    leave
}

pub fn off_on(data: &DataClient, date: NaiveDate) -> usize {
    team_members(data)
        .iter()
        .filter(|member| data.schedules_for(&member.id).iter().any(|s| s.contains(date)))
        .count()
}
