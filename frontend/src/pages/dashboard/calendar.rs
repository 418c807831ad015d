use chrono::{Datelike, NaiveDate, Weekday};

use crate::{data::LeaveSchedule, utils::navigation::apply_leave_link, utils::time};

pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Mutually exclusive, listed from highest to lowest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCategory {
    PublicHoliday,
    Weekend,
    PersonalLeave,
    Working,
}

impl DayCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DayCategory::PublicHoliday => "Public Holiday",
            DayCategory::Weekend => "Weekend",
            DayCategory::PersonalLeave => "Personal Leave",
            DayCategory::Working => "",
        }
    }

    pub fn is_leave(&self) -> bool {
        !matches!(self, DayCategory::Working)
    }

    pub fn cell_class(&self) -> &'static str {
        match self {
            DayCategory::PublicHoliday => "bg-green-200",
            DayCategory::Weekend => "bg-yellow-200",
            DayCategory::PersonalLeave => "bg-red-200",
            DayCategory::Working => "bg-white hover:bg-indigo-50",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Placeholder,
    Day {
        date: NaiveDate,
        category: DayCategory,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellClick {
    Ignore,
    ShowLeave { date: NaiveDate, category: DayCategory },
    Apply(String),
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `schedules` should already be narrowed to the viewing user.
pub fn categorize(
    date: NaiveDate,
    holidays: &[NaiveDate],
    schedules: &[LeaveSchedule],
) -> DayCategory {
    if holidays.contains(&date) {
        DayCategory::PublicHoliday
    } else if is_weekend(date) {
        DayCategory::Weekend
    } else if schedules.iter().any(|s| s.contains(date)) {
        DayCategory::PersonalLeave
    } else {
        DayCategory::Working
    }
}

/// Monday-first cells for one month, padded with placeholders to whole weeks.
pub fn month_cells(
    year: i32,
    month: u32,
    holidays: &[NaiveDate],
    schedules: &[LeaveSchedule],
) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_monday() as usize;
    let mut cells = vec![CalendarCell::Placeholder; leading];
    cells.extend(
        first
            .iter_days()
            .take(time::days_in_month(year, month) as usize)
            .map(|date| CalendarCell::Day {
                date,
                category: categorize(date, holidays, schedules),
            }),
    );
    while cells.len() % 7 != 0 {
        cells.push(CalendarCell::Placeholder);
    }
    cells
}

pub fn weeks(cells: &[CalendarCell]) -> Vec<Vec<CalendarCell>> {
    cells.chunks(7).map(|week| week.to_vec()).collect()
}

pub fn click_outcome(cell: CalendarCell) -> CellClick {
    match cell {
        CalendarCell::Placeholder => CellClick::Ignore,
        CalendarCell::Day { date, category } if category.is_leave() => {
            CellClick::ShowLeave { date, category }
        }
        CalendarCell::Day { date, .. } => CellClick::Apply(apply_leave_link(date)),
    }
}
