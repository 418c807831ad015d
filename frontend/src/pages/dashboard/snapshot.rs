use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use leptos::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::utils::time;

pub const SNAPSHOT_ROW_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotStatus {
    Working,
    Leave,
    Holiday,
    Empty,
}

impl SnapshotStatus {
    pub const ALL: [SnapshotStatus; 4] = [
        SnapshotStatus::Working,
        SnapshotStatus::Leave,
        SnapshotStatus::Holiday,
        SnapshotStatus::Empty,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SnapshotStatus::Working => "working",
            SnapshotStatus::Leave => "leave",
            SnapshotStatus::Holiday => "holiday",
            SnapshotStatus::Empty => "empty",
        }
    }

    pub fn border_class(&self) -> &'static str {
        match self {
            SnapshotStatus::Working => "border-green-400",
            SnapshotStatus::Leave => "border-orange-400",
            SnapshotStatus::Holiday => "border-red-400",
            SnapshotStatus::Empty => "border-gray-300",
        }
    }
}

/// Supplies the per-day status shown in the team snapshot.
pub trait StatusSource {
    fn status_for(&self, user_id: &str, date: NaiveDate) -> SnapshotStatus;
}

/// Demo statuses: pseudo-random but stable for a seed, colleague and date.
#[derive(Debug, Clone, Copy)]
pub struct SeededStatusSource {
    seed: u64,
}

impl SeededStatusSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over seed, colleague id and day number; fixed across toolchains.
fn day_seed(seed: u64, user_id: &str, date: NaiveDate) -> u64 {
    seed.to_le_bytes()
        .into_iter()
        .chain(user_id.bytes())
        .chain([0xff])
        .chain(date.num_days_from_ce().to_le_bytes())
        .fold(FNV_OFFSET, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        })
}

impl StatusSource for SeededStatusSource {
    fn status_for(&self, user_id: &str, date: NaiveDate) -> SnapshotStatus {
        let mut rng = StdRng::seed_from_u64(day_seed(self.seed, user_id, date));
        SnapshotStatus::ALL[rng.gen_range(0..SnapshotStatus::ALL.len())]
    }
}

#[derive(Clone)]
pub struct SharedStatusSource(pub Rc<dyn StatusSource>);

impl SharedStatusSource {
    pub fn seeded_from_config() -> Self {
        Self(Rc::new(SeededStatusSource::new(
            crate::config::current().snapshot_seed,
        )))
    }
}

pub fn use_status_source() -> Rc<dyn StatusSource> {
    use_context::<SharedStatusSource>()
        .unwrap_or_else(SharedStatusSource::seeded_from_config)
        .0
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySquare {
    pub day: u32,
    pub weekday_initial: &'static str,
    pub status: SnapshotStatus,
    pub is_today: bool,
}

impl DaySquare {
    pub fn title(&self) -> String {
        format!("Day {}: {}", self.day, self.status.label())
    }
}

/// Sunday-first initials, indexed by days from Sunday.
const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

pub fn day_squares(
    source: &dyn StatusSource,
    user_id: &str,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Vec<DaySquare> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    first
        .iter_days()
        .take(time::days_in_month(year, month) as usize)
        .map(|date| DaySquare {
            day: date.day(),
            weekday_initial: WEEKDAY_INITIALS[date.weekday().num_days_from_sunday() as usize],
            status: source.status_for(user_id, date),
            is_today: date == today,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::FixedStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seeded_source_is_stable_per_colleague_and_day() {
        let source = SeededStatusSource::new(42);
        let day = date(2025, 4, 9);
        assert_eq!(source.status_for("2", day), source.status_for("2", day));
        let again = SeededStatusSource::new(42);
        assert_eq!(source.status_for("3", day), again.status_for("3", day));
    }

    #[test]
    fn day_seed_is_pinned() {
        assert_eq!(day_seed(42, "2", date(2025, 4, 9)), 15138111957482114405);
        assert_eq!(day_seed(0, "", date(1, 1, 1)), 4151029772181430783);
        assert_ne!(day_seed(42, "2", date(2025, 4, 9)), day_seed(42, "3", date(2025, 4, 9)));
    }

    #[test]
    fn seeded_source_covers_more_than_one_status() {
        let source = SeededStatusSource::new(7);
        let statuses: std::collections::HashSet<_> = date(2025, 1, 1)
            .iter_days()
            .take(120)
            .map(|d| source.status_for("2", d))
            .collect();
        assert!(statuses.len() > 1);
    }

    #[test]
    fn squares_cover_the_month_with_weekday_initials() {
        let source = FixedStatus(SnapshotStatus::Leave);
        let squares = day_squares(&source, "2", 2025, 4, date(2025, 4, 26));
        assert_eq!(squares.len(), 30);
        // 2025-04-01 is a Tuesday.
        assert_eq!(squares[0].weekday_initial, "T");
        assert_eq!(squares[5].weekday_initial, "S");
        assert!(squares.iter().all(|s| s.status == SnapshotStatus::Leave));
        let today: Vec<_> = squares.iter().filter(|s| s.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, 26);
        assert_eq!(squares[8].title(), "Day 9: leave");
    }

    #[test]
    fn today_is_unmarked_in_other_months() {
        let source = FixedStatus(SnapshotStatus::Working);
        let squares = day_squares(&source, "2", 2025, 2, date(2025, 4, 26));
        assert_eq!(squares.len(), 28);
        assert!(squares.iter().all(|s| !s.is_today));
    }

    #[test]
    fn border_classes_follow_status() {
        assert_eq!(SnapshotStatus::Working.border_class(), "border-green-400");
        assert_eq!(SnapshotStatus::Empty.border_class(), "border-gray-300");
    }
}
