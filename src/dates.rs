use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

const MONTHS_IT: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

pub const WEEKDAYS_IT: [&str; 7] = ["Lu", "Ma", "Me", "Gi", "Ve", "Sa", "Do"];

pub fn month_name(month: u32) -> &'static str {
    MONTHS_IT
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// "10 giugno 2025"
pub fn format_long(d: NaiveDate) -> String {
    format!("{} {} {}", d.day(), month_name(d.month()), d.year())
}

/// "2025-06-10"
pub fn format_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePhase {
    Empty,
    StartOnly(NaiveDate),
    Complete(NaiveDate, NaiveDate),
}

/// Check-in / check-out pair. Only ever produced by [`DateRange::select`], so
/// `to` implies `from` and `from <= to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    pub fn check_in(&self) -> Option<NaiveDate> {
        self.from
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        self.to
    }

    pub fn phase(&self) -> RangePhase {
        match (self.from, self.to) {
            (Some(f), Some(t)) => RangePhase::Complete(f, t),
            (Some(f), None) => RangePhase::StartOnly(f),
            _ => RangePhase::Empty,
        }
    }

    /// The range after the user clicks `day`.
    pub fn select(self, day: NaiveDate) -> DateRange {
        match self.phase() {
            RangePhase::StartOnly(from) if day >= from => DateRange {
                from: Some(from),
                to: Some(day),
            },
            _ => DateRange {
                from: Some(day),
                to: None,
            },
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match self.phase() {
            RangePhase::Complete(f, t) => f <= day && day <= t,
            RangePhase::StartOnly(f) => f == day,
            RangePhase::Empty => false,
        }
    }

    pub fn summary(&self) -> String {
        match self.phase() {
            RangePhase::Complete(f, t) => format!("Dal {} al {}", format_long(f), format_long(t)),
            RangePhase::StartOnly(f) => {
                format!("Check\u{2011}in: {}. Seleziona il check\u{2011}out.", format_long(f))
            }
            RangePhase::Empty => "Seleziona check\u{2011}in e check\u{2011}out".to_string(),
        }
    }
}

/// First day of a displayed calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub fn containing(d: NaiveDate) -> Self {
        MonthCursor(d.with_day(1).unwrap_or(d))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn next(self) -> Self {
        MonthCursor(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    pub fn prev(self) -> Self {
        MonthCursor(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    /// "giugno 2025"
    pub fn caption(&self) -> String {
        format!("{} {}", month_name(self.month()), self.year())
    }

    pub fn days_in_month(&self) -> u32 {
        self.next()
            .0
            .signed_duration_since(self.0)
            .num_days()
            .try_into()
            .unwrap_or(31)
    }

    /// Grid cells Monday-first; `None` pads before the 1st and after the last day
    /// so the length is a multiple of 7.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let lead = self.0.weekday().num_days_from_monday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        cells.extend(self.0.iter_days().take(self.days_in_month() as usize).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn first_click_starts_range() {
        let r = DateRange::default().select(d(2025, 6, 10));
        assert_eq!(r.phase(), RangePhase::StartOnly(d(2025, 6, 10)));
    }

    #[test]
    fn second_click_later_completes() {
        let r = DateRange::default()
            .select(d(2025, 6, 10))
            .select(d(2025, 6, 14));
        assert_eq!(r.phase(), RangePhase::Complete(d(2025, 6, 10), d(2025, 6, 14)));
    }

    #[test]
    fn same_day_twice_is_one_night_range() {
        let r = DateRange::default()
            .select(d(2025, 6, 10))
            .select(d(2025, 6, 10));
        assert_eq!(r.check_in(), Some(d(2025, 6, 10)));
        assert_eq!(r.check_out(), Some(d(2025, 6, 10)));
    }

    #[test]
    fn earlier_click_restarts() {
        let r = DateRange::default()
            .select(d(2025, 6, 10))
            .select(d(2025, 6, 3));
        assert_eq!(r.phase(), RangePhase::StartOnly(d(2025, 6, 3)));
        assert_eq!(r.check_out(), None);
    }

    #[test]
    fn click_after_complete_restarts() {
        let r = DateRange::default()
            .select(d(2025, 6, 10))
            .select(d(2025, 6, 14))
            .select(d(2025, 6, 20));
        assert_eq!(r.phase(), RangePhase::StartOnly(d(2025, 6, 20)));
    }

    #[test]
    fn contains_covers_endpoints() {
        let r = DateRange::default()
            .select(d(2025, 6, 10))
            .select(d(2025, 6, 14));
        assert!(r.contains(d(2025, 6, 10)));
        assert!(r.contains(d(2025, 6, 12)));
        assert!(r.contains(d(2025, 6, 14)));
        assert!(!r.contains(d(2025, 6, 15)));
    }

    #[test]
    fn summary_texts() {
        let empty = DateRange::default();
        assert_eq!(empty.summary(), "Seleziona check‑in e check‑out");

        let start = empty.select(d(2025, 6, 10));
        assert_eq!(
            start.summary(),
            "Check‑in: 10 giugno 2025. Seleziona il check‑out."
        );

        let full = start.select(d(2025, 6, 14));
        assert_eq!(full.summary(), "Dal 10 giugno 2025 al 14 giugno 2025");
    }

    #[test]
    fn iso_format() {
        assert_eq!(format_iso(d(2025, 6, 1)), "2025-06-01");
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1), "gennaio");
        assert_eq!(month_name(12), "dicembre");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn cursor_wraps_years() {
        let dec = MonthCursor::containing(d(2025, 12, 25));
        assert_eq!((dec.next().year(), dec.next().month()), (2026, 1));
        let jan = MonthCursor::containing(d(2026, 1, 5));
        assert_eq!((jan.prev().year(), jan.prev().month()), (2025, 12));
        assert_eq!(dec.caption(), "dicembre 2025");
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(MonthCursor::containing(d(2024, 2, 1)).days_in_month(), 29);
        assert_eq!(MonthCursor::containing(d(2025, 2, 1)).days_in_month(), 28);
        assert_eq!(MonthCursor::containing(d(2025, 6, 1)).days_in_month(), 30);
    }

    #[test]
    fn grid_starts_on_monday() {
        // 1 June 2025 is a Sunday
        let grid = MonthCursor::containing(d(2025, 6, 10)).grid();
        assert_eq!(grid.len() % 7, 0);
        assert!(grid[..6].iter().all(Option::is_none));
        assert_eq!(grid[6], Some(d(2025, 6, 1)));
        assert_eq!(grid.iter().flatten().count(), 30);
        assert_eq!(grid.iter().flatten().last(), Some(&d(2025, 6, 30)));
    }

    #[test]
    fn grid_without_padding_when_month_starts_monday() {
        // 1 September 2025 is a Monday
        let grid = MonthCursor::containing(d(2025, 9, 1)).grid();
        assert_eq!(grid[0], Some(d(2025, 9, 1)));
        assert_eq!(grid.len(), 35);
    }
}
