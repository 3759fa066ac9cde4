use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    /// Day of month, or `None` for the blank cells aligning the grid.
    pub day: Option<u32>,
    pub checked: bool,
    pub is_today: bool,
    pub is_future: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    pub label: String,
    pub cells: Vec<CalendarCell>,
}

pub fn month_view(consecutive_days: u32, signed_today: bool) -> MonthView {
    let today = Local::now().date_naive();
    MonthView {
        label: today.format("%Y-%m").to_string(),
        cells: project(today, consecutive_days, signed_today),
    }
}

/// Reconstruct which days of the month containing `today` belong to the
/// streak. The streak window ends today when today is already signed,
/// otherwise yesterday, and reaches back `consecutive_days` days in total.
pub fn project(today: NaiveDate, consecutive_days: u32, signed_today: bool) -> Vec<CalendarCell> {
    let check_end = if signed_today {
        today
    } else {
        today - Duration::days(1)
    };
    let check_start = check_end - Duration::days(i64::from(consecutive_days.saturating_sub(1)));

    let first = today.with_day(1).unwrap_or(today);
    let leading = first.weekday().num_days_from_sunday();

    let mut cells = Vec::with_capacity(leading as usize + 31);
    for _ in 0..leading {
        cells.push(CalendarCell {
            day: None,
            checked: false,
            is_today: false,
            is_future: false,
        });
    }

    let mut date = first;
    while date.month() == today.month() {
        let checked = consecutive_days > 0 && date >= check_start && date <= check_end;
        cells.push(CalendarCell {
            day: Some(date.day()),
            checked,
            is_today: date == today,
            is_future: date > today,
        });
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn checked_days(cells: &[CalendarCell]) -> Vec<u32> {
        cells
            .iter()
            .filter(|cell| cell.checked)
            .filter_map(|cell| cell.day)
            .collect()
    }

    #[test]
    fn zero_streak_marks_nothing() {
        let cells = project(date(2026, 8, 26), 0, false);
        assert!(checked_days(&cells).is_empty());
        let cells = project(date(2026, 8, 26), 0, true);
        assert!(checked_days(&cells).is_empty());
    }

    #[test]
    fn signed_today_anchors_window_at_today() {
        let cells = project(date(2026, 8, 26), 5, true);
        assert_eq!(checked_days(&cells), vec![22, 23, 24, 25, 26]);
    }

    #[test]
    fn unsigned_today_anchors_window_at_yesterday() {
        let cells = project(date(2026, 8, 26), 5, false);
        assert_eq!(checked_days(&cells), vec![21, 22, 23, 24, 25]);
        let today = cells
            .iter()
            .find(|cell| cell.is_today)
            .expect("today cell missing");
        assert!(!today.checked);
    }

    #[test]
    fn streak_clips_at_month_start() {
        // A 10 day streak ending on the 3rd only renders 3 visible days.
        let cells = project(date(2026, 3, 3), 10, true);
        assert_eq!(checked_days(&cells), vec![1, 2, 3]);
    }

    #[test]
    fn future_days_are_flagged_and_unchecked() {
        let cells = project(date(2026, 8, 26), 3, true);
        for cell in cells.iter().filter(|cell| cell.is_future) {
            assert!(!cell.checked);
            assert!(cell.day.unwrap() > 26);
        }
    }

    #[test]
    fn leading_blanks_match_weekday_of_the_first() {
        // 2026-08-01 is a Saturday, so six blanks precede it (Sunday-first).
        let cells = project(date(2026, 8, 15), 0, false);
        let blanks = cells.iter().take_while(|cell| cell.day.is_none()).count();
        assert_eq!(blanks, 6);
        assert_eq!(cells[blanks].day, Some(1));
        // Every day of August is present exactly once.
        assert_eq!(cells.len() - blanks, 31);
    }

    #[test]
    fn single_day_streak_marks_only_today() {
        let cells = project(date(2026, 8, 1), 1, true);
        assert_eq!(checked_days(&cells), vec![1]);
    }
}
