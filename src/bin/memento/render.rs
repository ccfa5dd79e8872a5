//! Plain-text rendering of a year view.

use memento::{DayData, DayStatus, YearStats, format_remaining};

use crate::config::DisplayConfig;

fn symbol(display: &DisplayConfig, status: DayStatus) -> &str {
    match status {
        DayStatus::Past => &display.past,
        DayStatus::Today => &display.today,
        DayStatus::Future => &display.future,
    }
}

/// Year, days remaining and percent complete.
pub fn header(stats: &YearStats) -> String {
    format!(
        "{}  ( {} )  {:.1}% complete",
        stats.year(),
        format_remaining(stats),
        stats.percent_complete()
    )
}

/// One symbol per day, `display.columns` per row.
pub fn grid(days: &[DayData], display: &DisplayConfig) -> String {
    days.chunks(display.columns.max(1))
        .map(|row| {
            row.iter()
                .map(|day| symbol(display, day.status()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn legend(display: &DisplayConfig) -> String {
    [DayStatus::Past, DayStatus::Today, DayStatus::Future]
        .into_iter()
        .map(|status| format!("{} {status}", symbol(display, status)))
        .collect::<Vec<_>>()
        .join("    ")
}

/// Detail block for a single day.
pub fn day_detail(day: &DayData, year: i32) -> String {
    format!(
        "Day {} of {year}\n{}\n{}",
        day.day_number(),
        day.label(),
        day.status().caption()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use memento::{day_grid, year_statistics};

    fn display(columns: usize) -> DisplayConfig {
        DisplayConfig {
            columns,
            past: "x".to_string(),
            today: "@".to_string(),
            future: ".".to_string(),
        }
    }

    #[test]
    fn grid_rows_and_symbols() {
        let now = Utc.with_ymd_and_hms(2023, 1, 3, 12, 0, 0).unwrap();
        let days = day_grid(2023, &now).unwrap();
        let rendered = grid(&days, &display(31));

        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows.len(), 12);
        assert!(rows[0].starts_with("x x @ . ."));
        assert_eq!(rows[11].split(' ').count(), 365 - 11 * 31);
    }

    #[test]
    fn header_line() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let stats = year_statistics(2024, &now);
        assert_eq!(header(&stats), "2024  ( 305 days remain )  16.7% complete");
    }

    #[test]
    fn legend_line() {
        assert_eq!(
            legend(&display(7)),
            "x The Past    @ The Present    . The Future"
        );
    }

    #[test]
    fn day_detail_block() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let days = day_grid(2024, &now).unwrap();
        assert_eq!(
            day_detail(&days[61], 2024),
            "Day 62 of 2024\nSaturday, March 2, 2024\nA shadow in the future, waiting to be lived."
        );
    }
}
