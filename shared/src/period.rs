use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime};

/// Which window of time the statistics table summarises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatisticsWindow {
    /// From the first to the last day of the month containing today
    #[default]
    CalendarMonth,
    /// The given number of days ending today (inclusive)
    TrailingDays(u32),
}

impl StatisticsWindow {
    /// Resolve the window to concrete dates relative to `today`
    pub fn period(&self, today: NaiveDate) -> ReportingPeriod {
        match self {
            StatisticsWindow::CalendarMonth => ReportingPeriod::month_containing(today),
            StatisticsWindow::TrailingDays(days) => ReportingPeriod::trailing_days(today, *days),
        }
    }
}

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    /// First through last day of the month that contains `date`
    pub fn month_containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next_month| next_month.pred_opt())
            .unwrap_or(date);
        Self { start, end }
    }

    /// `days` days ending on `today`; a zero-length window collapses to today
    pub fn trailing_days(today: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.saturating_sub(1));
        let start = today
            .checked_sub_signed(Duration::days(span))
            .unwrap_or(today);
        Self { start, end: today }
    }

    /// Unix seconds of the first instant of `start`, UTC
    pub fn start_timestamp(&self) -> i64 {
        self.start.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// Unix seconds of 23:59:59 on `end`, UTC
    pub fn end_timestamp(&self) -> i64 {
        let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.end.and_time(last_second).and_utc().timestamp()
    }
}
