use chrono::{Datelike, NaiveDate, Weekday};

pub trait NaiveDateExt {
    /// Short weekday label for display, e.g. "Mon".
    fn weekday_label(&self) -> &'static str;
    /// The "Friday ordinal" used by the availability rules: the date's
    /// day-of-month divided by 7, rounded up. Counts calendar-day groups of
    /// seven starting at day 1, not ISO weeks.
    fn day_of_month_week(&self) -> u32;
    fn is_sunday(&self) -> bool;
}

impl NaiveDateExt for NaiveDate {
    fn weekday_label(&self) -> &'static str {
        match self.weekday() {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    fn day_of_month_week(&self) -> u32 {
        self.day().div_ceil(7)
    }

    fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }
}
