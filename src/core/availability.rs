use crate::core::types::{Availability, Slot};
use crate::extensions::chrono::NaiveDateExt;
use chrono::{Datelike, NaiveDate, Weekday};

/// Decide whether a (date, slot) cell is selectable. Pure; consulted fresh
/// on every render so a flipped `special_item_active` flag takes effect
/// immediately instead of lingering in stale derived state.
///
/// Rules, in order:
/// 1. Special item active on a Wednesday blocks every slot.
/// 2. Morning on an even "Friday ordinal" (day-of-month / 7, rounded up) is
///    full. This counts Fridays by calendar-day groups of seven, not ISO
///    weeks; the approximation is the contract and downstream behavior
///    depends on it.
/// 3. Everything else is available.
pub fn availability(date: NaiveDate, slot: Slot, special_item_active: bool) -> Availability {
    if special_item_active && date.weekday() == Weekday::Wed {
        return Availability::Unavailable;
    }
    if date.weekday() == Weekday::Fri
        && date.day_of_month_week() % 2 == 0
        && slot == Slot::Morning
    {
        return Availability::Full;
    }
    Availability::Available
}
