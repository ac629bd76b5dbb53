use crate::errors::{Error, Result};
use crate::extensions::chrono::NaiveDateExt;
use chrono::{Duration, NaiveDate};

/// Non-Sunday dates collected before any padding. Spans at least four weeks
/// of wall-clock time once the skipped Sundays are accounted for.
pub const WINDOW_BASE_LEN: usize = 28;

/// Generate the rolling delivery window starting at `today` (inclusive).
///
/// Walks forward one calendar day at a time, skipping Sundays, until 28
/// dates are collected. If 28 is not a multiple of `block_size`, the walk
/// continues from where the cursor stopped and appends further non-Sunday
/// dates until the total length is the next multiple of `block_size`.
///
/// The padding arithmetic is deliberately plain modulo: for a block size
/// above 28 the remainder is 28 itself, so the window is padded all the way
/// up to one full block of `block_size` dates.
pub fn generate_window(today: NaiveDate, block_size: u32) -> Result<Vec<NaiveDate>> {
    if block_size == 0 {
        return Err(Error::InvalidBlockSize(block_size));
    }

    let mut dates = Vec::with_capacity(WINDOW_BASE_LEN);
    let mut cursor = today;
    while dates.len() < WINDOW_BASE_LEN {
        if !cursor.is_sunday() {
            dates.push(cursor);
        }
        cursor = cursor + Duration::days(1);
    }

    // The cursor persists past the last collected date, so padding resumes
    // from the day after it rather than re-examining skipped Sundays.
    let remainder = WINDOW_BASE_LEN as u32 % block_size;
    if remainder != 0 {
        let mut extra_needed = block_size - remainder;
        while extra_needed > 0 {
            if !cursor.is_sunday() {
                dates.push(cursor);
                extra_needed -= 1;
            }
            cursor = cursor + Duration::days(1);
        }
    }

    Ok(dates)
}
