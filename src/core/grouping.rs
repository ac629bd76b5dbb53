use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Partition `dates` into consecutive non-overlapping blocks of
/// `block_size`, in order. Only the final block may be shorter; window
/// generation pads that away, but a true remainder is still handled here so
/// the grouper stands on its own.
///
/// Concatenating the returned blocks reproduces `dates` exactly.
pub fn group_window(dates: &[NaiveDate], block_size: u32) -> Result<Vec<Vec<NaiveDate>>> {
    if block_size == 0 {
        return Err(Error::InvalidBlockSize(block_size));
    }
    Ok(dates
        .chunks(block_size as usize)
        .map(|chunk| chunk.to_vec())
        .collect())
}
