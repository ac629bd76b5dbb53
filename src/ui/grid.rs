use crate::core::availability::availability;
use crate::core::selection::SelectionState;
use crate::core::types::{Availability, Slot};
use crate::extensions::chrono::NaiveDateExt;
use crate::ui::width_util::WidthUtil;
use chrono::NaiveDate;
use std::io::Write;
use strum::IntoEnumIterator;

const CELL_PICKED: &str = "[picked]";
const CELL_OPEN: &str = "open";
const CELL_FULL: &str = "full";
const CELL_BLOCKED: &str = "n/a";
const COLUMN_GAP: &str = "  ";

/// Renders the grouped window as one table per day-block: a row per date, a
/// column per slot. Availability is recomputed for every cell on every
/// render; nothing here caches derived state, so flag changes show up on the
/// next redraw.
#[derive(Debug, Default, Clone)]
pub struct SlotGrid {
    util: WidthUtil,
}

impl SlotGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn legend() -> &'static str {
        "open = selectable | full = no capacity | n/a = unavailable | [picked] = your selection"
    }

    fn cell_text(
        date: NaiveDate,
        slot: Slot,
        special_item_active: bool,
        selection: &SelectionState,
    ) -> &'static str {
        if selection.is_selected(date, slot) {
            return CELL_PICKED;
        }
        match availability(date, slot, special_item_active) {
            Availability::Available => CELL_OPEN,
            Availability::Full => CELL_FULL,
            Availability::Unavailable => CELL_BLOCKED,
        }
    }

    fn date_label(date: NaiveDate) -> String {
        format!("{} {}", date.weekday_label(), date.format("%Y-%m-%d"))
    }

    pub fn render<W: Write + ?Sized>(
        &self,
        blocks: &[Vec<NaiveDate>],
        special_item_active: bool,
        selection: &SelectionState,
        out: &mut W,
    ) -> std::io::Result<()> {
        for (index, block) in blocks.iter().enumerate() {
            self.render_block(index + 1, block, special_item_active, selection, out)?;
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_block<W: Write + ?Sized>(
        &self,
        number: usize,
        dates: &[NaiveDate],
        special_item_active: bool,
        selection: &SelectionState,
        out: &mut W,
    ) -> std::io::Result<()> {
        let date_labels: Vec<String> = dates.iter().map(|d| Self::date_label(*d)).collect();
        let date_width = date_labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once("DATE".len()))
            .max()
            .unwrap_or(0);

        let slot_widths: Vec<usize> = Slot::iter()
            .map(|slot| {
                dates
                    .iter()
                    .map(|&d| Self::cell_text(d, slot, special_item_active, selection).len())
                    .chain(std::iter::once(slot.header().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let total_width = date_width
            + slot_widths.iter().sum::<usize>()
            + COLUMN_GAP.len() * slot_widths.len();

        writeln!(out, "BLOCK {number}")?;
        writeln!(out, "{}", "-".repeat(total_width))?;

        let mut header = self.util.pad_visible("DATE", date_width);
        for (slot, width) in Slot::iter().zip(&slot_widths) {
            header.push_str(COLUMN_GAP);
            header.push_str(&self.util.pad_visible(slot.header(), *width));
        }
        writeln!(out, "{}", header.trim_end())?;
        writeln!(out, "{}", "-".repeat(total_width))?;

        for (date, label) in dates.iter().zip(&date_labels) {
            let mut row = self.util.pad_visible(label, date_width);
            for (slot, width) in Slot::iter().zip(&slot_widths) {
                let cell = Self::cell_text(*date, slot, special_item_active, selection);
                row.push_str(COLUMN_GAP);
                row.push_str(&self.util.pad_visible(cell, *width));
            }
            writeln!(out, "{}", row.trim_end())?;
        }
        Ok(())
    }
}
