use std::io::{self, Write};

use crate::config::ConfigKey;
use crate::core::availability::availability;
use crate::core::context::AppContext;
use crate::core::grouping::group_window;
use crate::core::types::{Date, PickerCommand, Slot, Toggle};
use crate::core::window::generate_window;
use crate::errors::{Error, Result, require_parse};
use crate::logging::{LogTarget, Logger};
use crate::prompter::{Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;
use crate::ui::grid::SlotGrid;

/// The interactive picker: shows the grouped delivery window and reacts to
/// block/special/pick commands. The window and every cell's availability are
/// rebuilt from current state on each render; the only things carried between
/// renders are the selection flags and the special-item toggle.
pub struct PickerFlow<'a> {
    ctx: &'a mut AppContext,
    grid: SlotGrid,
    logger: Logger,
}

impl<'a> PickerFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            grid: SlotGrid::new(),
            logger,
        }
    }
}

impl<'a> Flow for PickerFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();

        let start = self.ctx.window_start();
        let block_size = self.ctx.config.block_size();
        let window = generate_window(start, block_size)?;
        let blocks = group_window(&window, block_size)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.grid
            .render(&blocks, self.ctx.special_item_active, &self.ctx.selection, &mut out)?;
        writeln!(
            out,
            "Block size: {} | Special item: {} | Picked: {}",
            block_size,
            if self.ctx.special_item_active { "on" } else { "off" },
            self.ctx.selection.selected_count()
        )?;
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        println!();
        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }

        let mut parts = line.split_whitespace();
        let raw_command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let command = match PickerCommand::try_from(raw_command) {
            Ok(command) => command,
            Err(err) => {
                self.report(err);
                return Ok(FlowCtrl::Continue);
            }
        };

        let result = match command {
            PickerCommand::Block => self.run_block(&args),
            PickerCommand::Special => self.run_special(&args),
            PickerCommand::Pick => self.run_pick(&args),
            PickerCommand::Picks => self.run_picks(),
            PickerCommand::Man => self.run_man(),
        };
        if let Err(err) = result {
            self.report(err);
        }
        Ok(FlowCtrl::Continue)
    }
}

impl<'a> PickerFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        let chrome = UiChrome::new();
        chrome.print_banner();
        println!();
        println!("{}", SlotGrid::legend());
        println!("Type 'man' for commands, 'exit' to quit.");
        println!();
        self.ctx.startup_displayed = true;
    }

    fn run_block(&mut self, args: &[&str]) -> Result<()> {
        let raw = require_parse(args.first(), "Usage: block <size>")?;
        self.ctx.config.set_key(ConfigKey::BlockSize, raw)?;
        if let Some((key, old, new)) = self.ctx.config.last_change.take() {
            self.logger.info(
                format!("{key} changed from {old} to {new}."),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }

    fn run_special(&mut self, args: &[&str]) -> Result<()> {
        let raw = require_parse(args.first(), "Usage: special <on|off>")?;
        let toggle = Toggle::try_from(raw)?;
        self.ctx.special_item_active = toggle.as_bool();
        let message = match toggle {
            Toggle::On => "Special item on: Wednesdays are unavailable.",
            Toggle::Off => "Special item off.",
        };
        self.logger.info(message, LogTarget::ConsoleAndFile);
        Ok(())
    }

    fn run_pick(&mut self, args: &[&str]) -> Result<()> {
        let raw_date = require_parse(args.first(), "Usage: pick <YYYY-MM-DD> <slot>")?;
        let raw_slot = require_parse(args.get(1), "Usage: pick <YYYY-MM-DD> <slot>")?;
        let date = Date::try_from_str(raw_date)?.0;
        let slot = Slot::try_from(raw_slot)?;

        let block_size = self.ctx.config.block_size();
        let window = generate_window(self.ctx.window_start(), block_size)?;
        if !window.contains(&date) {
            return Err(Error::Domain(format!(
                "Date {date} is not in the current window."
            )));
        }

        // The availability rules gate the toggle here, at the UI boundary.
        // The selection map itself accepts any key.
        let status = availability(date, slot, self.ctx.special_item_active);
        if !status.is_available() {
            return Err(Error::SlotNotSelectable { date, slot, status });
        }

        let selected = self.ctx.selection.toggle(date, slot);
        let verb = if selected { "Picked" } else { "Unpicked" };
        self.logger.info(
            format!("{verb} {slot} on {date}."),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn run_picks(&self) -> Result<()> {
        if self.ctx.selection.selected_count() == 0 {
            println!("No slots picked yet.");
            return Ok(());
        }
        println!("Picked slots:");
        for (date, slot) in self.ctx.selection.selected() {
            println!("  {date} {slot}");
        }
        Ok(())
    }

    fn run_man(&self) -> Result<()> {
        println!("COMMANDS");
        println!("  block <size>            Set dates per day-block (3-7).");
        println!("  special <on|off>        Toggle the special item. When on, Wednesdays");
        println!("                          are unavailable in every slot.");
        println!("  pick <date> <slot>      Toggle a slot selection, e.g. pick 2026-09-11 morning.");
        println!("  picks                   List your current selections.");
        println!("  man                     Show this help.");
        println!("  exit                    Quit.");
        println!();
        println!("{}", Date::usage());
        println!("{}", SlotGrid::legend());
        Ok(())
    }

    fn report(&self, err: Error) {
        self.logger
            .error(format!("{err}"), LogTarget::ConsoleAndFile);
    }
}
