use crate::errors::{Error, Result};
use crate::prompter::{Flow, FlowCtrl};
use std::io::{self, BufRead, BufReader};

#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let stdin = io::stdin();
        let reader = BufReader::new(stdin);
        self.run_with_reader(flow, reader)
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            flow.render()?;

            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }
            let line = line.trim();

            // Global escape hatch: "exit" always leaves the loop.
            if line.eq_ignore_ascii_case("exit") {
                return Ok(());
            }

            match flow.handle_input(line)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
