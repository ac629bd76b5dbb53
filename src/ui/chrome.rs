use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

/// Screen-level helpers (startup banner).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn print_banner(&self) {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}S L O T P I C K{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Pick a delivery date and slot{STYLE_RESET}");
        let left = " ".repeat(self.center_pad(INNER_WIDTH + 2));
        println!("{left}╭{}╮", "─".repeat(INNER_WIDTH));
        println!("{left}│{}│", " ".repeat(INNER_WIDTH));
        println!("{left}│{}│", self.center_in_box(&title, INNER_WIDTH));
        println!("{left}│{}│", self.center_in_box(&subtitle, INNER_WIDTH));
        println!("{left}│{}│", " ".repeat(INNER_WIDTH));
        println!("{left}╰{}╯", "─".repeat(INNER_WIDTH));
    }

    /// Left padding to center a box of `content_width` inside the terminal.
    fn center_pad(&self, content_width: usize) -> usize {
        self.util.terminal_width().saturating_sub(content_width) / 2
    }

    fn center_in_box(&self, text: &str, inner_width: usize) -> String {
        let visible = self.util.visible_width(text);
        if visible >= inner_width {
            return text.to_string();
        }
        let left = (inner_width - visible) / 2;
        let right = inner_width - visible - left;
        format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
    }
}
