use terminal_size::{Width, terminal_size};

use crate::ui::ansi::ESC_BYTE;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drop CSI escape sequences so padding math sees only printable text.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut in_csi = false;
        let mut prev_was_esc = false;
        for ch in s.chars() {
            if in_csi {
                if ch.is_ascii_alphabetic() {
                    in_csi = false;
                }
                continue;
            }
            if prev_was_esc {
                prev_was_esc = false;
                if ch == '[' {
                    in_csi = true;
                    continue;
                }
                out.push(ESC_BYTE as char);
            }
            if ch as u32 == ESC_BYTE as u32 {
                prev_was_esc = true;
                continue;
            }
            out.push(ch);
        }
        out
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            let mut out = String::with_capacity(s.len() + (width - w));
            out.push_str(s);
            for _ in 0..(width - w) {
                out.push(' ');
            }
            out
        }
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        if let Some((Width(w), _)) = terminal_size() {
            w as usize
        } else {
            80
        }
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }
}
