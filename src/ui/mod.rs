pub mod ansi;
pub mod chrome;
pub mod grid;
mod width_util;
