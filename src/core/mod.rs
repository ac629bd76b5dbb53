pub mod availability;
pub mod cli;
pub mod context;
pub mod grouping;
pub mod selection;
pub mod types;
pub mod window;
