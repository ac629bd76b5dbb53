pub mod picker_flow;
