pub mod flows;
mod prompter;

pub use prompter::Prompter;

use crate::errors::Result;

pub enum FlowCtrl {
    Continue,
    Finish,
}

/// A render/handle loop driven by the prompter. Render is called before each
/// line of input so the screen always reflects current state.
pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

impl<F: Flow + ?Sized> Flow for &mut F {
    fn render(&mut self) -> Result<()> {
        (**self).render()
    }
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        (**self).handle_input(input)
    }
}
