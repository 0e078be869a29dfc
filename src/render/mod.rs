mod headless;
mod stage;
mod terminal;

pub(crate) use headless::HeadlessRunner;
pub(crate) use stage::{Frame, Stage, StyledChar};
pub(crate) use terminal::{TerminalOptions, TerminalRunner};

/// Errors that can occur while driving the stage
#[derive(thiserror::Error, Debug)]
pub(crate) enum RenderError {
    #[error("element '{0}' is not animated by any style class")]
    NotAnimated(String),

    #[error("no element with id '{0}' exists")]
    MissingElement(String),

    #[error("simulated time ran out after {completed} iterations")]
    TimeOverflow { completed: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
