use super::{RenderError, Stage};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::debug;

/// Drives a stage without a terminal, printing the target element after every iteration.
///
/// Time is simulated: each step moves the clock forward by exactly one iteration of the
/// target's animation, so a run is deterministic and finishes immediately.
pub(crate) struct HeadlessRunner<W> {
    output: W,
    target: String,
}

impl<W: Write> HeadlessRunner<W> {
    pub(crate) fn new<S: Into<String>>(output: W, target: S) -> Self {
        Self { output, target: target.into() }
    }

    pub(crate) fn run(&mut self, stage: &mut Stage, iterations: u64) -> Result<(), RenderError> {
        let duration =
            stage.animation_duration(&self.target).ok_or_else(|| RenderError::NotAnimated(self.target.clone()))?;

        let start = Instant::now();
        stage.tick(start);
        let mut completed = 0;
        let mut elapsed = Duration::ZERO;
        while completed < iterations {
            elapsed = elapsed.checked_add(duration).ok_or(RenderError::TimeOverflow { completed })?;
            let now = start.checked_add(elapsed).ok_or(RenderError::TimeOverflow { completed })?;
            completed += stage.tick(now).iterations_of(&self.target);
            self.print_target(stage, completed)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn print_target(&mut self, stage: &Stage, iteration: u64) -> Result<(), RenderError> {
        let element = stage
            .document()
            .get_element_by_id(&self.target)
            .ok_or_else(|| RenderError::MissingElement(self.target.clone()))?;
        let element = element.borrow();
        let color = element.color().map(|c| c.to_string()).unwrap_or_else(|| "default".to_string());
        debug!(iteration, text = element.text(), %color, "headless step");
        writeln!(self.output, "iteration {iteration}: {} {color}", element.text())?;
        Ok(())
    }
}
