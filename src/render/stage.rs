use crate::animations::{AnimationClock, AnimationContext, AnimationRule, StyleSheet, get_animation};
use crate::dom::{Document, Event, EventKind};
use crate::style::Color;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthChar;

/// A character ready to be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct StyledChar {
    pub(crate) ch: char,
    pub(crate) color: Color,
}

/// One drawn line per element, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Frame {
    pub(crate) lines: Vec<Vec<StyledChar>>,
}

impl Frame {
    /// The display width of a line, in terminal columns.
    pub(crate) fn line_width(line: &[StyledChar]) -> usize {
        line.iter().map(|c| c.ch.width().unwrap_or(0)).sum()
    }
}

/// What a single [`Stage::tick`] did.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct StageTick {
    /// Iteration events fired, per element id.
    iterations: HashMap<String, u64>,
}

impl StageTick {
    /// The number of iterations the element `id` completed during the tick.
    pub(crate) fn iterations_of(&self, id: &str) -> u64 {
        self.iterations.get(id).copied().unwrap_or(0)
    }
}

#[derive(Debug)]
struct RunningAnimation {
    rule: AnimationRule,
    clock: AnimationClock,
    progress: f32,
}

/// Plays the animations bound to the document's elements through the style sheet.
///
/// Any element carrying a class the style sheet knows starts animating on the next tick, and
/// gets an [`EventKind::AnimationIteration`] event every time a loop completes.
pub(crate) struct Stage {
    document: Document,
    stylesheet: StyleSheet,
    running: HashMap<String, RunningAnimation>,
    foreground: Color,
}

impl Stage {
    pub(crate) fn new(document: Document, stylesheet: StyleSheet, foreground: Color) -> Self {
        Self { document, stylesheet, running: Default::default(), foreground }
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    /// The iteration duration of the animation bound to element `id`, if any.
    pub(crate) fn animation_duration(&self, id: &str) -> Option<Duration> {
        let element = self.document.get_element_by_id(id)?;
        let element = element.borrow();
        self.stylesheet.animation_for(element.class_list().iter()).map(|rule| rule.duration)
    }

    /// Advance every animation to `now` and fire the events for what happened in between.
    pub(crate) fn tick(&mut self, now: Instant) -> StageTick {
        let mut events = Vec::new();
        for element in self.document.elements() {
            let element = element.borrow();
            let id = element.id();
            let Some(rule) = self.stylesheet.animation_for(element.class_list().iter()) else {
                self.running.remove(id);
                continue;
            };

            let restart = self.running.get(id).map_or(true, |running| running.rule != *rule);
            if restart {
                let animation =
                    RunningAnimation { rule: rule.clone(), clock: AnimationClock::new(rule.duration), progress: 0.0 };
                self.running.insert(id.to_string(), animation);
            }
            let Some(running) = self.running.get_mut(id) else {
                continue;
            };
            let tick = running.clock.tick(now);
            running.progress = tick.progress;
            if tick.started {
                events.push(Event::new(EventKind::AnimationStart, id, tick.elapsed));
            }
            for _ in 0..tick.completed {
                events.push(Event::new(EventKind::AnimationIteration, id, tick.elapsed));
            }
        }

        let mut stage_tick = StageTick::default();
        for event in &events {
            self.document.dispatch(event);
            if event.kind == EventKind::AnimationIteration {
                *stage_tick.iterations.entry(event.target.clone()).or_default() += 1;
            }
        }
        stage_tick
    }

    /// Render every element as it looks at the last tick.
    pub(crate) fn frame(&self) -> Frame {
        let mut frame = Frame::default();
        for element in self.document.elements() {
            let element = element.borrow();
            let color = element.color().unwrap_or(self.foreground);
            let running = self.running.get(element.id());
            let animation = running.map(|r| (get_animation(r.rule.style), r.progress));

            let total_chars = element.text().chars().count();
            let line = element
                .text()
                .chars()
                .enumerate()
                .map(|(char_index, ch)| match &animation {
                    Some((animation, progress)) => {
                        let ctx = AnimationContext { progress: *progress, char_index, total_chars, ch, color };
                        let result = animation.render_char(&ctx);
                        StyledChar { ch: result.replacement_char.unwrap_or(ch), color: result.color }
                    }
                    None => StyledChar { ch, color },
                })
                .collect();
            frame.lines.push(line);
        }
        frame
    }
}
