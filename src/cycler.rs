use crate::dom::{Document, ElementHandle, EventKind};
use crate::style::Color;
use std::cell::RefCell;
use std::rc::Rc;
use strum::{Display, EnumIter};
use tracing::info;

/// The glyph currently shown by a [`GlyphCycler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter)]
pub(crate) enum CycleState {
    #[default]
    M,
    Heart,
    L,
}

impl CycleState {
    /// The state that follows this one.
    pub(crate) fn next(self) -> Self {
        match self {
            Self::M => Self::Heart,
            Self::Heart => Self::L,
            Self::L => Self::M,
        }
    }

    /// The color written when entering this state.
    pub(crate) fn color(self) -> Color {
        match self {
            Self::Heart => Color::DARK_RED,
            Self::M | Self::L => Color::DARK_GRAY,
        }
    }

    pub(crate) fn glyph(self) -> &'static str {
        match self {
            Self::M => "M",
            Self::Heart => "♥",
            Self::L => "L",
        }
    }
}

/// Advances an element through `M -> ♥ -> L -> M` every time its animation loops.
#[derive(Debug)]
pub(crate) struct GlyphCycler {
    state: CycleState,
    element: ElementHandle,
    iterations: u64,
}

impl GlyphCycler {
    /// Bind a cycler to the element `id`, without touching the element.
    pub(crate) fn new(document: &Document, id: &str) -> Result<Self, CyclerError> {
        let element = document.get_element_by_id(id).ok_or_else(|| CyclerError::ElementNotFound(id.to_string()))?;
        Ok(Self { state: CycleState::default(), element, iterations: 0 })
    }

    /// Look up the element, start animating it via `class` and advance on every completed iteration.
    pub(crate) fn attach(document: &mut Document, id: &str, class: &str) -> Result<Rc<RefCell<Self>>, CyclerError> {
        let mut cycler = Self::new(document, id)?;
        cycler.initialize(class);

        let cycler = Rc::new(RefCell::new(cycler));
        let listener = cycler.clone();
        document.add_event_listener(id, EventKind::AnimationIteration, move |_| {
            listener.borrow_mut().advance();
        });
        Ok(cycler)
    }

    /// Reset to the initial glyph and mark the element as animating.
    ///
    /// The element's color is left alone: it keeps whatever it was styled with until the first
    /// transition.
    pub(crate) fn initialize(&mut self, class: &str) {
        self.state = CycleState::default();
        let mut element = self.element.borrow_mut();
        element.set_text(self.state.glyph());
        element.class_list_mut().add(class);
        info!(element = element.id(), class, "glyph cycler initialized");
    }

    /// Move to the next state and write its color and glyph to the element.
    pub(crate) fn advance(&mut self) -> CycleState {
        self.state = self.state.next();
        self.iterations += 1;

        let mut element = self.element.borrow_mut();
        element.set_color(self.state.color());
        element.set_text(self.state.glyph());
        info!(state = %self.state, iteration = self.iterations, "glyph advanced");
        self.state
    }

    pub(crate) fn state(&self) -> CycleState {
        self.state
    }

    /// The number of transitions taken so far.
    pub(crate) fn iterations(&self) -> u64 {
        self.iterations
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum CyclerError {
    #[error("no element with id '{0}' exists")]
    ElementNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Event;
    use rstest::rstest;
    use std::time::Duration;
    use strum::IntoEnumIterator;

    fn setup() -> (Document, GlyphCycler) {
        let mut document = Document::default();
        document.create_element("logo");
        let mut cycler = GlyphCycler::new(&document, "logo").expect("cycler creation failed");
        cycler.initialize("spin");
        (document, cycler)
    }

    fn element_state(document: &Document) -> (String, Option<Color>) {
        let element = document.get_element_by_id("logo").expect("no element");
        let element = element.borrow();
        (element.text().to_string(), element.color())
    }

    #[rstest]
    #[case::heart(CycleState::M, CycleState::Heart, Color::DARK_RED, "♥")]
    #[case::l(CycleState::Heart, CycleState::L, Color::DARK_GRAY, "L")]
    #[case::m(CycleState::L, CycleState::M, Color::DARK_GRAY, "M")]
    fn transitions(#[case] from: CycleState, #[case] to: CycleState, #[case] color: Color, #[case] text: &str) {
        let (document, mut cycler) = setup();
        while cycler.state() != from {
            cycler.advance();
        }
        assert_eq!(cycler.advance(), to);
        assert_eq!(element_state(&document), (text.to_string(), Some(color)));
    }

    #[rstest]
    fn advancing_n_times_follows_successor(#[values(0, 1, 2, 3, 4, 5, 6, 7, 10, 31)] steps: usize) {
        let (_document, mut cycler) = setup();
        let mut expected = CycleState::M;
        for _ in 0..steps {
            expected = expected.next();
            cycler.advance();
        }
        assert_eq!(cycler.state(), expected);
        assert_eq!(cycler.iterations(), steps as u64);

        let all: Vec<_> = CycleState::iter().collect();
        assert_eq!(cycler.state(), all[steps % 3]);
    }

    #[test]
    fn color_depends_only_on_new_state() {
        let (document, mut cycler) = setup();
        for _ in 0..9 {
            let state = cycler.advance();
            assert_eq!(element_state(&document), (state.glyph().to_string(), Some(state.color())));
        }
    }

    #[test]
    fn period_is_three() {
        let (document, mut cycler) = setup();
        cycler.advance();
        let first = (cycler.state(), element_state(&document));
        for _ in 0..3 {
            cycler.advance();
        }
        assert_eq!((cycler.state(), element_state(&document)), first);
    }

    #[test]
    fn six_steps_match_three_steps() {
        let (document, mut cycler) = setup();
        for _ in 0..3 {
            cycler.advance();
        }
        let after_three = (cycler.state(), element_state(&document));
        for _ in 0..3 {
            cycler.advance();
        }
        assert_eq!((cycler.state(), element_state(&document)), after_three);
        assert_eq!(cycler.state(), CycleState::M);
        assert_eq!(element_state(&document), ("M".to_string(), Some(Color::DARK_GRAY)));
    }

    #[test]
    fn every_state_has_one_successor_and_cycles() {
        for state in CycleState::iter() {
            assert_ne!(state.next(), state);
            assert_eq!(state.next().next().next(), state);
        }
    }

    #[test]
    fn initialize_keeps_color_and_adds_class_once() {
        let mut document = Document::default();
        let element = document.create_element("logo");
        element.borrow_mut().set_color(Color::new(1, 2, 3));

        let mut cycler = GlyphCycler::new(&document, "logo").expect("cycler creation failed");
        for _ in 0..3 {
            cycler.initialize("spin");
        }

        let element = element.borrow();
        assert_eq!(element.text(), "M");
        assert_eq!(element.color(), Some(Color::new(1, 2, 3)));
        assert_eq!(element.class_list().iter().filter(|c| *c == "spin").count(), 1);
        assert_eq!(element.class_list().iter().count(), 1);
    }

    #[test]
    fn initialize_resets_state() {
        let (_document, mut cycler) = setup();
        cycler.advance();
        cycler.initialize("spin");
        assert_eq!(cycler.state(), CycleState::M);
    }

    #[test]
    fn missing_element() {
        let mut document = Document::default();
        document.create_element("logo");
        let err = GlyphCycler::attach(&mut document, "missing", "spin").expect_err("attach succeeded");
        assert!(matches!(&err, CyclerError::ElementNotFound(id) if id == "missing"));
        assert_eq!(err.to_string(), "no element with id 'missing' exists");
    }

    #[test]
    fn attached_cycler_advances_on_iteration_events() {
        let mut document = Document::default();
        document.create_element("logo");
        document.create_element("other");
        let cycler = GlyphCycler::attach(&mut document, "logo", "spin").expect("attach failed");

        let elapsed = Duration::from_secs(1);
        document.dispatch(&Event::new(EventKind::AnimationStart, "logo", elapsed));
        document.dispatch(&Event::new(EventKind::AnimationIteration, "other", elapsed));
        assert_eq!(cycler.borrow().state(), CycleState::M);

        document.dispatch(&Event::new(EventKind::AnimationIteration, "logo", elapsed));
        assert_eq!(cycler.borrow().state(), CycleState::Heart);
        assert_eq!(element_state(&document), ("♥".to_string(), Some(Color::DARK_RED)));
    }
}
