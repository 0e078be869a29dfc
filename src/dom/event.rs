use std::time::Duration;

/// The kinds of notifications the stage emits on an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum EventKind {
    /// The element's animation started running.
    AnimationStart,
    /// One loop of the element's animation completed.
    AnimationIteration,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Event {
    pub(crate) kind: EventKind,
    /// The id of the element the event fired on.
    pub(crate) target: String,
    /// Time since the animation started.
    pub(crate) elapsed: Duration,
}

impl Event {
    pub(crate) fn new<S: Into<String>>(kind: EventKind, target: S, elapsed: Duration) -> Self {
        Self { kind, target: target.into(), elapsed }
    }
}
