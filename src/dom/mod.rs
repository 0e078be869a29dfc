mod document;
mod element;
mod event;

pub(crate) use document::Document;
pub(crate) use element::ElementHandle;
pub(crate) use event::{Event, EventKind};
