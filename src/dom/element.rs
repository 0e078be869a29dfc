use crate::style::Color;
use std::cell::RefCell;
use std::rc::Rc;

/// A shared handle to an element owned by a [`Document`](super::Document).
pub(crate) type ElementHandle = Rc<RefCell<DisplayElement>>;

/// A single node on the stage.
#[derive(Debug)]
pub(crate) struct DisplayElement {
    id: String,
    text: String,
    /// Unset means the renderer's default foreground is used.
    color: Option<Color>,
    classes: ClassList,
}

impl DisplayElement {
    pub(crate) fn new<S: Into<String>>(id: S) -> Self {
        Self { id: id.into(), text: String::new(), color: None, classes: ClassList::default() }
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    pub(crate) fn color(&self) -> Option<Color> {
        self.color
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub(crate) fn class_list(&self) -> &ClassList {
        &self.classes
    }

    pub(crate) fn class_list_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }
}

/// An ordered set of style class names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ClassList(Vec<String>);

impl ClassList {
    /// Adds a class, returning `false` if it was already present.
    pub(crate) fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.0.push(class.to_string());
        true
    }

    pub(crate) fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
