//! Headless views

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use lumen_core::Color;
use lumen_theme::{AppearanceSlot, ThemedView};

/// A view with the color properties a typical widget exposes.
///
/// Attachment is managed by [`HeadlessWindow`](crate::HeadlessWindow).
pub struct HeadlessView {
    name: String,
    attached: Cell<bool>,
    background: Cell<Option<Color>>,
    text_color: Cell<Option<Color>>,
    /// Every background assignment, oldest first
    paint_log: RefCell<Vec<Option<Color>>>,
    appearance: AppearanceSlot,
}

impl HeadlessView {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            attached: Cell::new(false),
            background: Cell::new(None),
            text_color: Cell::new(None),
            paint_log: RefCell::new(Vec::new()),
            appearance: AppearanceSlot::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn background(&self) -> Option<Color> {
        self.background.get()
    }

    pub fn set_background(&self, color: Option<Color>) {
        self.background.set(color);
        self.paint_log.borrow_mut().push(color);
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text_color.get()
    }

    pub fn set_text_color(&self, color: Option<Color>) {
        self.text_color.set(color);
    }

    /// Number of background assignments so far
    pub fn paint_count(&self) -> usize {
        self.paint_log.borrow().len()
    }

    pub fn paint_log(&self) -> Vec<Option<Color>> {
        self.paint_log.borrow().clone()
    }

    pub(crate) fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }
}

impl ThemedView for HeadlessView {
    fn is_attached(&self) -> bool {
        self.attached.get()
    }

    fn appearance(&self) -> &AppearanceSlot {
        &self.appearance
    }
}

impl fmt::Debug for HeadlessView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessView")
            .field("name", &self.name)
            .field("attached", &self.attached.get())
            .field("background", &self.background.get())
            .field("appearance", &self.appearance)
            .finish()
    }
}
