//! Headless window
//!
//! Owns the views attached to it and reports every attach/detach to its
//! lifecycle dispatcher, the way a platform toolkit would.

use std::cell::RefCell;
use std::rc::Rc;

use lumen_core::{LifecycleDispatcher, LifecycleEvent};
use lumen_theme::{AppearanceHook, FailurePolicy, ThemeRegistry, ThemedView};

use crate::view::HeadlessView;

/// A window without a display surface
pub struct HeadlessWindow {
    dispatcher: LifecycleDispatcher<dyn ThemedView>,
    views: RefCell<Vec<Rc<HeadlessView>>>,
    /// Notifications seen by the window's own lifecycle handler
    lifecycle_log: Rc<RefCell<Vec<LifecycleEvent>>>,
}

impl HeadlessWindow {
    /// Create a window with only its own lifecycle handler installed
    pub fn new() -> Self {
        let lifecycle_log = Rc::new(RefCell::new(Vec::new()));
        let log = lifecycle_log.clone();

        let mut dispatcher = LifecycleDispatcher::<dyn ThemedView>::new();
        dispatcher.observe(Rc::new(
            move |_: &dyn ThemedView, event: LifecycleEvent| -> anyhow::Result<()> {
                log.borrow_mut().push(event);
                Ok(())
            },
        ));

        Self {
            dispatcher,
            views: RefCell::new(Vec::new()),
            lifecycle_log,
        }
    }

    /// Create a window with the registry's appearance hook installed
    pub fn with_registry(registry: &ThemeRegistry) -> Self {
        let mut window = Self::new();
        registry.install_hook(&mut window.dispatcher);
        window
    }

    /// Install an appearance hook with an explicit failure policy
    pub fn install_hook(&mut self, policy: FailurePolicy) -> Rc<AppearanceHook> {
        AppearanceHook::install(&mut self.dispatcher, policy)
    }

    /// Add a view to the window and notify observers
    pub fn attach(&self, view: &Rc<HeadlessView>) -> anyhow::Result<()> {
        if !self.contains(view) {
            self.views.borrow_mut().push(view.clone());
        }
        view.set_attached(true);
        tracing::trace!("HeadlessWindow::attach - {}", view.name());
        self.dispatcher.dispatch(&**view, LifecycleEvent::Attached)
    }

    /// Remove a view from the window and notify observers
    pub fn detach(&self, view: &Rc<HeadlessView>) -> anyhow::Result<()> {
        self.views.borrow_mut().retain(|other| !Rc::ptr_eq(other, view));
        view.set_attached(false);
        tracing::trace!("HeadlessWindow::detach - {}", view.name());
        self.dispatcher.dispatch(&**view, LifecycleEvent::Detached)
    }

    pub fn contains(&self, view: &Rc<HeadlessView>) -> bool {
        self.views.borrow().iter().any(|other| Rc::ptr_eq(other, view))
    }

    /// Number of attached views
    pub fn len(&self) -> usize {
        self.views.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.borrow().is_empty()
    }

    /// Notifications the window's own handler received, oldest first
    pub fn lifecycle_events(&self) -> Vec<LifecycleEvent> {
        self.lifecycle_log.borrow().clone()
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HeadlessWindow {
    fn drop(&mut self) {
        for view in self.views.borrow().iter() {
            view.set_attached(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_and_detach_track_membership() {
        let window = HeadlessWindow::new();
        let view = HeadlessView::new("row");

        window.attach(&view).unwrap();
        window.attach(&view).unwrap();
        assert!(view.is_attached());
        assert_eq!(window.len(), 1);

        window.detach(&view).unwrap();
        assert!(!view.is_attached());
        assert!(window.is_empty());
        assert_eq!(
            window.lifecycle_events(),
            vec![
                LifecycleEvent::Attached,
                LifecycleEvent::Attached,
                LifecycleEvent::Detached
            ]
        );
    }

    #[test]
    fn test_dropping_window_detaches_views() {
        let view = HeadlessView::new("row");
        {
            let window = HeadlessWindow::new();
            window.attach(&view).unwrap();
        }
        assert!(!view.is_attached());
    }
}
