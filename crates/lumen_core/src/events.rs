//! View lifecycle dispatch
//!
//! The toolkit owns its views and reports every change of a view's window
//! attachment to a [`LifecycleDispatcher`]. Interested layers install an
//! [`AttachmentObserver`] instead of patching the toolkit's own handler.
//! Every installed observer sees every notification, in installation order.

use std::fmt;
use std::rc::Rc;

/// Window-attachment lifecycle notification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The view became part of a displayed window hierarchy
    Attached,
    /// The view was removed from its window
    Detached,
}

impl LifecycleEvent {
    /// Event matching an attachment flag
    pub fn from_attached(attached: bool) -> Self {
        if attached {
            Self::Attached
        } else {
            Self::Detached
        }
    }

    pub fn is_attached(self) -> bool {
        matches!(self, Self::Attached)
    }
}

/// Receives window-attachment notifications for views of type `V`
pub trait AttachmentObserver<V: ?Sized> {
    fn attachment_changed(&self, view: &V, event: LifecycleEvent) -> anyhow::Result<()>;
}

impl<V, F> AttachmentObserver<V> for F
where
    V: ?Sized,
    F: Fn(&V, LifecycleEvent) -> anyhow::Result<()>,
{
    fn attachment_changed(&self, view: &V, event: LifecycleEvent) -> anyhow::Result<()> {
        self(view, event)
    }
}

/// Dispatches lifecycle notifications to installed observers
pub struct LifecycleDispatcher<V: ?Sized> {
    observers: Vec<Rc<dyn AttachmentObserver<V>>>,
}

impl<V: ?Sized> LifecycleDispatcher<V> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Install an observer after all existing ones
    pub fn observe(&mut self, observer: Rc<dyn AttachmentObserver<V>>) {
        self.observers.push(observer);
    }

    /// Install an observer ahead of all existing ones
    pub fn observe_first(&mut self, observer: Rc<dyn AttachmentObserver<V>>) {
        self.observers.insert(0, observer);
    }

    /// Deliver a notification to every observer.
    ///
    /// A failing observer never stops delivery to the ones after it; the
    /// first failure is returned once all observers have run.
    pub fn dispatch(&self, view: &V, event: LifecycleEvent) -> anyhow::Result<()> {
        let mut first_error = None;
        for (index, observer) in self.observers.iter().enumerate() {
            if let Err(err) = observer.attachment_changed(view, event) {
                tracing::debug!("lifecycle observer {} failed on {:?}: {:#}", index, event, err);
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<V: ?Sized> Default for LifecycleDispatcher<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> fmt::Debug for LifecycleDispatcher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleDispatcher")
            .field("observers", &self.observers.len())
            .finish()
    }
}
