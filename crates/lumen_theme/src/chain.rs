//! Per-view updater chains
//!
//! Every themed view embeds an [`AppearanceSlot`]. The first time an updater
//! is bound to the view, the slot receives the view's registry key and an
//! [`UpdateCallbackChain`]: the ordered list of updaters re-run whenever the
//! style changes. The chain lives and dies with the view that owns the slot.
//!
//! A chain only repaints views that are attached to a window. Executing the
//! chain of a detached view defers the work and marks the chain pending; the
//! [`AppearanceHook`](crate::hook::AppearanceHook) replays it once the view is
//! attached again.
//!
//! ```text
//!            detached execution
//!   Fresh ─────────────────────────┐
//!                                  ▼
//!   Settled ◄──attached execution── Pending
//!      │                            ▲
//!      └───── detached execution ───┘
//! ```

use std::cell::{Cell, OnceCell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::error::ThemeError;
use crate::registry::ViewKey;

/// A view whose appearance follows the current style.
///
/// Implemented by the toolkit's view type. The slot must be owned by the view
/// itself so that the chain is dropped together with the view.
pub trait ThemedView: 'static {
    /// Whether the view is currently part of a displayed window hierarchy
    fn is_attached(&self) -> bool;

    /// Appearance bookkeeping embedded in the view
    fn appearance(&self) -> &AppearanceSlot;
}

/// Return values accepted from updaters
pub trait IntoUpdateResult {
    fn into_update_result(self) -> anyhow::Result<()>;
}

impl IntoUpdateResult for () {
    fn into_update_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<E> IntoUpdateResult for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_update_result(self) -> anyhow::Result<()> {
        self.map_err(Into::into)
    }
}

pub(crate) type Updater = Rc<dyn Fn() -> anyhow::Result<()>>;

/// Lifecycle state of a chain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChainState {
    /// Never deferred
    #[default]
    Fresh,
    /// Deferred while detached, waiting for reattachment
    Pending,
    /// Last execution ran against an attached view
    Settled,
}

/// Result of executing a chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainOutcome {
    /// All updaters ran, in bind order
    Ran(usize),
    /// The view was detached; the chain is now pending
    Deferred,
    /// The owning view no longer exists
    Inert,
}

/// Ordered updaters of one view
pub struct UpdateCallbackChain {
    key: ViewKey,
    owner: Weak<dyn ThemedView>,
    updaters: RefCell<SmallVec<[Updater; 2]>>,
    state: Cell<ChainState>,
}

impl UpdateCallbackChain {
    pub(crate) fn new(key: ViewKey, owner: Weak<dyn ThemedView>) -> Self {
        Self {
            key,
            owner,
            updaters: RefCell::new(SmallVec::new()),
            state: Cell::new(ChainState::Fresh),
        }
    }

    pub(crate) fn push(&self, updater: Updater) {
        self.updaters.borrow_mut().push(updater);
    }

    /// Run every updater if the owning view is attached, otherwise defer.
    ///
    /// A failing updater aborts the rest of the chain. Updaters bound while
    /// the chain runs are picked up by the next execution.
    pub fn execute_all(&self) -> Result<ChainOutcome, ThemeError> {
        let Some(owner) = self.owner.upgrade() else {
            return Ok(ChainOutcome::Inert);
        };
        let attached = owner.is_attached();
        drop(owner);

        if !attached {
            tracing::trace!("view {:?} detached, deferring updaters", self.key);
            self.state.set(ChainState::Pending);
            return Ok(ChainOutcome::Deferred);
        }

        let updaters = self.updaters.borrow().clone();
        self.state.set(ChainState::Settled);
        tracing::trace!("view {:?} running {} updaters", self.key, updaters.len());

        for (index, updater) in updaters.iter().enumerate() {
            updater().map_err(|source| ThemeError::Updater {
                view: self.key,
                index,
                source,
            })?;
        }
        Ok(ChainOutcome::Ran(updaters.len()))
    }

    pub fn state(&self) -> ChainState {
        self.state.get()
    }

    pub fn is_pending(&self) -> bool {
        self.state.get() == ChainState::Pending
    }

    pub fn view_key(&self) -> ViewKey {
        self.key
    }

    /// Number of bound updaters
    pub fn len(&self) -> usize {
        self.updaters.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.updaters.borrow().is_empty()
    }
}

impl fmt::Debug for UpdateCallbackChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateCallbackChain")
            .field("key", &self.key)
            .field("updaters", &self.len())
            .field("state", &self.state.get())
            .finish()
    }
}

/// Appearance bookkeeping a themed view carries.
#[derive(Default)]
pub struct AppearanceSlot {
    key: Cell<Option<ViewKey>>,
    chain: OnceCell<Rc<UpdateCallbackChain>>,
}

impl AppearanceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry key, once the view has been registered
    pub fn view_key(&self) -> Option<ViewKey> {
        self.key.get()
    }

    /// The view's chain, once an updater has been bound
    pub fn chain(&self) -> Option<Rc<UpdateCallbackChain>> {
        self.chain.get().cloned()
    }

    pub fn is_pending(&self) -> bool {
        self.chain.get().is_some_and(|chain| chain.is_pending())
    }

    pub(crate) fn set_view_key(&self, key: ViewKey) {
        self.key.set(Some(key));
    }

    pub(crate) fn chain_or_init(
        &self,
        key: ViewKey,
        owner: impl FnOnce() -> Weak<dyn ThemedView>,
    ) -> &Rc<UpdateCallbackChain> {
        self.chain
            .get_or_init(|| Rc::new(UpdateCallbackChain::new(key, owner())))
    }
}

impl fmt::Debug for AppearanceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppearanceSlot")
            .field("key", &self.key.get())
            .field("chain", &self.chain.get())
            .finish()
    }
}
