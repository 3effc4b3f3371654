//! Lifecycle hook replaying deferred updaters
//!
//! Installed once on the toolkit's [`LifecycleDispatcher`], ahead of the
//! toolkit's own observers. On every attachment notification it replays the
//! view's chain if a previous style switch deferred it. Views without a
//! chain pass straight through.

use std::rc::Rc;

use lumen_core::{AttachmentObserver, LifecycleDispatcher, LifecycleEvent};

use crate::chain::{ChainOutcome, ThemedView};
use crate::config::FailurePolicy;
use crate::error::ThemeError;

/// Replays pending chains when their view is (re)attached
#[derive(Debug)]
pub struct AppearanceHook {
    policy: FailurePolicy,
}

impl AppearanceHook {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// Install the hook so it runs before any other observer
    pub fn install(
        dispatcher: &mut LifecycleDispatcher<dyn ThemedView>,
        policy: FailurePolicy,
    ) -> Rc<Self> {
        let hook = Rc::new(Self::new(policy));
        dispatcher.observe_first(hook.clone());
        hook
    }

    /// Replay the view's chain if it is pending.
    ///
    /// Returns `None` when there was nothing to replay. A replay while the
    /// view is still detached leaves the chain pending.
    pub fn replay(&self, view: &dyn ThemedView) -> Result<Option<ChainOutcome>, ThemeError> {
        let Some(chain) = view.appearance().chain() else {
            return Ok(None);
        };
        if !chain.is_pending() {
            return Ok(None);
        }

        tracing::debug!("AppearanceHook - replaying view {:?}", chain.view_key());
        chain.execute_all().map(Some)
    }
}

impl AttachmentObserver<dyn ThemedView> for AppearanceHook {
    fn attachment_changed(
        &self,
        view: &dyn ThemedView,
        event: LifecycleEvent,
    ) -> anyhow::Result<()> {
        match self.replay(view) {
            Ok(_) => Ok(()),
            Err(err) => match self.policy {
                FailurePolicy::Isolate => {
                    tracing::warn!("deferred repaint failed on {:?}: {}", event, err);
                    Ok(())
                }
                FailurePolicy::FailFast => Err(err.into()),
            },
        }
    }
}
