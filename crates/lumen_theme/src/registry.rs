//! Theme registry
//!
//! `ThemeRegistry` is the application-owned context holding the current
//! [`Style`], the palettes of every style, and a weak registry of themed
//! views. It is constructed once at startup and handed (cheaply cloned) to
//! whichever layer needs colors or binds updaters; dropping the last handle
//! tears it down.
//!
//! All state lives on the UI thread. The registry is `!Send` and `!Sync`.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use lumen_core::{Color, LifecycleDispatcher};
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace, warn};

use crate::chain::{ChainOutcome, IntoUpdateResult, ThemedView};
use crate::config::{FailurePolicy, ThemeConfig};
use crate::error::ThemeError;
use crate::hook::AppearanceHook;
use crate::palette::{ColorPalette, PaletteBundle};
use crate::style::Style;

/// Registry size that triggers the first sweep of dead views in `register`
const MIN_SWEEP_THRESHOLD: usize = 64;

new_key_type! {
    /// Registry handle of a themed view
    pub struct ViewKey;
}

/// Summary of one [`ThemeRegistry::set_style`] call
#[derive(Debug)]
pub struct Propagation {
    /// Style before the call
    pub from: Style,
    /// Style after the call
    pub to: Style,
    /// False when the requested style was already current
    pub changed: bool,
    /// Views whose updaters all ran
    pub repainted: usize,
    /// Views that were detached and are now pending
    pub deferred: usize,
    /// Registrations skipped because the view is gone or has no updaters
    pub inert: usize,
    /// Isolated updater failures, one per affected view
    pub failures: Vec<ThemeError>,
}

impl Propagation {
    fn unchanged(style: Style) -> Self {
        Self {
            from: style,
            to: style,
            changed: false,
            repainted: 0,
            deferred: 0,
            inert: 0,
            failures: Vec::new(),
        }
    }

    /// True when no updater failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

struct RegistryInner {
    palettes: PaletteBundle,
    style: Cell<Style>,
    policy: FailurePolicy,
    views: RefCell<SlotMap<ViewKey, Weak<dyn ThemedView>>>,
    /// Slot count at which `register` sweeps dead views; doubles with the live set
    sweep_at: Cell<usize>,
}

/// Current style, active palette, and the weak set of themed views
#[derive(Clone)]
pub struct ThemeRegistry {
    inner: Rc<RegistryInner>,
}

impl ThemeRegistry {
    pub fn new(config: &ThemeConfig) -> Self {
        debug!(
            "ThemeRegistry::new - style {}, failure policy {:?}",
            config.initial_style, config.failure_policy
        );
        Self {
            inner: Rc::new(RegistryInner {
                palettes: PaletteBundle::new(),
                style: Cell::new(config.initial_style),
                policy: config.failure_policy,
                views: RefCell::new(SlotMap::with_key()),
                sweep_at: Cell::new(MIN_SWEEP_THRESHOLD),
            }),
        }
    }

    // ========== Style ==========

    /// Get the current style
    pub fn style(&self) -> Style {
        self.inner.style.get()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.inner.policy
    }

    /// Palette of the current style
    pub fn palette(&self) -> &ColorPalette {
        self.inner.palettes.for_style(self.style())
    }

    /// Switch the global style and repaint every registered view.
    ///
    /// Does nothing when `style` is already current. Otherwise the style and
    /// its palette are swapped before any updater runs, then each live view's
    /// chain executes: attached views repaint, detached views defer until
    /// their next attachment.
    ///
    /// Under [`FailurePolicy::Isolate`] a failing view is logged and recorded
    /// in [`Propagation::failures`] while the remaining views still repaint.
    /// Under [`FailurePolicy::FailFast`] the first failure is returned and the
    /// remaining views are not visited; the new style stays in effect.
    /// Panics raised by updaters are not caught.
    pub fn set_style(&self, style: Style) -> Result<Propagation, ThemeError> {
        let from = self.style();
        if from == style {
            trace!("ThemeRegistry::set_style - already {}", style);
            return Ok(Propagation::unchanged(style));
        }

        debug!("ThemeRegistry::set_style - switching from {} to {}", from, style);
        self.inner.style.set(style);

        let mut report = Propagation {
            from,
            to: style,
            changed: true,
            ..Propagation::unchanged(style)
        };
        report.inert += self.prune();

        // Weak snapshot: an updater may register or drop views mid-iteration.
        let snapshot: Vec<(ViewKey, Weak<dyn ThemedView>)> = self
            .inner
            .views
            .borrow()
            .iter()
            .map(|(key, view)| (key, view.clone()))
            .collect();

        for (key, view) in snapshot {
            let chain = view.upgrade().and_then(|view| view.appearance().chain());
            let Some(chain) = chain else {
                report.inert += 1;
                continue;
            };

            match chain.execute_all() {
                Ok(ChainOutcome::Ran(_)) => report.repainted += 1,
                Ok(ChainOutcome::Deferred) => report.deferred += 1,
                Ok(ChainOutcome::Inert) => report.inert += 1,
                Err(err) => match self.inner.policy {
                    FailurePolicy::Isolate => {
                        warn!("view {:?} failed to repaint for {}: {}", key, style, err);
                        report.failures.push(err);
                    }
                    FailurePolicy::FailFast => return Err(err),
                },
            }
        }

        debug!(
            "ThemeRegistry::set_style - {} repainted, {} deferred, {} inert, {} failed",
            report.repainted,
            report.deferred,
            report.inert,
            report.failures.len()
        );
        Ok(report)
    }

    /// Toggle between light and dark style
    pub fn toggle_style(&self) -> Result<Propagation, ThemeError> {
        self.set_style(self.style().toggle())
    }

    // ========== Color Access ==========

    /// Color for a key in the active palette, `None` for unknown keys
    pub fn color_for(&self, key: impl AsRef<str>) -> Option<Color> {
        self.palette().color(key.as_ref())
    }

    /// Packed `0xRRGGBBAA` value for a key in the active palette
    pub fn packed_color_for(&self, key: impl AsRef<str>) -> Option<u32> {
        self.palette().lookup(key.as_ref())
    }

    // ========== View Registration ==========

    /// Add a view to the weak registry.
    ///
    /// Idempotent: a view that already carries a key keeps it. A view
    /// belongs to a single registry; registering it with a second one logs a
    /// warning and leaves it out of that registry.
    ///
    /// Registrations of destroyed views are swept here as well as on every
    /// style switch, once the registry has grown past twice its live size.
    pub fn register(&self, view: &Rc<dyn ThemedView>) -> ViewKey {
        let slot = view.appearance();
        if let Some(key) = slot.view_key() {
            let owned = self
                .inner
                .views
                .borrow()
                .get(key)
                .is_some_and(|known| known.ptr_eq(&Rc::downgrade(view)));
            if !owned {
                warn!(
                    "ThemeRegistry::register - view {:?} belongs to another registry",
                    key
                );
            }
            return key;
        }

        if self.inner.views.borrow().len() >= self.inner.sweep_at.get() {
            self.prune();
        }

        let key = self.inner.views.borrow_mut().insert(Rc::downgrade(view));
        slot.set_view_key(key);
        debug!("ThemeRegistry::register - view {:?}", key);
        key
    }

    /// Bind an updater to a view.
    ///
    /// The updater runs once immediately, whether or not the view is
    /// attached. If that run fails, nothing is bound. Otherwise the view is
    /// registered on its first binding and the updater is appended to the
    /// view's chain, to re-run on every style change in bind order.
    ///
    /// Updaters return `()` or `Result<(), E>`.
    pub fn bind_updater<V, F, R>(&self, view: &Rc<V>, updater: F) -> Result<(), ThemeError>
    where
        V: ThemedView,
        F: Fn() -> R + 'static,
        R: IntoUpdateResult,
    {
        let view: Rc<dyn ThemedView> = view.clone();
        self.bind_updater_dyn(&view, updater)
    }

    /// [`bind_updater`](Self::bind_updater) for type-erased views
    pub fn bind_updater_dyn<F, R>(
        &self,
        view: &Rc<dyn ThemedView>,
        updater: F,
    ) -> Result<(), ThemeError>
    where
        F: Fn() -> R + 'static,
        R: IntoUpdateResult,
    {
        updater()
            .into_update_result()
            .map_err(ThemeError::InitialUpdate)?;

        let key = self.register(view);
        let chain = view
            .appearance()
            .chain_or_init(key, || Rc::downgrade(view));
        chain.push(Rc::new(move || updater().into_update_result()));
        trace!("view {:?} now has {} updaters", key, chain.len());
        Ok(())
    }

    /// Number of registered views that are still alive
    pub fn registered_views(&self) -> usize {
        self.inner
            .views
            .borrow()
            .values()
            .filter(|view| view.strong_count() > 0)
            .count()
    }

    /// Drop registrations of destroyed views, returning how many were removed
    pub fn prune(&self) -> usize {
        let mut views = self.inner.views.borrow_mut();
        let before = views.len();
        views.retain(|_, view| view.strong_count() > 0);
        let removed = before - views.len();
        self.inner
            .sweep_at
            .set((views.len() * 2).max(MIN_SWEEP_THRESHOLD));
        if removed > 0 {
            trace!("ThemeRegistry::prune - dropped {} dead views", removed);
        }
        removed
    }

    // ========== Lifecycle ==========

    /// Install the appearance hook on a toolkit dispatcher, using this
    /// registry's failure policy
    pub fn install_hook(
        &self,
        dispatcher: &mut LifecycleDispatcher<dyn ThemedView>,
    ) -> Rc<AppearanceHook> {
        AppearanceHook::install(dispatcher, self.inner.policy)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(&ThemeConfig::default())
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("style", &self.style())
            .field("policy", &self.inner.policy)
            .field("views", &self.inner.views.borrow().len())
            .finish()
    }
}
