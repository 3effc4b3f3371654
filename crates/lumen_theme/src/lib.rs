//! Lumen Theme
//!
//! Runtime appearance layer: a current light/dark [`Style`], the
//! [`ColorPalette`] of semantic colors for that style, and propagation of
//! style changes to every themed view.
//!
//! # Overview
//!
//! - **Palettes**: compiled-in key to `0xRRGGBBAA` tables, one per style
//! - **Registry**: application-owned [`ThemeRegistry`] holding the current
//!   style and a weak set of views
//! - **Updater chains**: each view owns an ordered list of repaint callbacks,
//!   re-run on every style switch
//! - **Deferred repaint**: views detached from a window are skipped and
//!   repainted by the [`AppearanceHook`] once they are attached again
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumen_theme::{ColorKey, Style, ThemeConfig, ThemeRegistry};
//!
//! // Create the registry at app startup and hook it into the toolkit
//! let registry = ThemeRegistry::new(&ThemeConfig::default());
//! registry.install_hook(&mut toolkit.lifecycle_dispatcher());
//!
//! // Bind an updater; it runs now and after every style switch
//! let colors = registry.clone();
//! let target = Rc::downgrade(&label);
//! registry.bind_updater(&label, move || {
//!     if let Some(label) = target.upgrade() {
//!         label.set_text_color(colors.color_for(ColorKey::Text));
//!     }
//! })?;
//!
//! registry.set_style(Style::Dark)?;
//! ```
//!
//! # Threading
//!
//! Everything runs on the UI thread. Registries, chains, and slots are built
//! on `Rc` and `Cell` and cannot cross threads.

pub mod chain;
pub mod config;
pub mod error;
pub mod hook;
pub mod palette;
pub mod registry;
pub mod style;
pub mod themes;

// Re-export commonly used types
pub use chain::{
    AppearanceSlot, ChainOutcome, ChainState, IntoUpdateResult, ThemedView, UpdateCallbackChain,
};
pub use config::{FailurePolicy, ThemeConfig};
pub use error::ThemeError;
pub use hook::AppearanceHook;
pub use lumen_core::Color;
pub use palette::{ColorKey, ColorPalette, PaletteBundle};
pub use registry::{Propagation, ThemeRegistry, ViewKey};
pub use style::Style;
