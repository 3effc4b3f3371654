//! Lumen Headless
//!
//! A minimal view tree that plays the toolkit's part of the appearance
//! contract without a display:
//!
//! - [`HeadlessView`] implements [`ThemedView`](lumen_theme::ThemedView) and
//!   records every color assigned to it
//! - [`HeadlessWindow`] attaches and detaches views and delivers the matching
//!   lifecycle notifications
//!
//! Useful for:
//! - Unit and integration testing of themed widgets
//! - CI pipelines without a display server

mod view;
mod window;

pub use view::HeadlessView;
pub use window::HeadlessWindow;

use tracing_subscriber::EnvFilter;

/// Install a test-friendly tracing subscriber.
///
/// Honors `RUST_LOG` and defaults to `warn`. Safe to call from every test;
/// only the first call installs anything.
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
