//! Lumen Core
//!
//! Foundational primitives shared by the Lumen crates:
//!
//! - **Colors**: RGBA values decoded from packed `0xRRGGBBAA` integers
//! - **Lifecycle dispatch**: window-attachment notifications delivered from
//!   the toolkit to every installed [`AttachmentObserver`]
//!
//! # Example
//!
//! ```rust
//! use lumen_core::{Color, LifecycleDispatcher, LifecycleEvent};
//! use std::rc::Rc;
//!
//! let theme = Color::from_rgba_hex(0xFF8C30FF);
//! assert_eq!(theme.to_rgb8(), (255, 140, 48));
//!
//! let mut dispatcher = LifecycleDispatcher::<str>::new();
//! dispatcher.observe(Rc::new(|_view: &str, _event: LifecycleEvent| -> anyhow::Result<()> {
//!     Ok(())
//! }));
//! dispatcher.dispatch("root", LifecycleEvent::Attached).unwrap();
//! ```

pub mod color;
pub mod events;

pub use color::Color;
pub use events::{AttachmentObserver, LifecycleDispatcher, LifecycleEvent};
