//! Style switch walkthrough on a headless window
//!
//! Run with: cargo run -p lumen_headless --example style_switch

use std::rc::Rc;

use lumen_headless::{HeadlessView, HeadlessWindow};
use lumen_theme::{ColorKey, Style, ThemeConfig, ThemeRegistry};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let registry = ThemeRegistry::new(&ThemeConfig::default());
    let window = HeadlessWindow::with_registry(&registry);

    let header = HeadlessView::new("header");
    let offscreen = HeadlessView::new("offscreen");
    window.attach(&header)?;

    for view in [&header, &offscreen] {
        let colors = registry.clone();
        let target = Rc::downgrade(view);
        registry.bind_updater(view, move || {
            if let Some(view) = target.upgrade() {
                view.set_background(colors.color_for(ColorKey::NavBackground));
                view.set_text_color(colors.color_for(ColorKey::Text));
            }
        })?;
    }

    let report = registry.set_style(Style::Dark)?;
    println!(
        "switched {} -> {}: {} repainted, {} deferred",
        report.from, report.to, report.repainted, report.deferred
    );

    window.attach(&offscreen)?;
    for view in [&header, &offscreen] {
        println!(
            "{:>10}: background {:?}, {} paints",
            view.name(),
            view.background().map(|c| format!("#{:08X}", c.to_rgba_hex())),
            view.paint_count()
        );
    }

    Ok(())
}
