//! End-to-end appearance scenarios on a headless window
//!
//! These tests verify that:
//! - Style switches repaint attached views exactly once, in bind order
//! - Detached views defer and repaint once on reattachment
//! - Destroyed views are skipped without affecting the rest
//! - The window's own lifecycle handler always sees every notification

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lumen_core::LifecycleEvent;
use lumen_headless::{init_test_tracing, HeadlessView, HeadlessWindow};
use lumen_theme::{
    ChainState, ColorKey, FailurePolicy, Style, ThemeConfig, ThemeRegistry, ThemedView,
};
use pretty_assertions::assert_eq;

/// Bind an updater painting the view's background from `key`
fn bind_background(registry: &ThemeRegistry, view: &Rc<HeadlessView>, key: ColorKey) {
    let colors = registry.clone();
    let target = Rc::downgrade(view);
    registry
        .bind_updater(view, move || {
            if let Some(view) = target.upgrade() {
                view.set_background(colors.color_for(key));
            }
        })
        .unwrap();
}

fn background_rgb(view: &HeadlessView) -> Option<(u8, u8, u8)> {
    view.background().map(|color| color.to_rgb8())
}

#[test]
fn test_theme_color_switches_with_style() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let banner = HeadlessView::new("banner");
    window.attach(&banner).unwrap();
    bind_background(&registry, &banner, ColorKey::Theme);

    assert_eq!(background_rgb(&banner), Some((255, 140, 48)));

    let report = registry.set_style(Style::Dark).unwrap();

    assert!(report.changed);
    assert_eq!(report.repainted, 1);
    assert_eq!(background_rgb(&banner), Some((0, 0, 0)));
    assert_eq!(banner.paint_count(), 2);
}

#[test]
fn test_repeated_style_runs_updaters_once() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let card = HeadlessView::new("card");
    window.attach(&card).unwrap();
    bind_background(&registry, &card, ColorKey::Background);

    registry.set_style(Style::Dark).unwrap();
    registry.set_style(Style::Dark).unwrap();
    registry.set_style(Style::Light).unwrap();
    registry.set_style(Style::Light).unwrap();

    assert_eq!(card.paint_count(), 3);
}

#[test]
fn test_updaters_run_in_bind_order_with_new_palette() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let label = HeadlessView::new("label");
    window.attach(&label).unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    for step in ["text", "background", "theme"] {
        let (seen, colors) = (seen.clone(), registry.clone());
        registry
            .bind_updater(&label, move || {
                let packed = colors.packed_color_for(step);
                seen.borrow_mut().push((step, packed));
            })
            .unwrap();
    }
    seen.borrow_mut().clear();

    registry.set_style(Style::Dark).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            ("text", Some(0xFFFFFFFF)),
            ("background", Some(0x1D1D1DFF)),
            ("theme", Some(0x000000FF)),
        ]
    );
}

#[test]
fn test_detached_bind_fires_now_then_on_attach() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let sheet = HeadlessView::new("sheet");
    bind_background(&registry, &sheet, ColorKey::ViewControllerBackground);

    // Fires once at bind time even though the view is detached
    assert_eq!(sheet.paint_count(), 1);

    let report = registry.set_style(Style::Dark).unwrap();
    assert_eq!(report.deferred, 1);
    assert_eq!(sheet.paint_count(), 1);
    assert!(sheet.appearance().is_pending());

    window.attach(&sheet).unwrap();
    assert_eq!(sheet.paint_count(), 2);
    assert_eq!(background_rgb(&sheet), Some((0, 0, 0)));
    assert!(!sheet.appearance().is_pending());

    // Further notifications do not replay a settled chain
    window.detach(&sheet).unwrap();
    window.attach(&sheet).unwrap();
    assert_eq!(sheet.paint_count(), 2);
}

#[test]
fn test_replay_happens_once_across_multiple_switches() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let panel = HeadlessView::new("panel");
    bind_background(&registry, &panel, ColorKey::Background);

    registry.set_style(Style::Dark).unwrap();
    registry.set_style(Style::Light).unwrap();
    registry.set_style(Style::Dark).unwrap();
    assert_eq!(panel.paint_count(), 1);

    window.attach(&panel).unwrap();
    assert_eq!(panel.paint_count(), 2);
    assert_eq!(
        panel.paint_log().last().copied().flatten().map(|c| c.to_rgba_hex()),
        Some(0x1D1D1DFF)
    );
}

#[test]
fn test_detach_between_switches() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let toolbar = HeadlessView::new("toolbar");
    window.attach(&toolbar).unwrap();
    bind_background(&registry, &toolbar, ColorKey::NavBackground);

    registry.set_style(Style::Dark).unwrap();
    assert_eq!(toolbar.paint_count(), 2);

    window.detach(&toolbar).unwrap();
    registry.set_style(Style::Light).unwrap();
    assert_eq!(toolbar.paint_count(), 2);
    let chain = toolbar.appearance().chain().unwrap();
    assert_eq!(chain.state(), ChainState::Pending);

    window.attach(&toolbar).unwrap();
    assert_eq!(toolbar.paint_count(), 3);
    assert_eq!(background_rgb(&toolbar), Some((255, 140, 48)));
    assert_eq!(chain.state(), ChainState::Settled);
}

#[test]
fn test_destroyed_view_is_skipped() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let survivor = HeadlessView::new("survivor");
    window.attach(&survivor).unwrap();
    bind_background(&registry, &survivor, ColorKey::Background);

    let hits = Rc::new(Cell::new(0));
    {
        let doomed = HeadlessView::new("doomed");
        window.attach(&doomed).unwrap();
        let counter = hits.clone();
        registry
            .bind_updater(&doomed, move || counter.set(counter.get() + 1))
            .unwrap();
        window.detach(&doomed).unwrap();
    }
    assert_eq!(registry.registered_views(), 1);

    let report = registry.set_style(Style::Dark).unwrap();

    assert_eq!(report.repainted, 1);
    assert_eq!(report.inert, 1);
    assert_eq!(hits.get(), 1);
    assert_eq!(survivor.paint_count(), 2);
}

#[test]
fn test_window_handler_always_notified() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);
    let plain = HeadlessView::new("plain");
    let themed = HeadlessView::new("themed");
    bind_background(&registry, &themed, ColorKey::Text);
    registry.set_style(Style::Dark).unwrap();

    window.attach(&plain).unwrap();
    window.attach(&themed).unwrap();
    window.detach(&plain).unwrap();

    assert_eq!(
        window.lifecycle_events(),
        vec![
            LifecycleEvent::Attached,
            LifecycleEvent::Attached,
            LifecycleEvent::Detached,
        ]
    );
    assert_eq!(window.len(), 1);
}

#[test]
fn test_broken_view_does_not_block_others() {
    init_test_tracing();
    let registry = ThemeRegistry::default();
    let window = HeadlessWindow::with_registry(&registry);

    let broken = HeadlessView::new("broken");
    window.attach(&broken).unwrap();
    let armed = Rc::new(Cell::new(false));
    let trigger = armed.clone();
    registry
        .bind_updater(&broken, move || -> anyhow::Result<()> {
            anyhow::ensure!(!trigger.get(), "surface lost");
            Ok(())
        })
        .unwrap();

    let healthy = HeadlessView::new("healthy");
    window.attach(&healthy).unwrap();
    bind_background(&registry, &healthy, ColorKey::Theme);

    armed.set(true);
    let report = registry.set_style(Style::Dark).unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.repainted, 1);
    assert_eq!(background_rgb(&healthy), Some((0, 0, 0)));
}

#[test]
fn test_fail_fast_replay_still_reaches_window_handler() {
    init_test_tracing();
    let config = ThemeConfig::from_toml_str(r#"failure_policy = "fail-fast""#).unwrap();
    let registry = ThemeRegistry::new(&config);
    let mut window = HeadlessWindow::new();
    window.install_hook(FailurePolicy::FailFast);

    let view = HeadlessView::new("fragile");
    let armed = Rc::new(Cell::new(false));
    let trigger = armed.clone();
    registry
        .bind_updater(&view, move || -> anyhow::Result<()> {
            anyhow::ensure!(!trigger.get(), "surface lost");
            Ok(())
        })
        .unwrap();
    registry.set_style(Style::Dark).unwrap();
    armed.set(true);

    assert!(window.attach(&view).is_err());
    assert_eq!(window.lifecycle_events(), vec![LifecycleEvent::Attached]);
}

#[test]
fn test_initial_style_from_config() {
    init_test_tracing();
    let config = ThemeConfig::from_toml_str(r#"initial_style = "dark""#).unwrap();
    let registry = ThemeRegistry::new(&config);
    let window = HeadlessWindow::with_registry(&registry);
    let label = HeadlessView::new("label");
    window.attach(&label).unwrap();

    let colors = registry.clone();
    let target = Rc::downgrade(&label);
    registry
        .bind_updater(&label, move || {
            if let Some(label) = target.upgrade() {
                label.set_text_color(colors.color_for(ColorKey::Text));
            }
        })
        .unwrap();

    assert_eq!(
        label.text_color().map(|c| c.to_rgba_hex()),
        Some(0xFFFFFFFF)
    );
    assert!(!registry.set_style(Style::Dark).unwrap().changed);
}
