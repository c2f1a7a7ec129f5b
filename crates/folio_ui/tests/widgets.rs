use folio_theme::{ColorToken, SystemDefault, ThemeMode};
use folio_ui::prelude::*;

#[test]
fn faq_accordion_full_scenario() {
    let page = Page::with_theme(SystemDefault);
    let faq = accordion(&page, "faq")
        .title("FAQ")
        .content(|| div().child(text("All answers are in the manual.")))
        .build_component();

    // Initial render: title only, chevron unrotated
    let mut tree = ElementTree::new();
    let root = faq.render(&mut tree);
    assert_eq!(tree.mounted_text(root), vec!["FAQ"]);
    assert_eq!(tree.visible_icons(root), vec![(IconKind::ChevronDown, 0.0)]);

    // First click: content mounted, chevron heading to 180 within the
    // fixed duration
    faq.toggle();
    page.advance_animations(200.0);

    let mut tree = ElementTree::new();
    let root = faq.render(&mut tree);
    assert_eq!(
        tree.mounted_text(root),
        vec!["FAQ", "All answers are in the manual."]
    );
    assert_eq!(tree.visible_icons(root), vec![(IconKind::ChevronDown, 180.0)]);

    // Second click reverses both within the same duration
    faq.toggle();
    page.advance_animations(200.0);

    let mut tree = ElementTree::new();
    let root = faq.render(&mut tree);
    assert_eq!(tree.mounted_text(root), vec!["FAQ"]);
    assert_eq!(tree.visible_icons(root), vec![(IconKind::ChevronDown, 0.0)]);
}

#[test]
fn collapsed_content_is_unreachable_expanded_is_complete() {
    let page = Page::with_theme(SystemDefault);
    let widget = accordion(&page, "a")
        .title("Details")
        .content(|| {
            div()
                .child(text("first paragraph"))
                .child(div().child(text("nested code block")))
        })
        .build_component();

    let mut tree = ElementTree::new();
    let root = widget.render(&mut tree);
    // Collapsed: body is removed from the tree, not merely hidden
    assert_eq!(tree.mounted_text(root), vec!["Details"]);

    widget.toggle();
    let mut tree = ElementTree::new();
    let root = widget.render(&mut tree);
    assert_eq!(
        tree.mounted_text(root),
        vec!["Details", "first paragraph", "nested code block"]
    );
}

#[test]
fn rapid_toggles_supersede_inflight_animation() {
    let page = Page::with_theme(SystemDefault);
    let widget = accordion(&page, "a").title("T").build_component();

    widget.toggle();
    page.advance_animations(100.0); // halfway open

    // Reverse mid-flight: state jumps, animation retargets from its
    // current value instead of queuing
    widget.toggle();
    assert!(!widget.is_expanded());
    let halfway = widget.chevron_rotation();
    assert!(halfway > 0.0 && halfway < 180.0);

    page.advance_animations(200.0);
    assert_eq!(widget.chevron_rotation(), 0.0);
}

#[test]
fn tabs_mount_all_panels_but_show_one() {
    let page = Page::with_theme(SystemDefault);
    let widget = folio_ui::tabs(&page, "langs")
        .item("Rust", "rust", || div().child(text("cargo add folio")))
        .item("Shell", "shell", || div().child(text("curl | sh")))
        .build_component()
        .unwrap();

    let mut tree = ElementTree::new();
    let root = widget.render(&mut tree);

    // Every panel is mounted, so inactive panel state is preserved
    let mounted = tree.mounted_text(root);
    assert!(mounted.contains(&"cargo add folio".to_string()));
    assert!(mounted.contains(&"curl | sh".to_string()));

    // Exactly the active panel is visible
    let visible = tree.visible_text(root);
    assert!(visible.contains(&"cargo add folio".to_string()));
    assert!(!visible.contains(&"curl | sh".to_string()));

    widget.select("shell");
    let mut tree = ElementTree::new();
    let root = widget.render(&mut tree);
    let visible = tree.visible_text(root);
    assert!(!visible.contains(&"cargo add folio".to_string()));
    assert!(visible.contains(&"curl | sh".to_string()));
}

#[test]
fn tab_selection_sequence_from_the_contract() {
    let page = Page::with_theme(SystemDefault);
    let widget = folio_ui::tabs(&page, "t")
        .item("A", "a", div)
        .item("B", "b", div)
        .item("C", "c", div)
        .build_component()
        .unwrap();

    assert_eq!(widget.active_value().as_deref(), Some("a"));
    widget.select("c");
    assert_eq!(widget.active_value().as_deref(), Some("c"));
    widget.select("c");
    assert_eq!(widget.active_value().as_deref(), Some("c"));
}

#[test]
fn theme_round_trip_restores_consumer_styling() {
    let page = Page::with_theme(SystemDefault);
    let provider = page.theme();

    let styling_before: Vec<_> = folio_theme::ColorTokens::all_tokens()
        .iter()
        .map(|&t| provider.color(t))
        .collect();

    provider.toggle();
    provider.toggle();

    let styling_after: Vec<_> = folio_theme::ColorTokens::all_tokens()
        .iter()
        .map(|&t| provider.color(t))
        .collect();

    assert_eq!(styling_before, styling_after);
}

#[test]
fn theme_toggle_two_phase_render() {
    let page = Page::with_theme(SystemDefault);
    let toggle = theme_toggle(&page, "header_toggle");

    // Phase 1: placeholder, no icon, no theme read
    let mut tree = ElementTree::new();
    let root = toggle.render(&mut tree);
    assert!(tree.visible_icons(root).is_empty());

    // Phase 2: after the first render completes, the icon appears
    toggle.mark_ready();
    assert!(page.take_dirty());

    let root = toggle.render(&mut tree);
    assert_eq!(tree.visible_icons(root), vec![(IconKind::Moon, 0.0)]);

    // Activation flips the page theme and the icon on the next render
    toggle.activate();
    assert_eq!(page.theme().mode(), ThemeMode::Dark);
    let root = toggle.render(&mut tree);
    assert_eq!(tree.visible_icons(root), vec![(IconKind::Sun, 0.0)]);
}

#[test]
fn active_tab_carries_accent_marker() {
    let page = Page::with_theme(SystemDefault);
    let widget = folio_ui::tabs(&page, "t")
        .item("A", "a", div)
        .item("B", "b", div)
        .build_component()
        .unwrap();

    let mut tree = ElementTree::new();
    let root = widget.render(&mut tree);

    // The accent token appears exactly once: the active tab's underline
    let mut accents = 0;
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let node = tree.get(id).unwrap();
        if node.style.color == Some(ColorToken::Accent) {
            accents += 1;
        }
        stack.extend(node.children.iter().copied());
    }
    assert_eq!(accents, 1);
}

#[test]
fn independent_pages_do_not_interfere() {
    let page_a = Page::with_theme(SystemDefault);
    let page_b = Page::with_theme(SystemDefault);

    let acc_a = accordion(&page_a, "faq").build_component();
    let acc_b = accordion(&page_b, "faq").build_component();

    acc_a.toggle();
    page_a.theme().toggle();

    assert!(acc_a.is_expanded());
    assert!(!acc_b.is_expanded());
    assert_eq!(page_b.theme().mode(), ThemeMode::Light);
}
