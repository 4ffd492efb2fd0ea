mod common;

use coverage_validator_client::app::AppShell;
use coverage_validator_client::panel::PanelId;
use coverage_validator_client::protocol::BannerStyle;
use coverage_validator_client::render::{self, ListKind, ResultDisplay, TruncatedList, MAX_SHOWN};

use common::result_with;

#[test]
fn collapsed_view_of_25_errors_and_3_warnings() {
    let display = ResultDisplay::new(result_with(false, 25, 3));
    let view = display.render();

    let errors = view.errors.expect("error list");
    assert_eq!(errors.items.len(), 10);
    assert_eq!(errors.items[0], "error 1");
    assert_eq!(errors.items[9], "error 10");
    assert_eq!(errors.summary, "25 errors, showing first 10.");
    assert_eq!(errors.toggle.as_deref(), Some("Show more"));
    assert!(!errors.expanded);

    let warnings = view.warnings.expect("warning list");
    assert_eq!(warnings.items.len(), 3);
    assert_eq!(warnings.summary, "3 warnings.");
    assert_eq!(warnings.toggle, None);
}

#[test]
fn toggling_expands_and_collapses_again() {
    let mut display = ResultDisplay::new(result_with(false, 25, 3));

    assert!(display.toggle(ListKind::Error));
    let errors = display.render().errors.unwrap();
    assert_eq!(errors.items.len(), 25);
    assert_eq!(errors.items[24], "error 25");
    assert_eq!(errors.summary, "25 errors.");
    assert_eq!(errors.toggle.as_deref(), Some("Show fewer"));

    assert!(display.toggle(ListKind::Error));
    let errors = display.render().errors.unwrap();
    assert_eq!(errors.items.len(), 10);
    assert_eq!(errors.summary, "25 errors, showing first 10.");
    assert_eq!(errors.toggle.as_deref(), Some("Show more"));
}

#[test]
fn lists_toggle_independently() {
    let mut display = ResultDisplay::new(result_with(false, 12, 14));
    display.toggle(ListKind::Warning);

    let view = display.render();
    assert_eq!(view.errors.unwrap().items.len(), MAX_SHOWN);
    assert_eq!(view.warnings.unwrap().items.len(), 14);
}

#[test]
fn short_lists_cannot_be_toggled() {
    let mut display = ResultDisplay::new(result_with(false, 25, 3));
    assert!(!display.toggle(ListKind::Warning));
    assert!(!display.list(ListKind::Warning).is_expanded());
}

#[test]
fn exactly_the_cap_is_not_truncated() {
    let list = TruncatedList::default();
    let items: Vec<String> = (0..MAX_SHOWN).map(|i| i.to_string()).collect();
    let view = list.render(ListKind::Error, &items).unwrap();
    assert_eq!(view.items.len(), MAX_SHOWN);
    assert_eq!(view.summary, "10 errors.");
    assert_eq!(view.toggle, None);
}

#[test]
fn eleven_items_are_truncated() {
    let list = TruncatedList::default();
    let items: Vec<String> = (0..11).map(|i| i.to_string()).collect();
    let view = list.render(ListKind::Warning, &items).unwrap();
    assert_eq!(view.items.len(), 10);
    assert_eq!(view.summary, "11 warnings, showing first 10.");
}

#[test]
fn empty_lists_render_nothing() {
    let view = ResultDisplay::new(result_with(true, 0, 0)).render();
    assert!(view.errors.is_none());
    assert!(view.warnings.is_none());

    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("errors").is_none());
    assert!(json.get("warnings").is_none());
}

#[test]
fn singular_noun_for_one_item() {
    let view = ResultDisplay::new(result_with(false, 1, 1)).render();
    assert_eq!(view.errors.unwrap().summary, "1 error.");
    assert_eq!(view.warnings.unwrap().summary, "1 warning.");
}

#[test]
fn banner_reflects_validity_and_schema() {
    let mut result = result_with(true, 0, 2);
    result.schema = "drugs".into();
    let banner = ResultDisplay::new(result).render().banner;
    assert_eq!(banner.text, "This document is valid drugs JSON.");
    assert_eq!(banner.style, BannerStyle::Success);

    let banner = ResultDisplay::new(result_with(false, 1, 0)).render().banner;
    assert_eq!(banner.text, "This document is not valid plans JSON.");
    assert_eq!(banner.style, BannerStyle::Danger);
}

#[test]
fn no_result_renders_nothing() {
    assert!(render::render(None).is_none());
    assert!(AppShell::new().view().result.is_none());
}

#[test]
fn a_new_result_starts_collapsed() {
    let mut app = AppShell::new();
    app.settle(PanelId::Textarea, Ok(result_with(false, 25, 0)));
    assert!(app.toggle(ListKind::Error));
    assert!(app.view().result.unwrap().errors.unwrap().expanded);

    app.settle(PanelId::Textarea, Ok(result_with(false, 25, 0)));
    let errors = app.view().result.unwrap().errors.unwrap();
    assert!(!errors.expanded);
    assert_eq!(errors.items.len(), 10);
}

#[test]
fn toggle_without_result_is_ignored() {
    let mut app = AppShell::new();
    assert!(!app.toggle(ListKind::Error));
    assert!(app.view().result.is_none());
}
