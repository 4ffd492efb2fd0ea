//! Text rendering snapshots under `tests/golden/expected`.

mod common;

use std::fs;
use std::path::PathBuf;

use coverage_validator_client::app::AppShell;
use coverage_validator_client::protocol::Frame;
use coverage_validator_client::render::{ListKind, ResultDisplay};

use common::result_with;

fn read_expected(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden/expected")
        .join(name);
    fs::read_to_string(path)
        .expect("expected file missing")
        .trim_end()
        .to_string()
}

#[test]
fn golden_initial_view() {
    let text = Frame::View(AppShell::new().view()).to_string();
    assert_eq!(text.trim_end(), read_expected("initial_view.txt"));
}

#[test]
fn golden_collapsed_result() {
    let display = ResultDisplay::new(result_with(false, 12, 1));
    assert_eq!(
        display.render().to_string().trim_end(),
        read_expected("result_collapsed.txt")
    );
}

#[test]
fn golden_expanded_result() {
    let mut display = ResultDisplay::new(result_with(false, 12, 1));
    display.toggle(ListKind::Error);
    assert_eq!(
        display.render().to_string().trim_end(),
        read_expected("result_expanded.txt")
    );
}

#[test]
fn rendering_is_deterministic() {
    let display = ResultDisplay::new(result_with(false, 40, 15));
    let a = serde_json::to_string(&display.render()).unwrap();
    let b = serde_json::to_string(&display.clone().render()).unwrap();
    assert_eq!(a, b, "identical results must render byte-identically");
}
