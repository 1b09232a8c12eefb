use storage::{ProgressRecord, ProgressRepository, Storage};

use super::test_harness::{setup_view_harness, setup_view_harness_with_storage};

const TWO_ESSAYS: &str = r#"[
    {"title": "A", "url": "http://a.example/"},
    {"title": "B", "url": "http://b.example/"}
]"#;

#[tokio::test(flavor = "current_thread")]
async fn essay_list_smoke_renders_fresh_rows() {
    let mut harness = setup_view_harness(TWO_ESSAYS);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(">A<"), "missing first title in {html}");
    assert!(html.contains(">B<"), "missing second title in {html}");
    assert!(
        html.contains("http://a.example/"),
        "missing link href in {html}"
    );
    assert_eq!(
        html.matches("status-dot").count(),
        2,
        "expected 2 indicators in {html}"
    );
    assert!(
        !html.contains("is-read"),
        "fresh rows must be unread in {html}"
    );
    assert!(
        !html.contains("essay-item open"),
        "fresh panels must be collapsed in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn essay_list_smoke_reflects_persisted_progress() {
    let storage = Storage::in_memory();
    storage
        .progress
        .save(&ProgressRecord {
            read: vec![true, false],
            notes: vec![String::new(), "hello".to_string()],
        })
        .await
        .expect("seed progress");

    let mut harness = setup_view_harness_with_storage(TWO_ESSAYS, storage);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert_eq!(
        html.matches("is-read").count(),
        1,
        "expected exactly one read indicator in {html}"
    );
    assert!(html.contains("hello"), "missing persisted note in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn essay_list_smoke_discards_stale_progress() {
    let storage = Storage::in_memory();
    storage
        .progress
        .save(&ProgressRecord {
            read: vec![true, true, true],
            notes: vec!["stale note".into(), "stale note".into(), "stale note".into()],
        })
        .await
        .expect("seed stale progress");

    // Catalog shrank to 2 entries since that blob was written.
    let mut harness = setup_view_harness_with_storage(TWO_ESSAYS, storage);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        !html.contains("is-read"),
        "stale progress must be discarded in {html}"
    );
    assert!(!html.contains("stale note"), "stale note leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn essay_list_smoke_renders_parse_error_instead_of_rows() {
    let mut harness = setup_view_harness("{\"title\": \"not a list\"}");
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("not a valid essay list"),
        "missing error message in {html}"
    );
    assert!(
        !html.contains("essay-item"),
        "no rows may render on error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn essay_list_smoke_renders_invalid_entry_error() {
    let mut harness = setup_view_harness(
        r#"[{"title": "", "url": "http://a.example/"}]"#,
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("catalog entry 0 is invalid"),
        "missing validation message in {html}"
    );
    assert!(!html.contains("essay-item"), "no rows may render in {html}");
}
