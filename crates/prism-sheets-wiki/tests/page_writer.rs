//! Tests for the idempotent page writer and template store

use pretty_assertions::assert_eq;
use prism_sheets_wiki::{
    MemoryWiki, PageEdit, PageWriter, TemplateStore, WikiError, WriteMode, WriteOutcome,
};

fn edit<'a>(body: &'a str) -> PageEdit<'a> {
    PageEdit {
        title: "応援グッズ",
        body,
        sheet_label: "📕 応援グッズ",
        sheet_url: "https://example.org/edit#gid=1833623005",
        template: Some("応援グッズ"),
    }
}

#[test]
fn test_second_identical_write_is_skipped() {
    let mut wiki = MemoryWiki::new();
    let writer = PageWriter::new(WriteMode::Live);

    assert_eq!(writer.write(&mut wiki, &edit("本文")).unwrap(), WriteOutcome::Written);
    assert_eq!(writer.write(&mut wiki, &edit("本文")).unwrap(), WriteOutcome::Skipped);
    assert_eq!(wiki.writes().len(), 1);
}

#[test]
fn test_written_text_carries_footer_and_summary() {
    let mut wiki = MemoryWiki::new();
    PageWriter::default().write(&mut wiki, &edit("本文")).unwrap();

    let write = &wiki.writes()[0];
    assert_eq!(
        write.text,
        "本文\n\n{{bot/編集の注意|シート=https://example.org/edit#gid=1833623005|テンプレート=Template:bot/応援グッズ}}"
    );
    assert_eq!(write.summary, "bot: 📕 応援グッズ から更新");
}

#[test]
fn test_changed_body_is_written_again() {
    let mut wiki = MemoryWiki::new();
    let writer = PageWriter::new(WriteMode::Live);
    writer.write(&mut wiki, &edit("v1")).unwrap();
    assert_eq!(writer.write(&mut wiki, &edit("v2")).unwrap(), WriteOutcome::Written);
    assert!(wiki.page("応援グッズ").unwrap().starts_with("v2\n\n"));
}

#[test]
fn test_body_without_footer_counts_as_changed() {
    // A page holding only the body (e.g. edited by hand) is rewritten with the footer
    let mut wiki = MemoryWiki::new().with_page("応援グッズ", "本文");
    let outcome = PageWriter::default().write(&mut wiki, &edit("本文")).unwrap();
    assert_eq!(outcome, WriteOutcome::Written);
}

#[test]
fn test_preview_never_writes() {
    let final_text = edit("本文").final_text();
    let mut wiki = MemoryWiki::new().with_page("応援グッズ", final_text.clone());
    let writer = PageWriter::new(WriteMode::Preview);

    let outcome = writer.write(&mut wiki, &edit("本文")).unwrap();
    assert_eq!(outcome, WriteOutcome::Previewed(final_text));

    let outcome = writer.write(&mut wiki, &edit("別の本文")).unwrap();
    assert!(matches!(outcome, WriteOutcome::Previewed(_)));
    assert!(wiki.writes().is_empty());
}

#[test]
fn test_rejected_write_surfaces_error() {
    let mut wiki = MemoryWiki::new().reject_writes_to("応援グッズ");
    let err = PageWriter::default().write(&mut wiki, &edit("本文")).unwrap_err();
    assert!(matches!(err, WikiError::WriteRejected { title, .. } if title == "応援グッズ"));
}

#[test]
fn test_template_store_reads_bot_namespace() {
    let mut wiki = MemoryWiki::new().with_page("Template:bot/ファンレベル", "{{ パラメータ }}");
    let mut store = TemplateStore::new(&mut wiki);

    assert_eq!(store.load("ファンレベル").unwrap(), "{{ パラメータ }}");
    assert!(matches!(
        store.load("存在しない"),
        Err(WikiError::TemplateNotFound(name)) if name == "存在しない"
    ));
}
