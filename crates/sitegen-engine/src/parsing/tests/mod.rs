//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and their expected renders (.html) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::{
    html::HtmlError,
    parsing::{ConversionError, blocks::markdown_to_blocks, markdown_to_html_node},
    render,
};

// Fixture-based tests

#[test]
fn fixture_all_blocks() {
    assert_fixture("all_blocks");
}

#[test]
fn fixture_degraded_structures() {
    assert_fixture("degraded_structures");
}

#[test]
fn fixture_mixed_inline() {
    assert_fixture("mixed_inline");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    assert_eq!(render(&md).unwrap(), expected.trim_end());
}

// Whole-document renders

#[test]
fn heading_and_paragraph() {
    insta::assert_snapshot!(
        render("# Title\n\nSome **bold** text").unwrap(),
        @"<div><h1>Title</h1><p>Some <b>bold</b> text</p></div>"
    );
}

#[test]
fn quote_lines_join() {
    insta::assert_snapshot!(
        render("> line one\n> line two").unwrap(),
        @"<div><blockquote>line one line two</blockquote></div>"
    );
}

#[test]
fn unordered_list() {
    insta::assert_snapshot!(
        render("* a\n* b").unwrap(),
        @"<div><ul><li>a</li><li>b</li></ul></div>"
    );
}

#[test]
fn paragraphs() {
    let md = "\nThis is **bolded** paragraph\ntext in a p\ntag here\n\nThis is another paragraph with *italic* text and `code` here\n\n";
    insta::assert_snapshot!(
        render(md).unwrap(),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn headings_between_paragraphs() {
    let md = "\n# this is an h1\n\nthis is paragraph text\n\n## this is an h2\n";
    insta::assert_snapshot!(
        render(md).unwrap(),
        @"<div><h1>this is an h1</h1><p>this is paragraph text</p><h2>this is an h2</h2></div>"
    );
}

#[test]
fn blockquote_then_paragraph() {
    let md = "\n> This is a\n> blockquote block\n\nthis is paragraph text\n\n";
    insta::assert_snapshot!(
        render(md).unwrap(),
        @"<div><blockquote>This is a blockquote block</blockquote><p>this is paragraph text</p></div>"
    );
}

/// Items keep everything after the first three characters, so a two-digit
/// marker leaves its space behind.
#[test]
fn ordered_list_with_ten_items() {
    let md = (1..=10)
        .map(|n| format!("{n}. t{n}"))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(
        render(&md).unwrap(),
        @"<div><ol><li>t1</li><li>t2</li><li>t3</li><li>t4</li><li>t5</li><li>t6</li><li>t7</li><li>t8</li><li>t9</li><li> t10</li></ol></div>"
    );
}

// Document-level properties

/// Empty input still produces the root `div`.
#[test]
fn empty_document() {
    assert!(markdown_to_blocks("").is_empty());
    assert_eq!(render("").unwrap(), "<div></div>");
}

#[test]
fn root_is_always_a_div_parent() {
    let root = markdown_to_html_node("one\n\ntwo\n\n# three").unwrap();
    let parent = root.as_parent().expect("root should be a parent");
    assert_eq!(parent.tag(), "div");
    assert_eq!(parent.children().len(), 3);
}

/// A single failing block fails the whole document; there is no partial output.
#[test]
fn failing_block_fails_document() {
    let md = "fine paragraph\n\nlink with [](no-text)";
    assert_eq!(
        render(md),
        Err(ConversionError::Html(HtmlError::InvalidLeafConstruction))
    );
}

#[test]
fn independent_documents_render_concurrently() {
    let docs = ["# a", "* b\n* c", "> d", "1. e\n2. f"];
    let expected: Vec<_> = docs.iter().map(|d| render(d).unwrap()).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = docs.iter().map(|d| s.spawn(move || render(d))).collect();
        for (handle, want) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap().unwrap(), want);
        }
    });
}
