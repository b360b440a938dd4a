use markdown_html_engine::parsing::{convert_document, parse_blocks, snapshot};

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_headings() {
    assert_fixture("headings");
}

#[test]
fn fixture_code_fence() {
    assert_fixture("code_fence");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_mixed() {
    assert_fixture("mixed");
}

#[test]
fn fixture_mixed_outline() {
    let md = read_fixture("mixed");
    let outline = snapshot::normalize(&md).unwrap();
    insta::assert_snapshot!("mixed_outline", outline);
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);

    let blocks = parse_blocks(&md);
    snapshot::check_blocks(&md, &blocks);

    let html = convert_document(&md).unwrap().render().unwrap();
    insta::assert_snapshot!(name, html);
}

/// Code fences are raw zones: inline markup inside stays literal
#[test]
fn code_fence_suppresses_inline_parsing() {
    let md = "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```";
    let html = convert_document(md).unwrap().render().unwrap();

    assert_eq!(
        html,
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

/// A bad block anywhere fails the whole document
#[test]
fn malformed_inline_fails_whole_document() {
    let md = "# Good heading\n\n- fine item\n- `broken item";
    assert!(convert_document(md).is_err());
}
