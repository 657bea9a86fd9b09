use plaintext_extractor::{plain_text, Extractor, HtmlExtractor};

fn extract(input: &str) -> String {
    match plain_text(input) {
        Ok(text) => text,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_handles_basic_cases() {
    let tests = [
        ("a<br>b", "a\nb"),
        ("a<br><h1>b</h1>", "a\nb\n"),
        (r#"<a href="https://example.com">link</a>"#, "link"),
        (
            r#"<div>This is a <a href="https://example.com">link</a></div>"#,
            "This is a link\n",
        ),
        (
            "<div><h1>Heading 1</h1><h2>Heading 2</h2><ul><li>Item 1</li><li>Item 2</li></ul></div>",
            "Heading 1\nHeading 2\n- Item 1\n- Item 2\n",
        ),
        (
            "<div><h1>Heading 1</h1><h2>Heading 2</h2><ol><li>Item 1</li><li>Item 2</li></ol></div>",
            "Heading 1\nHeading 2\n1. Item 1\n2. Item 2\n",
        ),
        ("<p><span>a</span><span>b</span></p> c", "ab\nc"),
        ("a\n \nb", "a\nb"),
        (
            "Nested <i>and maybe italic <b>and bold</b> and not</i>.",
            "Nested and maybe italic and bold and not.",
        ),
    ];
    for (input, expected) in tests {
        assert_eq!(extract(input), expected, "input: {input}");
    }
}

#[test]
fn br_emits_single_newline_without_descent() {
    assert_eq!(extract("A<br>B"), "A\nB");
}

#[test]
fn block_tags_contribute_exactly_one_trailing_break() {
    assert_eq!(extract("<h1>A</h1><h2>B</h2>"), "A\nB\n");
    // Nesting a block inside another block must not duplicate breaks.
    assert_eq!(extract("<div><p>A</p></div>"), "A\n");
}

#[test]
fn nested_ordered_lists_restart_numbering() {
    let input = "<ol><li>a\n<ol><li>x</li><li>y</li></ol></li><li>b</li></ol>";
    assert_eq!(extract(input), "1. a\n1. x\n2. y\n2. b\n");
}

#[test]
fn list_item_leading_whitespace_is_stripped() {
    assert_eq!(extract("<ul><li>\n    text</li></ul>"), "- text\n");
    // Only the first text child is affected; inline whitespace later in the
    // item survives as-is.
    assert_eq!(
        extract("<ul><li>\n    a <b>b</b>  c</li></ul>"),
        "- a b  c\n"
    );
}

#[test]
fn anchor_extracts_text_only() {
    assert_eq!(
        extract(r#"<a href="https://example.com/page?q=1">text</a>"#),
        "text"
    );
}

#[test]
fn list_item_outside_any_list_gets_no_marker() {
    assert_eq!(extract("<li>solo</li>"), "solo\n");
}

#[test]
fn empty_input_yields_empty_output() {
    assert_eq!(extract(""), "");
    assert_eq!(extract("   \n  "), "");
}

#[test]
fn additional_block_tags_are_honored() {
    let extractor = HtmlExtractor::with_block_tags(["span"]);
    match extractor.plain_text("<span>a</span><span>b</span>") {
        Ok(text) => assert_eq!(text, "a\nb\n"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extractor_instance_is_reusable() {
    let extractor = HtmlExtractor::new();
    for _ in 0..3 {
        match extractor.plain_text("<p>same</p>") {
            Ok(text) => assert_eq!(text, "same\n"),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }
}

const RAW_HTML: &str = r#"<p>This is a <b>bold</b> text inside a paragraph.</p>
<p>This is an <i>italicized</i> text inside another paragraph.</p>
<p>
    This is a <b><i>bold and italicized</i></b> text inside a paragraph.
</p>
<p>
    Nested <i> and maybe italic <b>and bold</b> and not</i>.
</p>

<ul>
    <li>This is a <b>bold</b> list item.</li>
    <li>This is an <i>italicized</i> list item.</li>
    <li>
        This list item contains both <b><i>bold and italicized</i></b> text.
    </li>
    <li>
        Another example with nested tags: <b>This is <i>bold and italic</i> text</b>.
    </li>
    <li>
        This is an example of a list item
        with a linebreak
    </li>
    <li>
        And what happens if another item <b>follows</b> the linebreak
    </li>
</ul>

<p>
  Testing <i>hyperlinks</i> <a href="https://www.google.com">click <b>me <i>quickly!</i> or else</b> go boom</a> inside a <b>paragraph with<i> complex </i>formatting</b>.
</p>

<p>
  <b>Testing hyperlinks <a href="https://www.example.org"><i>inheritance</i> stuff</a> that inherit outer tags</b>
</p>
"#;

const RAW_HTML_PLAIN: &str = "This is a bold text inside a paragraph.
This is an italicized text inside another paragraph.
This is a bold and italicized text inside a paragraph.
Nested  and maybe italic and bold and not.
- This is a bold list item.
- This is an italicized list item.
- This list item contains both bold and italicized text.
- Another example with nested tags: This is bold and italic text.
- This is an example of a list item
with a linebreak
- And what happens if another item follows the linebreak
Testing hyperlinks click me quickly! or else go boom inside a paragraph with complex formatting.
Testing hyperlinks inheritance stuff that inherit outer tags
";

#[test]
fn extract_handles_large_mixed_document() {
    assert_eq!(extract(RAW_HTML), RAW_HTML_PLAIN);
}
