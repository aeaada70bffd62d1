use super::*;

#[test]
fn test_scan_line_and_block_comments() {
    let source = "// first\nlet a = 1; /* second */\n";
    let comments = scan_comments(source);

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].kind, CommentKind::Line);
    assert_eq!(comments[0].value, " first");
    assert_eq!(comments[0].span.text(source), "// first");
    assert_eq!(comments[1].kind, CommentKind::Block);
    assert_eq!(comments[1].value, " second ");
    assert_eq!(comments[1].span.text(source), "/* second */");
}

#[test]
fn test_line_comment_stops_before_crlf() {
    let source = "// @ts-ignore\r\nfoo();";
    let comments = scan_comments(source);

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].value, " @ts-ignore");
    assert_eq!(comments[0].span, Span::new(0, 13));
}

#[test]
fn test_line_comment_stops_at_unicode_line_separators() {
    for separator in ['\u{2028}', '\u{2029}'] {
        let source = format!("// @ts-ignore{separator}foo();");
        let comments = scan_comments(&source);

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].value, " @ts-ignore");
        assert_eq!(comments[0].span, Span::new(0, 13));
    }
}

#[test]
fn test_line_comment_keeps_other_e2_characters() {
    // U+2026 shares the E2 80 lead bytes with the separators
    let source = "// wait\u{2026} done\nx";
    let comments = scan_comments(source);

    assert_eq!(comments[0].value, " wait\u{2026} done");
}

#[test]
fn test_offsets_saturate_past_u32() {
    assert_eq!(to_offset(42), 42);
    assert_eq!(to_offset(usize::MAX), u32::MAX);
}

#[test]
fn test_multiline_block_comment() {
    let source = "/**\n * @ts-nocheck\n */";
    let comments = scan_comments(source);

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].value, "*\n * @ts-nocheck\n ");
    assert_eq!(comments[0].span.len() as usize, source.len());
}

#[test]
fn test_unclosed_block_comment_runs_to_end() {
    let source = "a; /* dangling";
    let comments = scan_comments(source);

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].value, " dangling");
    assert_eq!(comments[0].span, Span::new(3, 14));
}

#[test]
fn test_string_literals_are_not_comments() {
    let source = r#"const url = "http://example.com"; const t = `/* x */`; const s = 'a\'//'; // real"#;
    let comments = scan_comments(source);

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].value, " real");
}

#[test]
fn test_render_preserves_delimiters() {
    let line = CommentToken::line(" @ts-ignore", Span::new(0, 13));
    let block = CommentToken::block(" @ts-ignore ", Span::new(0, 16));

    assert_eq!(line.render(" x"), "// x");
    assert_eq!(block.render(" x "), "/* x */");
}
