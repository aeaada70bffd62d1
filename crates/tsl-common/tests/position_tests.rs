use super::*;

#[test]
fn test_line_map_simple() {
    let source = "line1\nline2\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(0, source), Position::new(0, 0));
    assert_eq!(map.offset_to_position(4, source), Position::new(0, 4));
    assert_eq!(map.offset_to_position(6, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(12, source), Position::new(2, 0));
}

#[test]
fn test_line_map_windows_and_lone_cr_line_endings() {
    let source = "a\r\nb\rc";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(3, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(5, source), Position::new(2, 0));
}

#[test]
fn test_columns_are_utf16_units() {
    // U+1F600 is 4 bytes in UTF-8 and 2 code units in UTF-16
    let source = "\u{1F600}x";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(4, source), Position::new(0, 2));
}

#[test]
fn test_span_to_range() {
    let source = "let a;\n// @ts-ignore\n";
    let map = LineMap::build(source);
    let range = map.span_to_range(Span::new(7, 20), source);

    assert_eq!(range.start, Position::new(1, 0));
    assert_eq!(range.end, Position::new(1, 13));
}

#[test]
fn test_unicode_line_separators_end_lines() {
    let source = "a\u{2028}b\u{2029}c";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(4, source), Position::new(1, 0));
    assert_eq!(map.offset_to_position(8, source), Position::new(2, 0));
}

#[test]
fn test_offset_past_end_clamps() {
    let source = "ab\ncd";
    let map = LineMap::build(source);

    assert_eq!(map.offset_to_position(100, source), Position::new(1, 2));
}

#[test]
fn test_trailing_newline_starts_empty_line() {
    let source = "x\n";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 2);
    assert_eq!(map.offset_to_position(2, source), Position::new(1, 0));
}
