use super::*;
use tsl_common::Span;

fn line(value: &str) -> CommentToken {
    CommentToken::line(value, Span::new(0, value.len() as u32 + 2))
}

fn block(value: &str) -> CommentToken {
    CommentToken::block(value, Span::new(0, value.len() as u32 + 4))
}

#[test]
fn test_line_directives() {
    let cases = [
        (" @ts-expect-error", DirectiveKind::ExpectError, ""),
        (" @ts-ignore", DirectiveKind::Ignore, ""),
        (" @ts-nocheck", DirectiveKind::NoCheck, ""),
        (" @ts-check", DirectiveKind::Check, ""),
        ("@ts-ignore: legacy api", DirectiveKind::Ignore, ": legacy api"),
        // `/// @ts-expect-error` has a value of `/ @ts-expect-error`
        ("/ @ts-expect-error reason", DirectiveKind::ExpectError, " reason"),
        ("\t @ts-check  ", DirectiveKind::Check, "  "),
    ];

    for (value, directive, description) in cases {
        let comment = line(value);
        let matched = match_directive(&comment).unwrap_or_else(|| panic!("no match: {value:?}"));
        assert_eq!(matched.directive, directive, "{value:?}");
        assert_eq!(matched.description, description, "{value:?}");
    }
}

#[test]
fn test_block_directives() {
    let cases = [
        (" @ts-ignore ", DirectiveKind::Ignore, " "),
        ("* @ts-nocheck ", DirectiveKind::NoCheck, " "),
        ("\n * @ts-expect-error why\n ", DirectiveKind::ExpectError, " why"),
        ("/ @ts-check", DirectiveKind::Check, ""),
    ];

    for (value, directive, description) in cases {
        let comment = block(value);
        let matched = match_directive(&comment).unwrap_or_else(|| panic!("no match: {value:?}"));
        assert_eq!(matched.directive, directive, "{value:?}");
        assert_eq!(matched.description, description, "{value:?}");
    }
}

#[test]
fn test_directive_must_start_the_comment() {
    for value in [
        " some text @ts-ignore",
        " eslint-disable-next-line @ts-ignore",
        " @ts-nonexistent",
        " ts-ignore",
        " @TS-IGNORE",
    ] {
        assert!(match_directive(&line(value)).is_none(), "{value:?}");
        assert!(match_directive(&block(value)).is_none(), "{value:?}");
    }
}

#[test]
fn test_line_form_does_not_accept_stars() {
    assert!(match_directive(&line("* @ts-ignore")).is_none());
    assert!(match_directive(&block("* @ts-ignore")).is_some());
}

#[test]
fn test_description_stops_at_line_break() {
    let comment = block(" @ts-expect-error first line\r\n second line ");
    let matched = match_directive(&comment).unwrap();
    assert_eq!(matched.description, " first line");
}

#[test]
fn test_keyword_prefixes() {
    // `check` is tried before `nocheck`, but they do not overlap
    let comment = line(" @ts-nocheck");
    let matched = match_directive(&comment).unwrap();
    assert_eq!(matched.directive, DirectiveKind::NoCheck);

    // Trailing text directly after a keyword becomes the description
    let comment = line(" @ts-checked");
    let matched = match_directive(&comment).unwrap();
    assert_eq!(matched.directive, DirectiveKind::Check);
    assert_eq!(matched.description, "ed");
}

#[test]
fn test_directive_names() {
    for kind in DirectiveKind::ALL {
        assert_eq!(DirectiveKind::from_name(kind.name()), Some(kind));
        assert_eq!(kind.option_key(), format!("ts-{}", kind.name()));
    }
    assert_eq!(DirectiveKind::Ignore.to_string(), "@ts-ignore");
}
