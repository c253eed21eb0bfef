use super::*;
use crate::schedule::StageKind;

fn kinds(stages: &[Stage]) -> Vec<(StageKind, bool)> {
    stages.iter().map(|s| (s.kind, s.is_rinse)).collect()
}

// parse_config
#[test]
fn test_parse_empty() {
    assert!(parse_config("").unwrap().is_empty());
    assert!(parse_config("   ").unwrap().is_empty());
}

#[test]
fn test_parse_single_fixed() {
    let stages = parse_config("10").unwrap();
    assert_eq!(stages.len(), 1);
    assert_eq!(stages[0].kind, StageKind::Fixed { duration: 10 });
    assert_eq!(stages[0].original_text, "10");
    assert!(!stages[0].is_rinse);
}

#[test]
fn test_parse_fixed_sequence() {
    let stages = parse_config("10 -> 20").unwrap();
    assert_eq!(
        kinds(&stages),
        vec![
            (StageKind::Fixed { duration: 10 }, false),
            (StageKind::Fixed { duration: 20 }, false),
        ]
    );
}

#[test]
fn test_parse_range_then_fixed() {
    let stages = parse_config("25-30 -> 60").unwrap();
    assert_eq!(
        kinds(&stages),
        vec![
            (StageKind::Range { min: 25, max: 30 }, false),
            (StageKind::Fixed { duration: 60 }, false),
        ]
    );
    assert_eq!(stages[0].original_text, "25-30");
}

#[test]
fn test_parse_rinse_group() {
    let stages = parse_config("(3-5 -> 5-7) -> 10").unwrap();
    assert_eq!(
        kinds(&stages),
        vec![
            (StageKind::Range { min: 3, max: 5 }, true),
            (StageKind::Range { min: 5, max: 7 }, true),
            (StageKind::Fixed { duration: 10 }, false),
        ]
    );
    assert_eq!(stages[1].original_text, "5-7");
}

#[test]
fn test_parse_rinse_group_mid_sequence() {
    let stages = parse_config("5 -> (1 → 2) -> 8").unwrap();
    let rinse: Vec<bool> = stages.iter().map(|s| s.is_rinse).collect();
    assert_eq!(rinse, vec![false, true, true, false]);
}

#[test]
fn test_parse_glyph_separator() {
    let stages = parse_config("10 → 20→30").unwrap();
    assert_eq!(stages.len(), 3);
    assert_eq!(stages[2].kind, StageKind::Fixed { duration: 30 });
}

#[test]
fn test_parse_en_dash_range_keeps_original_text() {
    let stages = parse_config("25 – 30").unwrap();
    assert_eq!(stages[0].kind, StageKind::Range { min: 25, max: 30 });
    assert_eq!(stages[0].original_text, "25 – 30");
}

#[test]
fn test_parse_drops_empty_tokens() {
    let stages = parse_config("10 -> -> 20").unwrap();
    assert_eq!(stages.len(), 2);

    let stages = parse_config(" -> 10 -> ").unwrap();
    assert_eq!(stages.len(), 1);
}

#[test]
fn test_parse_invalid_token() {
    let err = parse_config("abc").unwrap_err();
    assert_eq!(err.offending_token, "abc");
    assert_eq!(err.to_string(), "invalid stage format: abc");
}

#[test]
fn test_parse_is_all_or_nothing() {
    let err = parse_config("10 -> 20 -> 3x").unwrap_err();
    assert_eq!(err.offending_token, "3x");
}

#[test]
fn test_parse_invalid_part_inside_group() {
    let err = parse_config("(3-5 -> abc) -> 10").unwrap_err();
    assert_eq!(err.offending_token, "abc");

    let err = parse_config("() -> 10").unwrap_err();
    assert_eq!(err.offending_token, "()");
}

#[test]
fn test_parse_rejects_inverted_range() {
    let err = parse_config("10 -> 5-2").unwrap_err();
    assert_eq!(err.offending_token, "5-2");

    let stages = parse_config("4-4").unwrap();
    assert_eq!(stages[0].kind, StageKind::Range { min: 4, max: 4 });
}

#[test]
fn test_parse_unbalanced_parens_fail_as_token() {
    let err = parse_config("(3-5 -> 10").unwrap_err();
    assert_eq!(err.offending_token, "(3-5 -> 10");
}

#[test]
fn test_parse_rejects_overflow() {
    let err = parse_config("99999999999").unwrap_err();
    assert_eq!(err.offending_token, "99999999999");
}

#[test]
fn test_parse_rejects_zero_seconds() {
    assert_eq!(parse_config("10 -> 0").unwrap_err().offending_token, "0");
    assert_eq!(parse_config("0-0").unwrap_err().offending_token, "0-0");
    assert_eq!(parse_config("(0-5)").unwrap_err().offending_token, "0-5");

    let stages = parse_config("05 -> 1-00010").unwrap();
    assert_eq!(stages[0].kind, StageKind::Fixed { duration: 5 });
    assert_eq!(stages[1].kind, StageKind::Range { min: 1, max: 10 });
}

#[test]
fn test_parse_is_repeatable() {
    let text = "(3-5 -> 5-7) -> 10 -> 10-12 -> 120-180";
    assert_eq!(parse_config(text).unwrap(), parse_config(text).unwrap());
}

// parse_part
#[test]
fn test_parse_part_forms() {
    assert_eq!(
        parse_part("7").unwrap().kind,
        StageKind::Fixed { duration: 7 }
    );
    assert_eq!(
        parse_part("7 -9").unwrap().kind,
        StageKind::Range { min: 7, max: 9 }
    );
    assert!(parse_part("-9").is_err());
    assert!(parse_part("7-").is_err());
    assert!(parse_part("7--9").is_err());
    assert!(parse_part("+7").is_err());
}

// Tokens
#[test]
fn test_tokens_respect_nesting() {
    let tokens: Vec<&str> = Tokens::new("a -> (b -> c) → d").collect();
    assert_eq!(tokens, vec!["a ", " (b -> c) ", " d"]);
}

#[test]
fn test_tokens_always_yield_one() {
    let tokens: Vec<&str> = Tokens::new("").collect();
    assert_eq!(tokens, vec![""]);
}
