use logfacade_core::{format, try_format, ErrorKind};
use proptest::prelude::*;

#[test]
fn test_round_trip_two_args() {
    assert_eq!(format("testing {0} {1}", &[&"X", &"Y"]), "testing X Y");
}

#[test]
fn test_zero_args_keeps_placeholder_literal() {
    let text = format("{0}", &[]);
    assert!(text.contains("{0}"));
    assert!(text.contains("unresolved placeholders: 1"));
}

#[test]
fn test_try_format_reports_mismatch() {
    let err = try_format("{0} {1}", &[&1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FormatMismatch);
}

#[test]
fn test_surplus_args_ignored() {
    assert_eq!(try_format("only {0}", &[&"a", &"b", &"c"]).unwrap(), "only a");
}

#[test]
fn test_mixed_display_types() {
    assert_eq!(
        format("{0} items at {1} in {2}", &[&3, &2.5, &'x']),
        "3 items at 2.5 in x"
    );
}

#[test]
fn test_multibyte_text_around_placeholders() {
    assert_eq!(format("é{0}ü{1}ß", &[&"→", &"✓"]), "é→ü✓ß");
}

proptest! {
    #[test]
    fn prop_brace_free_templates_pass_through(template in "[^{}]*") {
        prop_assert_eq!(format(&template, &[]), template);
    }

    #[test]
    fn prop_arguments_substitute_verbatim(a in "[^{}]*", b in "[^{}]*") {
        let expected = format!("<{}|{}>", a, b);
        prop_assert_eq!(try_format("<{0}|{1}>", &[&a, &b]).unwrap(), expected);
    }

    #[test]
    fn prop_never_panics(template in ".*", n in 0usize..4) {
        let args: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        let refs: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        let _ = format(&template, &refs);
    }

    #[test]
    fn prop_out_of_range_is_left_literal(index in 1usize..50) {
        let template = format!("v={{{}}}", index);
        let err = try_format(&template, &[&"zero"]).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::FormatMismatch);
        let text = format(&template, &[&"zero"]);
        prop_assert!(text.starts_with(&template));
    }
}
