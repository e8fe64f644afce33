use cssift::transform_selector;

#[test]
fn keeps_only_matching_parts() {
    assert_eq!(
        transform_selector(".mes_text, .foo", ".mes_text", ".ils_mes_text"),
        ".ils_mes_text"
    );
}

#[test]
fn empty_when_no_part_matches() {
    assert_eq!(
        transform_selector(".foo, .bar", ".mes_text", ".ils_mes_text"),
        ""
    );
}

#[test]
fn rewrites_every_occurrence_within_a_part() {
    assert_eq!(
        transform_selector(
            ".mes_text .mes_text::before",
            ".mes_text",
            ".ils_mes_text"
        ),
        ".ils_mes_text .ils_mes_text::before"
    );
}

#[test]
fn trims_whitespace_around_parts() {
    assert_eq!(
        transform_selector(
            "  .mes_text ,\t.foo .mes_text  ",
            ".mes_text",
            ".ils_mes_text"
        ),
        ".ils_mes_text, .foo .ils_mes_text"
    );
}

#[test]
fn retained_parts_are_rejoined_with_comma_space() {
    assert_eq!(
        transform_selector(
            ".mes_text,.bar,.mes_text.x",
            ".mes_text",
            ".ils_mes_text"
        ),
        ".ils_mes_text, .ils_mes_text.x"
    );
}

// the derived token does not contain the target token, so the rewrite never
// leaves anything for a second pass to match
#[test]
fn output_never_contains_the_target_token() {
    let once = transform_selector(".mes_text, .foo .mes_text", ".mes_text", ".ils_mes_text");
    assert!(!once.contains(".mes_text"));
    assert_eq!(
        transform_selector(&once, ".mes_text", ".ils_mes_text"),
        ""
    );
}

// substring containment is the documented match semantics: a longer class
// name containing the target token is rewritten as well
#[test]
fn longer_class_containing_target_is_rewritten() {
    assert_eq!(
        transform_selector(".mes_text_extra", ".mes_text", ".ils_mes_text"),
        ".ils_mes_text_extra"
    );
}

#[test]
fn arbitrary_tokens_work() {
    assert_eq!(
        transform_selector(".btn-primary, .card", ".btn", ".button"),
        ".button-primary"
    );
}
