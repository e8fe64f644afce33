
use macros::TestLogger;

#[test]
fn malformed_rule_is_reported_and_skipped() {
    let logger = TestLogger::default();
    let options = cssift::Options::default().logger(&logger);

    let css = cssift::from_string(".mes_text { color: red; } junk".to_string(), &options)
        .expect("failed to extract");

    assert_eq!(css, ".ils_mes_text {\n  color: red;\n}\n");
    assert_eq!(logger.warning_messages().len(), 1);
}

#[test]
fn parsing_continues_after_a_malformed_rule() {
    let logger = TestLogger::default();
    let options = cssift::Options::default().logger(&logger);

    // a block with no selector is skipped, and the rules after it still parse
    let css = cssift::from_string(
        "{ color: red; } .mes_text { color: blue; }".to_string(),
        &options,
    )
    .expect("failed to extract");

    assert_eq!(css, ".ils_mes_text {\n  color: blue;\n}\n");
    assert_eq!(logger.warning_messages().len(), 1);
}

#[test]
fn quiet_suppresses_warnings() {
    let logger = TestLogger::default();
    let options = cssift::Options::default().logger(&logger).quiet(true);

    let css = cssift::from_string(".mes_text { color: red; } junk".to_string(), &options)
        .expect("failed to extract");

    assert_eq!(css, ".ils_mes_text {\n  color: red;\n}\n");
    assert!(logger.warning_messages().is_empty());
}
