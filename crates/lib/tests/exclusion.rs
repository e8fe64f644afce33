
// rule kinds other than style rules and @media never reach the output, even
// when their contents mention the target class

test!(
    font_face_is_dropped,
    "@font-face { font-family: mes_text; } .mes_text { color: red; }",
    ".ils_mes_text {\n  color: red;\n}\n"
);
test!(
    keyframes_are_dropped,
    "@keyframes mes_text_fade { from { opacity: 0; } to { opacity: 1; } }",
    ""
);
test!(
    import_is_dropped,
    "@import url(\"mes_text.css\"); .mes_text { color: red; }",
    ".ils_mes_text {\n  color: red;\n}\n"
);
test!(
    charset_is_dropped,
    "@charset \"utf-8\"; .mes_text { color: red; }",
    ".ils_mes_text {\n  color: red;\n}\n"
);
test!(
    supports_is_not_a_grouping_rule,
    "@supports (display: grid) { .mes_text { color: red; } }",
    ""
);
