
use cssift::OutputStyle;

test!(
    style_rule_compressed,
    ".mes_text, .other.mes_text { color: red; margin: 0; }",
    ".ils_mes_text,.other.ils_mes_text{color:red;margin:0}",
    cssift::Options::default().style(OutputStyle::Compressed)
);
test!(
    media_compressed,
    "@media (max-width: 600px) { .mes_text { font-size: 12px; } }",
    "@media (max-width: 600px){.ils_mes_text{font-size:12px}}",
    cssift::Options::default().style(OutputStyle::Compressed)
);
test!(
    important_compressed,
    ".mes_text { color: red !important; }",
    ".ils_mes_text{color:red!important}",
    cssift::Options::default().style(OutputStyle::Compressed)
);
test!(
    multiple_rules_compressed_have_no_separator,
    ".mes_text { a: b; } .mes_text.x { c: d; }",
    ".ils_mes_text{a:b}.ils_mes_text.x{c:d}",
    cssift::Options::default().style(OutputStyle::Compressed)
);
