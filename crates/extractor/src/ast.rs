/// An ordered sequence of top-level CSS rules.
///
/// The input stylesheet is read-only; extraction builds a second, initially
/// empty `Stylesheet` and appends newly constructed rules to it.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    pub rules: Vec<CssRule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }
}

/// A single CSS rule.
///
/// This is a closed set: every traversal matches exhaustively, so adding a
/// new rule kind is a compile-time-visible change.
#[derive(Debug, Clone)]
pub enum CssRule {
    Style(StyleRule),
    Media(MediaRule),
    Other(OtherRule),
}

/// A selector list and its declaration block.
///
/// The selector is kept as the raw source text of the prelude, and the
/// declaration values are raw source slices. Neither is interpreted beyond
/// the substring matching performed during extraction.
#[derive(Debug, Clone)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// An `@media` grouping rule: a verbatim condition and the rules nested
/// under it.
///
/// The parser nests these arbitrarily deep; extraction only ever reads one
/// level.
#[derive(Debug, Clone)]
pub struct MediaRule {
    pub condition: String,
    pub rules: Vec<CssRule>,
}

/// Any at-rule this tool does not handle (`@font-face`, `@keyframes`,
/// `@import`, ...). Only the at-keyword is retained; the rule's contents are
/// discarded during parsing and the rule is never copied to the output.
#[derive(Debug, Clone)]
pub struct OtherRule {
    pub name: String,
}

/// A single `name: value` declaration.
///
/// `value` is the raw source slice between the colon and the terminating
/// semicolon, with any `!important` split off into the flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
    pub important: bool,
}
