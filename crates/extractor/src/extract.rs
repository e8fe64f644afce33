use crate::{
    ast::{CssRule, MediaRule, StyleRule, Stylesheet},
    Options,
};

/// Filter and rewrite a comma-separated selector list.
///
/// Splits `selector` on commas, trims each part, keeps only the parts that
/// contain `target`, rewrites every occurrence of `target` to `derived`
/// within the kept parts, and rejoins them with `", "`. An empty return
/// value means no part qualified and the owning rule should be dropped.
///
/// Matching is plain substring containment, not CSS-token aware: a longer
/// class name that happens to contain `target` (e.g. `.mes_text_extra` when
/// the target is `.mes_text`) is matched and rewritten as well. A `derived`
/// token that itself contains `target` as a substring is unsupported input;
/// the rewrite still terminates, but applying it twice no longer yields the
/// same string.
///
/// ```
/// use cssift_extractor::transform_selector;
///
/// assert_eq!(
///     transform_selector(".mes_text, .foo", ".mes_text", ".ils_mes_text"),
///     ".ils_mes_text"
/// );
/// assert_eq!(transform_selector(".foo, .bar", ".mes_text", ".ils_mes_text"), "");
/// ```
pub fn transform_selector(selector: &str, target: &str, derived: &str) -> String {
    selector
        .split(',')
        .map(str::trim)
        .filter(|part| part.contains(target))
        .map(|part| part.replace(target, derived))
        .collect::<Vec<String>>()
        .join(", ")
}

/// Walk the parsed stylesheet once and collect the filtered, rewritten
/// subset into a fresh output stylesheet, preserving source order.
pub(crate) fn extract_stylesheet(stylesheet: &Stylesheet, options: &Options) -> Stylesheet {
    let mut output = Stylesheet::new();

    for rule in &stylesheet.rules {
        match rule {
            CssRule::Style(style) => {
                if let Some(rewritten) = rewrite_style_rule(style, options) {
                    output.rules.push(CssRule::Style(rewritten));
                }
            }
            CssRule::Media(media) => {
                if let Some(rewritten) = rewrite_media_rule(media, options) {
                    output.rules.push(CssRule::Media(rewritten));
                }
            }
            CssRule::Other(..) => {}
        }
    }

    output
}

fn rewrite_style_rule(rule: &StyleRule, options: &Options) -> Option<StyleRule> {
    let selector =
        transform_selector(&rule.selector, &options.target_class, &options.derived_class);

    if selector.is_empty() {
        return None;
    }

    Some(StyleRule {
        selector,
        declarations: rule.declarations.clone(),
    })
}

/// Grouping rules are recursed into exactly one level: style rules directly
/// inside the block are filtered like top-level ones, while nested grouping
/// rules and other at-rules are ignored even if they would qualify.
fn rewrite_media_rule(rule: &MediaRule, options: &Options) -> Option<MediaRule> {
    let mut rules = Vec::new();

    for nested in &rule.rules {
        match nested {
            CssRule::Style(style) => {
                if let Some(rewritten) = rewrite_style_rule(style, options) {
                    rules.push(CssRule::Style(rewritten));
                }
            }
            CssRule::Media(..) | CssRule::Other(..) => {}
        }
    }

    if rules.is_empty() {
        return None;
    }

    Some(MediaRule {
        condition: rule.condition.clone(),
        rules,
    })
}
