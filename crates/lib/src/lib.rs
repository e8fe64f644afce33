/*!
This crate extracts the style rules for a single CSS class from a stylesheet
and renames the class in every surviving selector.

Style rules whose selector list references the target class token (by
default `.mes_text`) survive with the non-matching selector parts dropped
and every occurrence of the token rewritten to the derived token (by
default `.ils_mes_text`). `@media` blocks are recursed into exactly one
level, and survive only when at least one directly nested style rule does.
Every other rule is omitted from the output.

## Use as library
```
fn main() -> Result<(), Box<cssift::Error>> {
    let css = cssift::from_string(
        ".mes_text, .foo { color: red; }".to_owned(),
        &cssift::Options::default(),
    )?;
    assert_eq!(css, ".ils_mes_text {\n  color: red;\n}\n");
    Ok(())
}
```

## Use as binary
```bash
cargo install cssift
cssift input.css extracted.css
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(clippy::multiple_crate_versions, unknown_lints)]

pub use cssift_extractor::*;
