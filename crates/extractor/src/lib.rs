/*!
This crate extracts the style rules for a single CSS class from a stylesheet
and renames the class in every surviving selector.

Style rules whose selector list references the target class token survive
with the non-matching selector parts dropped and every occurrence of the
token rewritten to the derived token. `@media` blocks are recursed into
exactly one level, and survive only when at least one directly nested style
rule does. Every other rule is omitted from the output.

Matching is plain substring containment rather than CSS-token matching, so a
class name that merely contains the target token is rewritten as well.

## Use as library
```
# use cssift_extractor as cssift;
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
#![allow(
    clippy::use_self,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    unknown_lints
)]

use std::path::Path;

use serializer::Serializer;

pub use crate::error::{ExtractError as Error, ExtractResult as Result};
pub use crate::extract::transform_selector;
pub use crate::fs::{Fs, NullFs, StdFs};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::{
    Options, OutputStyle, DEFAULT_DERIVED_CLASS, DEFAULT_TARGET_CLASS,
};

pub mod css_ast {
    pub use crate::ast::*;
}

pub use cssparser;

mod ast;
mod error;
mod extract;
mod fs;
mod logger;
mod options;
mod parse;
mod serializer;

/// Parse CSS source into a typed rule sequence without extracting anything
///
/// Malformed rules are skipped and reported through the configured
/// [`Logger`] unless [`Options::quiet`] is set.
pub fn parse_stylesheet(input: &str, options: &Options) -> css_ast::Stylesheet {
    parse::parse_stylesheet_source(input, options)
}

fn extract_source(input: String, options: &Options) -> Result<String> {
    let stylesheet = parse::parse_stylesheet_source(&input, options);
    let extracted = extract::extract_stylesheet(&stylesheet, options);

    let mut serializer = Serializer::new(options);
    serializer.visit_stylesheet(&extracted);

    Ok(serializer.finish())
}

/// Extract the configured class's rules from a stylesheet on disk
///
/// n.b. `cssift` does not currently support files or paths that are not
/// valid UTF-8
///
/// ```no_run
/// # use cssift_extractor as cssift;
/// fn main() -> Result<(), Box<cssift::Error>> {
///     let css = cssift::from_path("style.css", &cssift::Options::default())?;
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_path<P: AsRef<Path>>(p: P, options: &Options) -> Result<String> {
    extract_source(String::from_utf8(options.fs.read(p.as_ref())?)?, options)
}

/// Extract the configured class's rules from a string
///
/// ```
/// # use cssift_extractor as cssift;
/// fn main() -> Result<(), Box<cssift::Error>> {
///     let css = cssift::from_string(
///         ".a {}".to_string(),
///         &cssift::Options::default(),
///     )?;
///     assert_eq!(css, "");
///     Ok(())
/// }
/// ```
#[inline]
pub fn from_string<S: Into<String>>(input: S, options: &Options) -> Result<String> {
    extract_source(input.into(), options)
}
