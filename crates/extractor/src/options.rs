use crate::{Fs, Logger, StdFs, StdLogger};

/// The class selector token searched for when no other target is configured.
pub const DEFAULT_TARGET_CLASS: &str = ".mes_text";

/// The replacement token used when no other derived class is configured.
pub const DEFAULT_DERIVED_CLASS: &str = ".ils_mes_text";

/// Configuration for an extraction run
///
/// The simplest usage is `Options::default()`; a builder pattern is also
/// exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) fs: &'a dyn Fs,
    pub(crate) logger: &'a dyn Logger,
    pub(crate) style: OutputStyle,
    pub(crate) quiet: bool,
    pub(crate) target_class: String,
    pub(crate) derived_class: String,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            fs: &StdFs,
            logger: &StdLogger,
            style: OutputStyle::Expanded,
            quiet: false,
            target_class: DEFAULT_TARGET_CLASS.to_owned(),
            derived_class: DEFAULT_DERIVED_CLASS.to_owned(),
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to control the file system that the extractor
    /// will see.
    ///
    /// By default, it uses [`StdFs`], which is backed by [`std::fs`],
    /// allowing direct, unfettered access to the local file system.
    #[must_use]
    #[inline]
    pub fn fs(mut self, fs: &'a dyn Fs) -> Self {
        self.fs = fs;
        self
    }

    /// This option allows you to define how log events should be handled
    ///
    /// By default, [`StdLogger`] is used, which writes all events to
    /// standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// `cssift` offers 2 different output styles
    ///
    ///  - [`OutputStyle::Expanded`] writes each selector and declaration on
    ///    its own line.
    ///  - [`OutputStyle::Compressed`] removes as many extra characters as
    ///    possible and writes the entire stylesheet on a single line.
    ///
    /// By default, output is expanded.
    #[must_use]
    #[inline]
    pub const fn style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    /// This flag tells the extractor not to emit any warnings when parsing.
    /// By default, a warning is emitted for every malformed rule the parser
    /// has to skip.
    ///
    /// Setting this option to `true` will stop all logs from reaching the
    /// [`crate::Logger`].
    ///
    /// By default, this value is `false` and warnings are emitted.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The class selector token to search for, including its leading `.`
    ///
    /// Only style rules whose selector contains this token (as a plain
    /// substring) survive extraction.
    ///
    /// By default, this is [`DEFAULT_TARGET_CLASS`].
    #[must_use]
    #[inline]
    pub fn target_class<S: Into<String>>(mut self, target_class: S) -> Self {
        self.target_class = target_class.into();
        self
    }

    /// The token that replaces every occurrence of the target class in
    /// surviving selectors
    ///
    /// A derived class that itself contains the target class as a substring
    /// is unsupported input; see
    /// [`transform_selector`](crate::transform_selector).
    ///
    /// By default, this is [`DEFAULT_DERIVED_CLASS`].
    #[must_use]
    #[inline]
    pub fn derived_class<S: Into<String>>(mut self, derived_class: S) -> Self {
        self.derived_class = derived_class.into();
        self
    }

    pub(crate) fn is_compressed(&self) -> bool {
        matches!(self.style, OutputStyle::Compressed)
    }
}

#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputStyle {
    /// This mode writes each selector and declaration on its own line.
    ///
    /// This is the default output.
    Expanded,

    /// Ideal for release builds, this mode removes as many extra characters
    /// as possible and writes the entire stylesheet on a single line.
    Compressed,
}
