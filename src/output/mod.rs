//! Output formatting and display system
//!
//! Both binaries print through an [`OutputFormatter`], either plain text or
//! ANSI-colored depending on terminal support and user flags.

mod colored;
mod formatter;

pub use self::colored::{ColorScheme, ColoredFormatter};
pub use formatter::{
    birthday_label, format_count, month_name, FormattingOptions, OutputFormatter, PlainFormatter,
};

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool) -> Box<dyn OutputFormatter> {
        Self::from_options(FormattingOptions {
            enable_color,
            ..FormattingOptions::default()
        })
    }

    /// Create the formatter `options` asks for
    pub fn from_options(options: FormattingOptions) -> Box<dyn OutputFormatter> {
        if options.enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(false)
    }
}
