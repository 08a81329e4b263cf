use crate::adapters::outbound::formatters::{DisplayOptions, JsonFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ScanFormatter;

/// Factory for creating scan report formatters
///
/// Display options only affect the table; JSON always carries every result.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use scnpm::adapters::outbound::formatters::DisplayOptions;
    /// use scnpm::application::dto::OutputFormat;
    /// use scnpm::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, DisplayOptions::default());
    /// let output = formatter.format(&[]).unwrap();
    /// assert_eq!(output, "[]\n");
    /// ```
    pub fn create(format: OutputFormat, options: DisplayOptions) -> Box<dyn ScanFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new(options)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Table => "📝 Rendering table report...",
            OutputFormat::Json => "📝 Rendering JSON report...",
        }
    }
}
