use crate::adapters::outbound::formatters::{JsonFormatter, PlainFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DependencyFormatter;

/// Factory for creating dependency formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use godi::application::dto::OutputFormat;
    /// use godi::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// assert_eq!(formatter.format(&[]).unwrap(), "[]\n");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn DependencyFormatter> {
        match format {
            OutputFormat::Plain => Box::new(PlainFormatter::new()),
            OutputFormat::Verbose => Box::new(TableFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
