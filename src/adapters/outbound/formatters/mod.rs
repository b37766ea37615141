/// Formatter adapters for the dependency listing
mod json_formatter;
mod plain_formatter;
mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use plain_formatter::PlainFormatter;
pub use table_formatter::TableFormatter;
