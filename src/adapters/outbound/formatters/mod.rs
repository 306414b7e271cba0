/// Formatter adapters for the dependency report formats
mod json_formatter;
mod markdown_formatter;
mod notice_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use notice_formatter::NoticeFormatter;
