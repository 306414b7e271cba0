/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod detection_request;
mod output_format;

pub use detection_request::DetectionRequest;
pub use output_format::OutputFormat;
