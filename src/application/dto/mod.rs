/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod list_request;
mod list_response;
mod output_format;

pub use list_request::{ListRequest, ListRequestBuilder};
pub use list_response::ListResponse;
pub use output_format::OutputFormat;
