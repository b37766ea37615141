/// Shared helpers for the integration and end-to-end tests
#[allow(dead_code)]
pub mod fake_go;
#[allow(dead_code)]
pub mod mocks;
