/// Go toolchain adapter answering package queries
mod go_list_client;

pub use go_list_client::{GoListClient, DEFAULT_GO_COMMAND};
