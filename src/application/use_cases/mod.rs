/// Use cases module containing application business logic orchestration
mod collect_dependencies;
mod list_dependencies;

pub use collect_dependencies::CollectDependenciesUseCase;
pub use list_dependencies::ListDependenciesUseCase;
