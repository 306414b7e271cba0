/// Use cases module containing application business logic orchestration
mod detect_dependencies;

pub use detect_dependencies::{detect, DetectDependenciesUseCase};
