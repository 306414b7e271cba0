pub mod dependency_info;
pub mod dependency_list;
pub mod licence_override;
pub mod module_record;

pub use dependency_info::{DependencyInfo, UNKNOWN_LICENCE};
pub use dependency_list::DependencyList;
pub use licence_override::{Override, Overrides};
pub use module_record::ModuleRecord;
