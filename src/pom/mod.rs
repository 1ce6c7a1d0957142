//! POM descriptor parsing and managed-artifact resolution.

mod document;
mod resolver;

pub use document::{
    DependencyList, DependencyManagement, ManagedDependency, ParentReference, PomDocument,
};
pub use resolver::PomResolver;
