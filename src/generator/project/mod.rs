mod catalog;
mod generate;

pub use catalog::{Artifact, OverwritePolicy, PROJECT_CATALOG, RESOURCE_CATALOG};
pub use generate::{generate_project, GenerateOptions, GenerationReport};
