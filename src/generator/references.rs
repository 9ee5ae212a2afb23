use serde::Serialize;

use crate::spec::{Resource, Spec};

/// Module path of the generated CRUD tree inside the generated crate.
pub const CRUD_ROOT: &str = "crate::crud";

/// One importable per-resource module.
///
/// Templates turn it into `use {path} as {alias};` or similar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Resource name, as declared.
    pub name: String,
    pub path: String,
    pub alias: String,
}

/// The kinds of per-resource module the project-level files refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Form,
    Controller,
    Model,
    StorageModel,
    Repository,
    StorageRepository,
}

impl ReferenceKind {
    fn module(self) -> &'static str {
        match self {
            ReferenceKind::Form => "forms",
            ReferenceKind::Controller => "controllers",
            ReferenceKind::Model | ReferenceKind::StorageModel => "models",
            ReferenceKind::Repository | ReferenceKind::StorageRepository => "repositories",
        }
    }

    fn is_storage(self) -> bool {
        matches!(
            self,
            ReferenceKind::StorageModel | ReferenceKind::StorageRepository
        )
    }

    fn alias_suffix(self) -> &'static str {
        match self {
            ReferenceKind::Form => "forms",
            ReferenceKind::Controller => "controller",
            ReferenceKind::Model => "model",
            ReferenceKind::StorageModel => "storage_model",
            ReferenceKind::Repository => "repository",
            ReferenceKind::StorageRepository => "storage_repository",
        }
    }

    /// Build the descriptor for `resource`.
    pub fn reference(self, resource: &Resource) -> Reference {
        let r = &resource.name_all_lower;
        let mut path = format!("{CRUD_ROOT}::{}::{r}", self.module());
        if self.is_storage() {
            path.push_str("::sqlx");
        }
        Reference {
            name: resource.name.clone(),
            path,
            alias: format!("{r}_{}", self.alias_suffix()),
        }
    }
}

/// Ordered descriptor lists, one per kind, each in declared resource order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct References {
    pub forms: Vec<Reference>,
    pub controllers: Vec<Reference>,
    pub models: Vec<Reference>,
    pub storage_models: Vec<Reference>,
    pub repositories: Vec<Reference>,
    pub storage_repositories: Vec<Reference>,
}

impl References {
    pub fn build(spec: &Spec) -> Self {
        let collect = |kind: ReferenceKind| -> Vec<Reference> {
            spec.resources.iter().map(|r| kind.reference(r)).collect()
        };
        Self {
            forms: collect(ReferenceKind::Form),
            controllers: collect(ReferenceKind::Controller),
            models: collect(ReferenceKind::Model),
            storage_models: collect(ReferenceKind::StorageModel),
            repositories: collect(ReferenceKind::Repository),
            storage_repositories: collect(ReferenceKind::StorageRepository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{enrich, RawField, RawResource, RawSpec};

    fn spec(names: &[&str]) -> Spec {
        let resources = names
            .iter()
            .map(|n| RawResource {
                name: n.to_string(),
                fields: vec![RawField {
                    name: "name".to_string(),
                    field_type: "string".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            })
            .collect();
        enrich(&RawSpec {
            name: "zoo".to_string(),
            resources,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_declared_order_is_kept() {
        let refs = References::build(&spec(&["Zebra", "ant", "Mole"]));
        let names: Vec<_> = refs.controllers.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "ant", "Mole"]);
        assert_eq!(refs.storage_repositories.len(), 3);
    }

    #[test]
    fn test_paths_and_aliases() {
        let refs = References::build(&spec(&["Cat"]));
        assert_eq!(refs.forms[0].path, "crate::crud::forms::cat");
        assert_eq!(refs.forms[0].alias, "cat_forms");
        assert_eq!(refs.storage_models[0].path, "crate::crud::models::cat::sqlx");
        assert_eq!(refs.storage_models[0].alias, "cat_storage_model");
        assert_eq!(refs.repositories[0].path, "crate::crud::repositories::cat");
        assert_eq!(refs.controllers[0].alias, "cat_controller");
    }

    #[test]
    fn test_no_resources_no_references() {
        let refs = References::build(&spec(&[]));
        assert_eq!(refs, References::default());
    }
}
