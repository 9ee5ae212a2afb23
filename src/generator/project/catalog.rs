use std::path::{Path, PathBuf};

/// Placeholder for the project's lower-first name in target file names.
pub const PROJECT_PLACEHOLDER: &str = "{project}";
/// Placeholder for the resource's all-lower name in target directories.
pub const RESOURCE_PLACEHOLDER: &str = "{resource}";

/// Whether an existing target blocks regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Derived entirely from the declaration; always rewritten.
    Always,
    /// Meant to be edited by hand once generated; never clobbered unless forced.
    UserOwned,
}

impl OverwritePolicy {
    pub fn overwrite(self, force: bool) -> bool {
        force || self == OverwritePolicy::Always
    }
}

/// One catalog entry: which template produces which file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    pub template: &'static str,
    /// Directory relative to the project directory, `/`-separated. Empty for
    /// the project directory itself.
    pub dir: &'static str,
    pub file: &'static str,
    pub policy: OverwritePolicy,
    /// Owner-only `rwx` after writing (shell scripts).
    pub executable: bool,
}

impl Artifact {
    const fn new(template: &'static str, dir: &'static str, file: &'static str) -> Self {
        Self {
            template,
            dir,
            file,
            policy: OverwritePolicy::Always,
            executable: false,
        }
    }

    const fn user_owned(mut self) -> Self {
        self.policy = OverwritePolicy::UserOwned;
        self
    }

    const fn executable(mut self) -> Self {
        self.executable = true;
        self
    }

    /// Target directory under `root`, with `{resource}` replaced.
    pub fn target_dir(&self, root: &Path, resource: Option<&str>) -> PathBuf {
        let mut dir = root.to_path_buf();
        for part in self.dir.split('/').filter(|p| !p.is_empty()) {
            match resource {
                Some(r) if part == RESOURCE_PLACEHOLDER => dir.push(r),
                _ => dir.push(part),
            }
        }
        dir
    }

    /// Target file name, with `{project}` replaced.
    pub fn target_file(&self, project: &str) -> String {
        self.file.replace(PROJECT_PLACEHOLDER, project)
    }
}

/// Rendered once per run against the project context, in this order.
pub const PROJECT_CATALOG: &[Artifact] = &[
    Artifact::new("script.install.sh", "", "install.sh").executable(),
    Artifact::new("script.test.sh", "", "test.sh").executable(),
    Artifact::new("script.install.bat", "", "install.bat"),
    Artifact::new("script.test.bat", "", "test.bat"),
    Artifact::new("cargo.toml.txt", "", "Cargo.toml"),
    Artifact::new("main.rs", "", "{project}.rs"),
    Artifact::new("view.stylesheets.scaffold.css", "views/stylesheets", "scaffold.css").user_owned(),
    Artifact::new("view.index.html", "views/html", "index.html").user_owned(),
    Artifact::new("view.error.html", "views/html", "error.html").user_owned(),
    Artifact::new("view.base.html", "views/generated/crud/templates", "_base.html").user_owned(),
    Artifact::new("sql.create.db", "generated/sql", "create.db.sql"),
    Artifact::new("crud.mod.rs", "generated/crud", "mod.rs"),
    Artifact::new("utilities.rs", "generated/crud/utilities", "mod.rs"),
    Artifact::new("views.rs", "generated/crud/views", "mod.rs"),
    Artifact::new("services.rs", "generated/crud/services", "mod.rs"),
    Artifact::new("services.concrete.rs", "generated/crud/services", "concrete_services.rs"),
];

/// Rendered once per resource against that resource, in this order.
pub const RESOURCE_CATALOG: &[Artifact] = &[
    Artifact::new("model.interface.rs", "generated/crud/models/{resource}", "mod.rs"),
    Artifact::new("model.concrete.rs", "generated/crud/models/{resource}", "concrete.rs"),
    Artifact::new("model.concrete.test.rs", "generated/crud/models/{resource}", "concrete_test.rs"),
    Artifact::new("model.storage.rs", "generated/crud/models/{resource}/sqlx", "mod.rs"),
    Artifact::new("model.concrete.test.rs", "generated/crud/models/{resource}/sqlx", "concrete_test.rs"),
    Artifact::new("repository.interface.rs", "generated/crud/repositories/{resource}", "mod.rs"),
    Artifact::new("repository.storage.rs", "generated/crud/repositories/{resource}/sqlx", "mod.rs"),
    Artifact::new(
        "repository.storage.test.rs",
        "generated/crud/repositories/{resource}/sqlx",
        "repository_test.rs",
    ),
    Artifact::new("form.mod.rs", "generated/crud/forms/{resource}", "mod.rs"),
    Artifact::new("form.single.item.rs", "generated/crud/forms/{resource}", "single_item_form.rs"),
    Artifact::new(
        "form.concrete.single.item.rs",
        "generated/crud/forms/{resource}",
        "concrete_single_item_form.rs",
    ),
    Artifact::new(
        "form.concrete.single.item.test.rs",
        "generated/crud/forms/{resource}",
        "concrete_single_item_form_test.rs",
    ),
    Artifact::new("form.list.rs", "generated/crud/forms/{resource}", "list_form.rs"),
    Artifact::new("form.concrete.list.rs", "generated/crud/forms/{resource}", "concrete_list_form.rs"),
    Artifact::new("controller.rs", "generated/crud/controllers/{resource}", "mod.rs"),
    Artifact::new("controller.test.rs", "generated/crud/controllers/{resource}", "controller_test.rs"),
    Artifact::new("view.resource.index.html", "views/generated/crud/templates/{resource}", "index.html"),
    Artifact::new("view.resource.create.html", "views/generated/crud/templates/{resource}", "create.html"),
    Artifact::new("view.resource.edit.html", "views/generated/crud/templates/{resource}", "edit.html"),
    Artifact::new("view.resource.show.html", "views/generated/crud/templates/{resource}", "show.html"),
];
