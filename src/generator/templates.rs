use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, Template, UndefinedBehavior};
use serde::Serialize;
use tracing::debug;

use super::builtin::builtin_source;
use crate::error::{Result, ScaffoldError};

/// Stands in for a grave accent in template sources.
///
/// Override templates are often produced through shell heredocs and other
/// quoting layers where a bare grave accent starts command substitution;
/// sources spell it `%%GRAVE%%` and the registry restores it before
/// compiling.
pub const GRAVE_TOKEN: &str = "%%GRAVE%%";

/// Every template the generator renders, in catalog order.
pub const TEMPLATE_NAMES: &[&str] = &[
    // project level
    "script.install.sh",
    "script.test.sh",
    "script.install.bat",
    "script.test.bat",
    "cargo.toml.txt",
    "main.rs",
    "view.stylesheets.scaffold.css",
    "view.index.html",
    "view.error.html",
    "view.base.html",
    "sql.create.db",
    "crud.mod.rs",
    "utilities.rs",
    "views.rs",
    "services.rs",
    "services.concrete.rs",
    // per resource
    "model.interface.rs",
    "model.concrete.rs",
    "model.concrete.test.rs",
    "model.storage.rs",
    "repository.interface.rs",
    "repository.storage.rs",
    "repository.storage.test.rs",
    "form.mod.rs",
    "form.single.item.rs",
    "form.concrete.single.item.rs",
    "form.concrete.single.item.test.rs",
    "form.list.rs",
    "form.concrete.list.rs",
    "controller.rs",
    "controller.test.rs",
    "view.resource.index.html",
    "view.resource.create.html",
    "view.resource.edit.html",
    "view.resource.show.html",
];

/// Where template sources come from. Exactly one source is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Sources compiled into the binary.
    BuiltIn,
    /// One file per template name under this directory.
    Directory(PathBuf),
}

/// Replace every escape token with the character it stands for.
pub fn unescape(source: &str) -> String {
    source.replace(GRAVE_TOKEN, "`")
}

fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    // A context of the wrong shape must fail instead of rendering blanks.
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    // Output is source text; `.html` names must not trigger HTML escaping.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env
}

/// Name → compiled template mapping used by every render call.
///
/// Built once at start-up with every catalog entry compiled eagerly, then
/// only read.
pub struct TemplateRegistry {
    env: Environment<'static>,
    source: TemplateSource,
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("source", &self.source)
            .field("templates", &TEMPLATE_NAMES.len())
            .finish()
    }
}

impl TemplateRegistry {
    /// Compile the whole catalog from `source`.
    ///
    /// # Errors
    ///
    /// I/O error if an override file cannot be read; template error naming
    /// the first template that fails to compile.
    pub fn build(source: TemplateSource) -> Result<Self> {
        let mut sources = Vec::with_capacity(TEMPLATE_NAMES.len());
        for name in TEMPLATE_NAMES {
            let text = match &source {
                TemplateSource::BuiltIn => {
                    debug!(template = name, "creating template from built-in source");
                    builtin_source(name)
                        .ok_or_else(|| {
                            ScaffoldError::template(
                                *name,
                                minijinja::Error::new(
                                    minijinja::ErrorKind::TemplateNotFound,
                                    "no built-in source",
                                ),
                            )
                        })?
                        .to_string()
                }
                TemplateSource::Directory(root) => {
                    let path = root.join(name);
                    debug!(template = name, path = %path.display(), "creating template from file");
                    fs::read_to_string(&path)
                        .map_err(|e| ScaffoldError::io("read template file", &path, e))?
                }
            };
            sources.push((name.to_string(), text));
        }
        Self::from_sources(source, sources)
    }

    /// Compile an explicit set of `(name, source)` pairs.
    pub fn from_sources<I>(source: TemplateSource, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut env = new_environment();
        for (name, text) in sources {
            env.add_template_owned(name.clone(), unescape(&text))
                .map_err(|e| ScaffoldError::template(name, e))?;
        }
        Ok(Self { env, source })
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Names of every compiled template.
    pub fn names(&self) -> Vec<&str> {
        self.env.templates().map(|(name, _)| name).collect()
    }

    pub fn get(&self, name: &str) -> Result<Template<'_, '_>> {
        self.env
            .get_template(name)
            .map_err(|e| ScaffoldError::template(name, e))
    }

    /// Execute `name` against `ctx`, streaming output into `out`.
    pub fn render_to_write<S: Serialize, W: Write>(&self, name: &str, ctx: S, out: W) -> Result<()> {
        self.get(name)?
            .render_to_write(ctx, out)
            .map(|_| ())
            .map_err(|e| ScaffoldError::template(name, e))
    }

    /// Execute `name` against `ctx` into a string.
    pub fn render_to_string<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        self.get(name)?
            .render(ctx)
            .map_err(|e| ScaffoldError::template(name, e))
    }
}

/// Write every built-in source, escape tokens intact, into `dir`.
///
/// The result is a ready-made override directory to start customising from.
pub fn export_builtin(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| ScaffoldError::io("create directory", dir, e))?;
    let mut written = Vec::with_capacity(TEMPLATE_NAMES.len());
    for name in TEMPLATE_NAMES {
        let Some(text) = builtin_source(name) else {
            continue;
        };
        let path = dir.join(name);
        fs::write(&path, text).map_err(|e| ScaffoldError::io("write template file", &path, e))?;
        written.push(path);
    }
    Ok(written)
}
