use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::references::References;
use super::templates::TemplateRegistry;
use crate::error::{Result, ScaffoldError};
use crate::spec::{Resource, Spec};

/// Data handed to project-level templates: the whole spec plus the ordered
/// cross-resource references.
#[derive(Debug, Serialize)]
pub struct ProjectContext<'a> {
    #[serde(flatten)]
    pub spec: &'a Spec,
    pub references: References,
}

impl<'a> ProjectContext<'a> {
    pub fn new(spec: &'a Spec) -> Self {
        Self {
            spec,
            references: References::build(spec),
        }
    }
}

/// The two context shapes a template can be rendered against.
///
/// Which one a template expects is part of its contract; rendering it with
/// the other shape fails on the first missing variable.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum RenderContext<'a> {
    Project(&'a ProjectContext<'a>),
    Resource(&'a Resource),
}

/// What a materialisation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Written,
    /// The target existed and the artifact is not overwritten.
    Skipped,
}

/// Executes templates and persists their output.
#[derive(Debug, Clone, Copy)]
pub struct Materializer<'r> {
    registry: &'r TemplateRegistry,
}

impl<'r> Materializer<'r> {
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Render `template` against `ctx` into `dir/file_name`.
    ///
    /// The directory is created if needed. Without `overwrite`, an existing
    /// entry named `file_name` is left untouched and [`Outcome::Skipped`] is
    /// returned. Otherwise the file is created or truncated and the template
    /// output streamed into it.
    ///
    /// # Errors
    ///
    /// I/O error for directory, listing, create, write or flush failures;
    /// template error (carrying the target path) for execution failures.
    pub fn materialize(
        &self,
        dir: &Path,
        file_name: &str,
        template: &str,
        ctx: RenderContext<'_>,
        overwrite: bool,
    ) -> Result<Outcome> {
        fs::create_dir_all(dir).map_err(|e| ScaffoldError::io("create target directory", dir, e))?;

        let path = dir.join(file_name);
        if !overwrite && entry_exists(dir, file_name)? {
            debug!(
                path = %path.display(),
                "file already exists and overwrite mode is off"
            );
            return Ok(Outcome::Skipped);
        }

        debug!(path = %path.display(), template, overwrite, "creating file");
        let file = File::create(&path).map_err(|e| ScaffoldError::io("create target file", &path, e))?;
        let mut out = BufWriter::new(file);
        self.registry
            .render_to_write(template, ctx, &mut out)
            .map_err(|e| e.with_path(&path))?;
        out.flush()
            .map_err(|e| ScaffoldError::io("write target file", &path, e))?;
        Ok(Outcome::Written)
    }
}

/// Scan the directory listing for `name`.
fn entry_exists(dir: &Path, name: &str) -> Result<bool> {
    let entries = fs::read_dir(dir).map_err(|e| ScaffoldError::io("scan target directory", dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ScaffoldError::io("scan target directory", dir, e))?;
        if entry.file_name() == OsStr::new(name) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Give the owner read, write and execute permission (`u+rwx`, nothing else).
#[cfg(unix)]
pub fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o700))
        .map_err(|e| ScaffoldError::io("set permissions on", path, e))
}

#[cfg(not(unix))]
pub fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::templates::TemplateSource;
    use crate::spec::{enrich, RawField, RawResource, RawSpec};

    fn registry() -> TemplateRegistry {
        TemplateRegistry::from_sources(
            TemplateSource::BuiltIn,
            vec![
                ("resource".to_string(), "{{ name_upper_first }}:{{ table_name }}".to_string()),
                ("project".to_string(), "{% for r in references.forms %}{{ r.alias }} {% endfor %}".to_string()),
            ],
        )
        .unwrap()
    }

    fn spec() -> Spec {
        enrich(&RawSpec {
            name: "animals".to_string(),
            resources: vec![RawResource {
                name: "cat".to_string(),
                fields: vec![RawField {
                    name: "name".to_string(),
                    field_type: "string".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_creates_directory_and_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let reg = registry();
        let spec = spec();
        let dir = tmp.path().join("a/b/c");
        let outcome = Materializer::new(&reg)
            .materialize(&dir, "x.txt", "resource", RenderContext::Resource(&spec.resources[0]), true)
            .unwrap();
        assert_eq!(outcome, Outcome::Written);
        assert_eq!(fs::read_to_string(dir.join("x.txt")).unwrap(), "Cat:cats");
    }

    #[test]
    fn test_skip_leaves_existing_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let reg = registry();
        let spec = spec();
        fs::write(tmp.path().join("x.txt"), b"hand edited").unwrap();
        let outcome = Materializer::new(&reg)
            .materialize(tmp.path(), "x.txt", "resource", RenderContext::Resource(&spec.resources[0]), false)
            .unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(fs::read(tmp.path().join("x.txt")).unwrap(), b"hand edited");
    }

    #[test]
    fn test_wrong_context_shape_is_template_error() {
        let tmp = tempfile::tempdir().unwrap();
        let reg = registry();
        let spec = spec();
        let err = Materializer::new(&reg)
            .materialize(tmp.path(), "x.txt", "project", RenderContext::Resource(&spec.resources[0]), true)
            .unwrap_err();
        match err {
            ScaffoldError::Template { name, path, .. } => {
                assert_eq!(name, "project");
                assert_eq!(path, Some(tmp.path().join("x.txt")));
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_project_context_exposes_references() {
        let tmp = tempfile::tempdir().unwrap();
        let reg = registry();
        let spec = spec();
        let ctx = ProjectContext::new(&spec);
        Materializer::new(&reg)
            .materialize(tmp.path(), "p.txt", "project", RenderContext::Project(&ctx), true)
            .unwrap();
        assert_eq!(fs::read_to_string(tmp.path().join("p.txt")).unwrap(), "cat_forms ");
    }

    #[cfg(unix)]
    #[test]
    fn test_make_executable() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("install.sh");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        make_executable(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }
}
