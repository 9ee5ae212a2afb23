//! # Run Configuration
//!
//! One [`GeneratorOptions`] value describes a whole run: which declaration
//! to read, where templates come from and where the project is written.
//! The CLI fills it from flags; `SCAFFOLDER_TEMPLATE_DIR` and
//! `SCAFFOLDER_WORKSPACE` stand in for `--templatedir` and `--workspace`.
//!
//! ## Project directory
//!
//! In order of precedence:
//!
//! 1. `--output <DIR>` - exactly `DIR`
//! 2. `--workspace <DIR>` - `DIR/src/<sourceBase>`, the declaration's
//!    source base laid out under a shared workspace
//! 3. the current directory

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::generator::{GenerateOptions, TemplateSource};
use crate::spec::{Spec, DEFAULT_SPEC_FILE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub spec_path: PathBuf,
    pub verbose: bool,
    /// Overwrite user-owned files too.
    pub force: bool,
    pub template_dir: Option<PathBuf>,
    pub workspace: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Write the built-in templates here and stop.
    pub export_templates: Option<PathBuf>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            spec_path: PathBuf::from(DEFAULT_SPEC_FILE),
            verbose: false,
            force: false,
            template_dir: None,
            workspace: None,
            output: None,
            export_templates: None,
        }
    }
}

impl GeneratorOptions {
    pub fn template_source(&self) -> TemplateSource {
        match &self.template_dir {
            Some(dir) => TemplateSource::Directory(dir.clone()),
            None => TemplateSource::BuiltIn,
        }
    }

    /// Resolve the directory the project is generated into.
    ///
    /// # Errors
    ///
    /// Configuration error when a workspace is set but the declaration has
    /// no `sourceBase`, or the source base would escape the workspace.
    pub fn project_dir(&self, spec: &Spec) -> Result<PathBuf> {
        if let Some(output) = &self.output {
            return Ok(output.clone());
        }
        let Some(workspace) = &self.workspace else {
            return Ok(PathBuf::from("."));
        };

        let source_base = spec.source_base.trim().trim_matches('/');
        if source_base.is_empty() {
            return Err(ScaffoldError::config(
                "a workspace is configured but the declaration has no sourceBase",
            ));
        }
        if Path::new(source_base)
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)))
        {
            return Err(ScaffoldError::config(format!(
                "sourceBase \"{}\" must be a relative path inside the workspace",
                spec.source_base
            )));
        }
        Ok(workspace.join("src").join(source_base))
    }

    pub fn generate_options(&self, spec: &Spec) -> Result<GenerateOptions> {
        Ok(GenerateOptions {
            project_dir: self.project_dir(spec)?,
            force: self.force,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{enrich, RawSpec};

    fn spec(source_base: &str) -> Spec {
        enrich(&RawSpec {
            name: "animals".to_string(),
            source_base: source_base.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let opts = GeneratorOptions::default();
        assert_eq!(opts.spec_path, PathBuf::from("scaffold.json"));
        assert_eq!(opts.template_source(), TemplateSource::BuiltIn);
        assert_eq!(opts.project_dir(&spec("")).unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_workspace_layout() {
        let opts = GeneratorOptions {
            workspace: Some(PathBuf::from("/ws")),
            ..Default::default()
        };
        assert_eq!(
            opts.project_dir(&spec("github.com/acme/animals")).unwrap(),
            PathBuf::from("/ws/src/github.com/acme/animals")
        );
    }

    #[test]
    fn test_workspace_requires_source_base() {
        let opts = GeneratorOptions {
            workspace: Some(PathBuf::from("/ws")),
            ..Default::default()
        };
        assert!(opts.project_dir(&spec("")).unwrap_err().is_config());
        assert!(opts.project_dir(&spec("../escape")).unwrap_err().is_config());
    }

    #[test]
    fn test_output_wins() {
        let opts = GeneratorOptions {
            workspace: Some(PathBuf::from("/ws")),
            output: Some(PathBuf::from("out")),
            template_dir: Some(PathBuf::from("tpl")),
            ..Default::default()
        };
        assert_eq!(opts.project_dir(&spec("")).unwrap(), PathBuf::from("out"));
        assert_eq!(
            opts.template_source(),
            TemplateSource::Directory(PathBuf::from("tpl"))
        );
    }
}
