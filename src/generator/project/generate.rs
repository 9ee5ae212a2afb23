use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::catalog::{Artifact, PROJECT_CATALOG, RESOURCE_CATALOG};
use crate::error::Result;
use crate::generator::render::{make_executable, Materializer, Outcome, ProjectContext, RenderContext};
use crate::generator::templates::TemplateRegistry;
use crate::spec::Spec;

/// Where to generate and how hard to push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub project_dir: PathBuf,
    /// Overwrite every artifact, user-owned ones included.
    pub force: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            force: false,
        }
    }
}

/// Paths touched by one run, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    fn record(&mut self, outcome: Outcome, path: PathBuf) {
        match outcome {
            Outcome::Written => self.written.push(path),
            Outcome::Skipped => self.skipped.push(path),
        }
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// Render the whole catalog for `spec` under `options.project_dir`.
///
/// Project-level artifacts first, then every per-resource artifact for each
/// resource in declared order. The first failure stops the run; files
/// already written stay on disk.
pub fn generate_project(
    spec: &Spec,
    registry: &TemplateRegistry,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let materializer = Materializer::new(registry);
    let root = options.project_dir.as_path();
    let mut report = GenerationReport::default();

    let project_ctx = ProjectContext::new(spec);
    debug!(
        project = %spec.name,
        dir = %root.display(),
        references = project_ctx.references.controllers.len(),
        "generating project-level files"
    );
    for artifact in PROJECT_CATALOG {
        let (outcome, path) = materialize_one(
            &materializer,
            artifact,
            root,
            None,
            &spec.name_lower_first,
            RenderContext::Project(&project_ctx),
            options.force,
        )?;
        report.record(outcome, path);
    }

    for resource in &spec.resources {
        debug!(resource = %resource.name, "generating resource files");
        for artifact in RESOURCE_CATALOG {
            let (outcome, path) = materialize_one(
                &materializer,
                artifact,
                root,
                Some(&resource.name_all_lower),
                &spec.name_lower_first,
                RenderContext::Resource(resource),
                options.force,
            )?;
            report.record(outcome, path);
        }
    }

    info!(
        project = %spec.name,
        written = report.written.len(),
        skipped = report.skipped.len(),
        "generation complete"
    );
    Ok(report)
}

fn materialize_one(
    materializer: &Materializer<'_>,
    artifact: &Artifact,
    root: &Path,
    resource: Option<&str>,
    project: &str,
    ctx: RenderContext<'_>,
    force: bool,
) -> Result<(Outcome, PathBuf)> {
    let dir = artifact.target_dir(root, resource);
    let file = artifact.target_file(project);
    let outcome = materializer.materialize(
        &dir,
        &file,
        artifact.template,
        ctx,
        artifact.policy.overwrite(force),
    )?;
    let path = dir.join(file);
    if artifact.executable && outcome == Outcome::Written {
        make_executable(&path)?;
    }
    Ok((outcome, path))
}
