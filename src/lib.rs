//! # scaffolder
//!
//! **scaffolder** generates a complete create/read/update/delete web
//! application from a short declaration of database-backed resources and
//! their typed fields.
//!
//! ## Overview
//!
//! A declaration names the project, the database connection and the
//! resources:
//!
//! ```json
//! {
//!   "name": "animals",
//!   "sourceBase": "github.com/acme/animals",
//!   "db": "mysql",
//!   "resources": [
//!     { "name": "cat", "fields": [
//!       { "name": "name", "type": "string", "mandatory": true },
//!       { "name": "age", "type": "uint" }
//!     ] }
//!   ]
//! }
//! ```
//!
//! From it the generator writes an `axum` + `sqlx` application: models,
//! repositories, forms, controllers and HTML views for every resource, plus
//! the SQL schema, the entry point, `Cargo.toml` and install/test scripts.
//!
//! ## Architecture
//!
//! - **[`spec`]** - loading (JSON, YAML, TOML) and enrichment of the declaration
//! - **[`generator`]** - template registry, materialisation and the artifact catalog
//! - **[`config`]** - run options and project directory resolution
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - command-line front end
//! - **[`error`]** - the error type every fallible operation returns
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(scaffolder)
//!     participant Load as spec::load_raw_spec
//!     participant Enrich as spec::Enricher
//!     participant Registry as generator::TemplateRegistry
//!     participant Driver as generator::generate_project
//!     participant FS as File System
//!
//!     User->>CLI: scaffolder animals.json
//!     CLI->>Load: load_raw_spec("animals.json")
//!     Load-->>CLI: RawSpec
//!     CLI->>Enrich: enrich(&raw)
//!     Enrich->>Enrich: names, plurals, tables,<br/>host types, test values
//!     Enrich-->>CLI: Spec
//!     CLI->>Registry: build(source)
//!     Registry->>Registry: compile every template
//!     CLI->>Driver: generate_project(&spec, &registry, options)
//!     loop project catalog, then each resource
//!         Driver->>FS: create directory
//!         Driver->>FS: skip user-owned file or write rendered template
//!     end
//!     Driver-->>CLI: GenerationReport
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use scaffolder::generator::{generate_project, GenerateOptions, TemplateRegistry, TemplateSource};
//! use scaffolder::spec::load_spec;
//!
//! # fn main() -> scaffolder::error::Result<()> {
//! let spec = load_spec(Path::new("animals.json"))?;
//! let registry = TemplateRegistry::build(TemplateSource::BuiltIn)?;
//! let report = generate_project(&spec, &registry, &GenerateOptions::default())?;
//! println!("{} files written", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod spec;

pub use error::{Result, ScaffoldError};
pub use generator::{generate_project, GenerateOptions, GenerationReport, TemplateRegistry, TemplateSource};
pub use spec::{load_spec, Spec};
