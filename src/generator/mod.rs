//! # Generator Module
//!
//! Turns an enriched [`Spec`](crate::spec::Spec) into a CRUD web application
//! source tree.
//!
//! ## Overview
//!
//! A run renders a fixed catalog of named templates:
//! - **Project files** - install/test scripts, `Cargo.toml`, the entry point,
//!   the SQL creation script, the CRUD module tree and the shared views
//! - **Resource files** - model, repository, forms, controller and HTML views
//!   for every declared resource
//!
//! ## Architecture
//!
//! ```text
//! Spec → TemplateRegistry → Materializer → files
//!          (compiled once)   (one template, one context, one file)
//! ```
//!
//! 1. **Registry** - compiles every template, from the built-in set or from an
//!    override directory, before anything is written
//! 2. **Materializer** - renders one template into one file under the
//!    overwrite policy
//! 3. **Driver** - walks the catalog in order and collects a report
//!
//! ## Generated Structure
//!
//! ```text
//! <project dir>/
//! ├── Cargo.toml
//! ├── <project>.rs                 # entry point
//! ├── install.sh, test.sh, *.bat
//! ├── generated/
//! │   ├── sql/create.db.sql
//! │   └── crud/
//! │       ├── mod.rs
//! │       ├── models/<r>/…
//! │       ├── repositories/<r>/…
//! │       ├── forms/<r>/…
//! │       ├── controllers/<r>/…
//! │       ├── services/…
//! │       ├── utilities/mod.rs
//! │       └── views/mod.rs
//! └── views/
//!     ├── stylesheets/scaffold.css # user owned
//!     ├── html/{index,error}.html  # user owned
//!     └── generated/crud/templates/
//!         ├── _base.html           # user owned
//!         └── <r>/{index,create,edit,show}.html
//! ```
//!
//! User-owned files are written once and then left alone unless
//! `--overwrite` is given; everything else is regenerated on every run.
//!
//! ## Template Customization
//!
//! `scaffolder --export-templates <dir>` writes the built-in set; point
//! `--templatedir` at the edited copy. Every catalog name must be present.

mod builtin;
mod project;
mod references;
mod render;
mod templates;

pub use project::*;
pub use references::*;
pub use render::*;
pub use templates::*;
