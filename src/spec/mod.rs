//! # Spec Module
//!
//! Loading and enrichment of the project declaration.
//!
//! A declaration names a project, its database and an ordered list of
//! resources with typed fields. [`load_raw_spec`] decodes it as written;
//! [`Enricher`] expands it into the [`Spec`] every template renders against:
//!
//! ```text
//! scaffold.json → RawSpec → Enricher → Spec (casing, plurals, table names,
//!                                            host types, test values, db url)
//! ```
//!
//! The enriched model is immutable for the rest of the run.

mod enrich;
mod load;
pub mod naming;
mod types;

pub use enrich::*;
pub use load::*;
pub use types::*;
