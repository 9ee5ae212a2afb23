//! # CLI Module
//!
//! Command-line front end of the generator.
//!
//! ## Usage
//!
//! ```bash
//! # Generate from ./scaffold.json into the current directory
//! scaffolder
//!
//! # Pick the declaration and output directory
//! scaffolder animals.yaml --output animals
//!
//! # Regenerate everything, hand-edited views included
//! scaffolder animals.yaml --output animals --overwrite
//!
//! # Customise templates
//! scaffolder --export-templates my-templates
//! scaffolder animals.yaml --templatedir my-templates
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use clap::Parser;
//! use scaffolder::cli::{run_cli, Cli};
//!
//! let cli = Cli::parse();
//! run_cli(&cli)?;
//! ```

mod commands;


pub use commands::{run, run_cli, Cli, RunSummary};
