//! # crudgen
//!
//! **crudgen** is a schema-driven, multi-layer CRUD source generator:
//! declarative entity schemas in, six cooperating Rust layer files out.
//!
//! ## Overview
//!
//! Each entry in the [`schema`] registry describes one data entity as an
//! ordered set of named, typed, annotated fields. For every entity the
//! generator renders an API-handler layer, a request/response model layer,
//! a storage-entity layer, a storage-interface layer, a Postgres
//! storage-implementation layer and a business-logic layer, each from its
//! own template.
//!
//! The templates are opaque, pluggable text resources — all knowledge of
//! the frameworks the generated code targets lives inside them. The core
//! pipeline only extracts field metadata, renders, validates the output as
//! Rust source and writes files it has not written before (an existing
//! file is never overwritten, so generated code can be hand-edited and
//! regenerated safely).
//!
//! ## Modules
//!
//! - [`schema`] — entity schemas, the registry and field extraction
//! - [`generator`] — naming transforms, import dedup tracking, template
//!   rendering, sanitizing/formatting, the idempotent writer and the
//!   pipeline driver
//! - [`config`] — optional `crudgen.toml` configuration
//! - [`cli`] — the `crudgen generate` command
//!
//! ## Usage
//!
//! ```bash
//! crudgen generate            # uses ./crudgen.toml when present
//! crudgen generate -c my.toml
//! ```
//!
//! ```rust,no_run
//! use crudgen::config::GeneratorConfig;
//! use crudgen::generator::generate_all;
//! use crudgen::schema;
//!
//! # fn main() -> Result<(), crudgen::error::GenerateError> {
//! let registry = schema::registry();
//! let summary = generate_all(&GeneratorConfig::default(), registry.values())?;
//! println!("{} files generated", summary.written);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod schema;
