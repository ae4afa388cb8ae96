//! # Generator Module
//!
//! The metadata-extraction and template-rendering pipeline that turns one
//! registered schema into six cooperating source files.
//!
//! ## Architecture
//!
//! ```text
//! Schema Registry → Field Extraction → Context → Template Rendering
//!                                                       ↓
//!                         Output Writer ← Formatter/Sanitizer
//! ```
//!
//! 1. **Extraction** — a schema's ordered field declarations become
//!    [`crate::schema::FieldDescriptor`] values (sequence kinds resolve to
//!    their parametrized `Vec<...>` names).
//! 2. **Context** — descriptors plus the naming transforms and the
//!    configured project name form one [`GeneratorContext`] per schema.
//! 3. **Rendering** — minijinja expands each layer template against the
//!    context; the [`ImportTracker`] and a path-join helper are exposed as
//!    template functions so a file imports each external symbol once.
//! 4. **Sanitizing** — a fixed artifact substitution, then
//!    `syn` + `prettyplease` validate and canonicalize the text.
//! 5. **Writing** — one file per (schema, layer), skipped silently when a
//!    file already exists at the target path.
//!
//! Render and formatting failures are per-file and recoverable; filesystem
//! failures abort the run.
//!
//! ## Generated layout
//!
//! ```text
//! <output_root>/
//! └── src/
//!     ├── api/<entity>.rs            # HTTP handlers
//!     ├── model/<entity>.rs          # request/response shapes
//!     ├── model/entity/<entity>.rs   # persisted records
//!     ├── store/<entity>.rs          # storage interface
//!     ├── store/postgres/<entity>.rs # Postgres implementation
//!     └── bll/<entity>.rs            # business logic
//! ```
//!
//! Template sources live in `templates/*.rs.txt`; a configured override
//! directory substitutes same-named files.

mod context;
mod format;
mod imports;
mod layer;
mod naming;
mod project;
mod render;
mod write;


pub use context::{build_context, GeneratorContext};
pub use format::sanitize;
pub use imports::ImportTracker;
pub use layer::Layer;
pub use naming::{lower_first, to_snake_case};
pub use project::{generate_all, GenerationSummary};
pub use render::Renderer;
pub use write::write_if_absent;
