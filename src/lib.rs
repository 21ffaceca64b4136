//! # psl-edit
//!
//! Comment-aware datasource parsing and guarded text edits for Prisma-style
//! schemas.
//!
//! This crate provides:
//! - A locator for the single live `datasource` block in schema text
//! - Extraction of the `provider` and `url` fields, with alias normalization
//!   and inline-vs-`env()` url classification
//! - Guarded rewrites (change provider, change url, add preview feature
//!   flags) that fail loudly instead of silently leaving text unchanged
//!
//! The core is pure text-in, text-out: callers own all file I/O, every parse
//! is recomputed from the input, and every edit returns the full rewritten
//! schema while leaving unrelated content byte-for-byte intact.
//!
//! ## Example
//!
//! ```rust
//! use psl_edit::{ParsedDatasource, parse_datasource, set_url};
//!
//! let schema = r#"
//! datasource db {
//!   provider = "postgresql"
//!   url      = env("DATABASE_URL")
//! }
//! "#;
//!
//! let parsed = parse_datasource(schema)?;
//! assert!(matches!(parsed, ParsedDatasource::Env { .. }));
//!
//! let rewritten = set_url(schema, "postgres://localhost/dev", false)?;
//! assert!(rewritten.contains(r#"url      = "postgres://localhost/dev""#));
//! # Ok::<(), psl_edit::EditError>(())
//! ```

pub mod block;
pub mod create;
pub mod datasource;
pub mod error;
pub mod field;
pub mod preview;
pub mod provider;
pub mod relation_mode;
pub mod replace;

pub use block::{Block, find_datasource_block};
pub use create::{create_empty, render_env_value, render_value};
pub use datasource::{ParsedDatasource, parse_datasource, set_provider, set_url};
pub use error::{EditError, EditResult};
pub use preview::{PreviewFeature, add_preview_feature};
pub use provider::{Provider, ProviderAlias};
pub use relation_mode::{RelationMode, set_relation_mode};
pub use replace::{replace_anchored, replace_matching};
