//! # typst-engine
//!
//! Splits Quarto-style documents (YAML frontmatter, prose, and
//! `` ```{lang} `` code fences) into typed chunks, and reassembles them with
//! prose re-encoded as raw Typst passthrough blocks.
//!
//! ## Features
//!
//! - Linear single-pass chunking, no backtracking regex
//! - Never fails on malformed input: broken fences degrade into prose
//! - Configurable raw block format (`typst` by default)
//! - Extension policy rejecting executable code in plain `.md` files
//!
//! ## Quick Start
//!
//! ```
//! use typst_engine::{Chunk, has_executable_code, parse, render};
//!
//! let chunks = parse("---\ntitle: A\n---\n\nhello\n\n```{r}\n1+1\n```\n");
//! assert_eq!(chunks[0], Chunk::metadata("title: A"));
//! assert!(has_executable_code(&chunks));
//!
//! let converted = render(&chunks);
//! assert!(converted.contains("```{=typst}\n"));
//! ```
//!
//! ## Engine Integration
//!
//! The [`engine`] module wraps the pure functions with the descriptor,
//! extension policy, and host boundary a document-processing pipeline needs.

pub mod document;
pub mod engine;
pub mod error;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::{
    Chunk, ChunkKind, RenderConfig, Renderer, frontmatter, has_executable_code, parse, render,
};
pub use engine::{DocumentKind, EngineConfig, ExtensionTable, Host};
pub use error::{Error, Result};
