//! Document chunking and re-encoding.
//!
//! The pipeline is two pure functions over in-memory strings:
//!
//! - [`parse`]: raw document → ordered [`Chunk`] list
//! - [`render`]: chunk list → document with prose re-encoded as raw blocks
//!
//! Scanning is split from chunk construction:
//!
//! - [`scan`]: linear tokenizer emitting frontmatter and fence boundaries
//! - `parse`: reducer folding the boundary events into chunks
//! - `render`: serializer with a configurable raw block format
//!
//! ## Design Notes
//!
//! - **Frontmatter** is only recognised at the very start of the text. The
//!   opening `---` line may be followed by blank lines; the closing line is
//!   the first line that is exactly `---` (trailing blanks allowed).
//! - **Fences** need a `{...}` info string. The body runs to the *first*
//!   following triple backtick, so backticks inside a code string end the
//!   block early.
//! - **Prose** keeps its surrounding whitespace; blank spans are dropped.

mod chunk;
mod parse;
mod render;
pub mod scan;

pub use chunk::{Chunk, ChunkKind, frontmatter, has_executable_code};
pub use parse::parse;
pub use render::{DEFAULT_RAW_FORMAT, RenderConfig, Renderer, render};
