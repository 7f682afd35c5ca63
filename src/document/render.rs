//! Serializer: chunk list → output document.
//!
//! Markdown chunks are re-encoded as raw passthrough blocks
//! (`` ```{=typst} ``) so the downstream renderer emits them verbatim into
//! the target format. Every block is followed by exactly one blank line,
//! whatever the spacing of the source document was.
//!
//! This is a format conversion, not a lossless reserializer: parsing the
//! output again yields code chunks tagged `=typst` where prose used to be.

use std::io::{self, Write};

use super::chunk::Chunk;

/// Raw block format used when none is configured.
pub const DEFAULT_RAW_FORMAT: &str = "typst";

/// Configuration for document rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Format tag of raw passthrough blocks, without the leading `=`.
    pub raw_format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            raw_format: DEFAULT_RAW_FORMAT.to_string(),
        }
    }
}

impl RenderConfig {
    pub fn with_raw_format(mut self, format: impl Into<String>) -> Self {
        self.raw_format = format.into();
        self
    }
}

/// Renders chunk lists into documents.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new Renderer targeting Typst.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Renderer with the specified configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the chunks, in order, into a new string.
    pub fn render(&self, chunks: &[Chunk]) -> String {
        let capacity = chunks.iter().map(|c| c.content().len() + 32).sum();
        let mut out = String::with_capacity(capacity);
        for chunk in chunks {
            self.push_chunk(&mut out, chunk);
        }
        out
    }

    /// Render the chunks into any writer.
    pub fn write_to<W: Write>(&self, chunks: &[Chunk], writer: &mut W) -> io::Result<()> {
        let mut block = String::new();
        for chunk in chunks {
            block.clear();
            self.push_chunk(&mut block, chunk);
            writer.write_all(block.as_bytes())?;
        }
        Ok(())
    }

    fn push_chunk(&self, out: &mut String, chunk: &Chunk) {
        match chunk {
            Chunk::Metadata { content } => {
                out.push_str("---\n");
                out.push_str(content);
                out.push_str("\n---\n\n");
            }
            Chunk::Markdown { content } => {
                push_fence(out, "=", &self.config.raw_format, content);
            }
            Chunk::Code { language, content } => {
                push_fence(out, "", language, content);
            }
        }
    }
}

fn push_fence(out: &mut String, prefix: &str, tag: &str, content: &str) {
    out.push_str("```{");
    out.push_str(prefix);
    out.push_str(tag);
    out.push_str("}\n");
    out.push_str(content);
    out.push_str("\n```\n\n");
}

/// Render chunks with the default Typst raw format.
///
/// # Examples
///
/// ```
/// use typst_engine::{Chunk, render};
///
/// assert_eq!(render(&[Chunk::markdown("hi")]), "```{=typst}\nhi\n```\n\n");
/// assert_eq!(render(&[]), "");
/// ```
pub fn render(chunks: &[Chunk]) -> String {
    Renderer::new().render(chunks)
}
