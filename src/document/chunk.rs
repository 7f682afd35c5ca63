//! Typed document segments.
//!
//! A parsed document is a plain `Vec<Chunk>`: order is the only relationship
//! between chunks and it determines reassembly order. At most one
//! [`Chunk::Metadata`] exists, and only in first position.

/// One typed segment of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Chunk {
    /// Frontmatter body, delimiters stripped.
    Metadata { content: String },
    /// Prose between or around fences, stored untrimmed.
    Markdown { content: String },
    /// Body of a `` ```{language} `` fence, both fields trimmed.
    Code { language: String, content: String },
}

/// Discriminant of a [`Chunk`], for callers that only branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    Metadata,
    Markdown,
    Code,
}

impl Chunk {
    pub fn metadata(content: impl Into<String>) -> Self {
        Chunk::Metadata {
            content: content.into(),
        }
    }

    pub fn markdown(content: impl Into<String>) -> Self {
        Chunk::Markdown {
            content: content.into(),
        }
    }

    pub fn code(language: impl Into<String>, content: impl Into<String>) -> Self {
        Chunk::Code {
            language: language.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> ChunkKind {
        match self {
            Chunk::Metadata { .. } => ChunkKind::Metadata,
            Chunk::Markdown { .. } => ChunkKind::Markdown,
            Chunk::Code { .. } => ChunkKind::Code,
        }
    }

    /// The text carried by the chunk, whatever its variant.
    pub fn content(&self) -> &str {
        match self {
            Chunk::Metadata { content } | Chunk::Markdown { content } => content,
            Chunk::Code { content, .. } => content,
        }
    }

    /// Language tag for code chunks.
    pub fn language(&self) -> Option<&str> {
        match self {
            Chunk::Code { language, .. } => Some(language.as_str()),
            _ => None,
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Chunk::Code { .. })
    }
}

/// Whether any chunk requires code execution.
///
/// The language tag is irrelevant: the presence of a code chunk alone marks
/// the document as executable.
pub fn has_executable_code(chunks: &[Chunk]) -> bool {
    chunks.iter().any(Chunk::is_code)
}

/// Raw frontmatter body of a parsed document, if it had one.
pub fn frontmatter(chunks: &[Chunk]) -> Option<&str> {
    match chunks.first() {
        Some(Chunk::Metadata { content }) => Some(content.as_str()),
        _ => None,
    }
}
