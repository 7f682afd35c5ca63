//! Chunker: raw document text → ordered chunk list.
//!
//! [`parse`] folds the [`Scanner`] event stream into [`Chunk`]s. Everything
//! between two events that is not a delimiter becomes prose, so malformed
//! fences and frontmatter degrade into markdown instead of failing.

use tracing::trace;

use super::chunk::Chunk;
use super::scan::{Event, Scanner};

/// Split a document into metadata, markdown and code chunks.
///
/// Never fails: unterminated fences and frontmatter are kept as markdown.
/// Markdown chunks keep their surrounding whitespace; whitespace-only spans
/// are dropped entirely.
///
/// # Examples
///
/// ```
/// use typst_engine::{Chunk, parse};
///
/// let chunks = parse("---\ntitle: A\n---\n\nhello\n");
/// assert_eq!(chunks[0], Chunk::metadata("title: A"));
/// assert_eq!(chunks[1].content().trim(), "hello");
///
/// let chunks = parse("```{python}\nprint(1)\n```\n");
/// assert_eq!(chunks, vec![Chunk::code("python", "print(1)")]);
/// ```
pub fn parse(raw: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    // End of the last consumed delimiter
    let mut cursor = 0;
    // Body start of the construct opened by the last open event
    let mut body_start = 0;
    let mut language = "";

    for event in Scanner::new(raw) {
        trace!(?event, "scan");
        match event {
            Event::FrontmatterOpen(span) => {
                body_start = span.end;
            }
            Event::FrontmatterClose(span) => {
                chunks.push(Chunk::metadata(&raw[body_start..span.start]));
                cursor = span.end;
            }
            Event::FenceOpen { span, info } => {
                push_markdown(&mut chunks, &raw[cursor..span.start]);
                language = raw[info].trim();
                body_start = span.end;
            }
            Event::FenceClose(span) => {
                chunks.push(Chunk::code(language, raw[body_start..span.start].trim()));
                cursor = span.end;
            }
        }
    }

    push_markdown(&mut chunks, &raw[cursor..]);
    chunks
}

/// Emit a markdown chunk unless the span is blank.
fn push_markdown(chunks: &mut Vec<Chunk>, text: &str) {
    if !text.trim().is_empty() {
        chunks.push(Chunk::markdown(text));
    }
}
