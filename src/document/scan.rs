//! Linear single-pass tokenizer for chunk boundaries.
//!
//! The scanner never looks at prose: it only locates frontmatter delimiters
//! and `` ```{...} `` fences, emitting a flat stream of [`Event`]s carrying
//! byte spans into the source text. Substring search is done with
//! `memchr::memmem`, so scanning is linear in the input length.
//!
//! Every span boundary sits next to an ASCII delimiter byte, so slicing the
//! source `str` with any span is always valid.

use std::ops::Range;

use memchr::memmem;

/// Frontmatter delimiter line.
pub const FRONTMATTER_DELIMITER: &[u8] = b"---";
/// Code fence marker.
pub const FENCE: &[u8] = b"```";
/// Fence marker followed by the start of a `{...}` info string.
const FENCE_OPEN: &[u8] = b"```{";

/// A chunk boundary found by the [`Scanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opening `---` line, including any blank lines that follow it.
    FrontmatterOpen(Range<usize>),
    /// Closing `---` line, including the newline that ends the body.
    FrontmatterClose(Range<usize>),
    /// `` ```{info} ``; `info` is the raw text between the braces.
    FenceOpen { span: Range<usize>, info: Range<usize> },
    /// The closing `` ``` `` of the most recent fence.
    FenceClose(Range<usize>),
}

impl Event {
    pub fn span(&self) -> Range<usize> {
        match self {
            Event::FrontmatterOpen(span)
            | Event::FrontmatterClose(span)
            | Event::FenceClose(span) => span.clone(),
            Event::FenceOpen { span, .. } => span.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Fences,
    Done,
}

/// Iterator over the chunk boundaries of a document.
///
/// Open events are only emitted once their matching close has been found,
/// so consumers always see balanced pairs. Unterminated constructs produce
/// no events at all.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: State,
    pending: Option<Event>,
    open_finder: memmem::Finder<'static>,
    close_finder: memmem::Finder<'static>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            state: State::Start,
            pending: None,
            open_finder: memmem::Finder::new(FENCE_OPEN),
            close_finder: memmem::Finder::new(FENCE),
        }
    }

    /// Locate the next complete fence at or after the cursor.
    ///
    /// Returns `(open span, info range, close span)`. A failed search means
    /// no later fence can match either, since every later opener would need
    /// a `}` and a closing marker further along the same text.
    fn next_fence(&self) -> Option<(Range<usize>, Range<usize>, Range<usize>)> {
        let start = self.pos + self.open_finder.find(&self.bytes[self.pos..])?;
        let info_start = start + FENCE_OPEN.len();
        let info_end = info_start + memchr::memchr(b'}', &self.bytes[info_start..])?;
        let body_start = info_end + 1;
        let close_start = body_start + self.close_finder.find(&self.bytes[body_start..])?;

        Some((
            start..body_start,
            info_start..info_end,
            close_start..close_start + FENCE.len(),
        ))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        if self.state == State::Start {
            self.state = State::Fences;
            if let Some((open, close)) = find_frontmatter(self.bytes) {
                self.pos = close.end;
                self.pending = Some(Event::FrontmatterClose(close));
                return Some(Event::FrontmatterOpen(open));
            }
        }

        if self.state == State::Done {
            return None;
        }

        match self.next_fence() {
            Some((span, info, close)) => {
                self.pos = close.end;
                self.pending = Some(Event::FenceClose(close));
                Some(Event::FenceOpen { span, info })
            }
            None => {
                self.state = State::Done;
                None
            }
        }
    }
}

/// Find a frontmatter block at the very start of `bytes`.
///
/// The opener is `---` followed by a whitespace run; the body starts after
/// the last newline of that run. The closer is the first line at or after
/// the body start consisting of `---` plus optional trailing blanks. The
/// body between them may be empty.
fn find_frontmatter(bytes: &[u8]) -> Option<(Range<usize>, Range<usize>)> {
    let rest = bytes.strip_prefix(FRONTMATTER_DELIMITER)?;
    let run = rest.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let body_start = FRONTMATTER_DELIMITER.len() + memchr::memrchr(b'\n', &rest[..run])? + 1;

    // Closing line directly after the opener: empty body
    if let Some(end) = delimiter_line_end(bytes, body_start) {
        return Some((0..body_start, body_start..end));
    }

    let finder = memmem::Finder::new(b"\n---");
    for newline in finder.find_iter(&bytes[body_start..]) {
        let newline = body_start + newline;
        if let Some(end) = delimiter_line_end(bytes, newline + 1) {
            return Some((0..body_start, newline..end));
        }
    }

    None
}

/// End of a delimiter line starting at `line_start`, excluding its newline.
fn delimiter_line_end(bytes: &[u8], line_start: usize) -> Option<usize> {
    let rest = bytes.get(line_start..)?.strip_prefix(FRONTMATTER_DELIMITER)?;
    let trailing = rest
        .iter()
        .take_while(|&&b| matches!(b, b' ' | b'\t' | b'\r'))
        .count();

    match rest.get(trailing) {
        None | Some(b'\n') => Some(line_start + FRONTMATTER_DELIMITER.len() + trailing),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn events(text: &str) -> Vec<Event> {
        Scanner::new(text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(events("").is_empty());
    }

    #[test]
    fn test_frontmatter_spans() {
        let text = "---\ntitle: A\n---\n\nhello\n";
        let evs = events(text);
        assert_eq!(
            evs,
            vec![Event::FrontmatterOpen(0..4), Event::FrontmatterClose(12..16)]
        );
        assert_eq!(&text[4..12], "title: A");
    }

    #[test]
    fn test_frontmatter_empty_body() {
        assert_eq!(
            events("---\n---\nbody"),
            vec![Event::FrontmatterOpen(0..4), Event::FrontmatterClose(4..7)]
        );
    }

    #[test]
    fn test_frontmatter_opener_with_trailing_whitespace() {
        let text = "---  \r\na: 1\n---\t\n";
        let evs = events(text);
        assert_eq!(evs.len(), 2);
        assert_eq!(&text[evs[0].span().end..evs[1].span().start], "a: 1");
    }

    #[test]
    fn test_frontmatter_requires_exact_lines() {
        assert!(events("--- title\na\n---\n").is_empty());
        assert!(events("---\na\n----\n").is_empty());
        assert!(events("---\na\n--- x\n").is_empty());
    }

    #[test]
    fn test_frontmatter_only_at_start() {
        assert!(events("\n---\na\n---\n").is_empty());
        assert!(events("text\n---\na\n---\n").is_empty());
    }

    #[test]
    fn test_frontmatter_skips_non_delimiter_dashes() {
        let text = "---\na\n---b\nc\n---\n";
        let evs = events(text);
        assert_eq!(evs.len(), 2);
        assert_eq!(&text[evs[0].span().end..evs[1].span().start], "a\n---b\nc");
    }

    #[test]
    fn test_unterminated_frontmatter() {
        assert!(events("---\ntitle: A\n").is_empty());
        assert!(events("---").is_empty());
    }

    #[test]
    fn test_fence_spans() {
        let text = "```{python}\nprint(1)\n```\n";
        let evs = events(text);
        assert_eq!(
            evs,
            vec![
                Event::FenceOpen {
                    span: 0..11,
                    info: 4..10
                },
                Event::FenceClose(21..24),
            ]
        );
        assert_eq!(&text[4..10], "python");
        assert_eq!(&text[11..21], "\nprint(1)\n");
    }

    #[test]
    fn test_fence_body_is_shortest() {
        let text = "```{r}a```b```";
        let evs = events(text);
        assert_eq!(evs.len(), 2);
        assert_eq!(evs[1], Event::FenceClose(7..10));
    }

    #[test]
    fn test_fence_without_braces_is_ignored() {
        assert!(events("```python\nx\n```\n").is_empty());
    }

    #[test]
    fn test_unterminated_fence() {
        assert!(events("```{r}\n1+1\n").is_empty());
        assert!(events("```{r\n1+1\n```").is_empty());
    }

    #[test]
    fn test_four_backticks_open() {
        let evs = events("````{r}x```");
        assert_eq!(
            evs[0],
            Event::FenceOpen {
                span: 1..7,
                info: 5..6
            }
        );
    }

    #[test]
    fn test_frontmatter_then_fences() {
        let text = "---\na: 1\n---\n```{r}\nx\n```\n```{python}y```";
        let kinds: Vec<_> = events(text)
            .into_iter()
            .map(|e| std::mem::discriminant(&e))
            .collect();
        assert_eq!(kinds.len(), 6);
    }

    #[test]
    fn test_fence_inside_frontmatter_is_not_scanned() {
        let text = "---\na: ```{r}\n---\nrest```";
        let evs = events(text);
        assert_eq!(evs.len(), 2);
        assert!(matches!(evs[1], Event::FrontmatterClose(_)));
    }

    proptest! {
        #[test]
        fn prop_events_are_ordered_and_in_bounds(text in "[-`{}a-c\n ]{0,64}") {
            let mut last = 0;
            for event in Scanner::new(&text) {
                let span = event.span();
                prop_assert!(span.start >= last);
                prop_assert!(span.end <= text.len());
                prop_assert!(text.is_char_boundary(span.start));
                prop_assert!(text.is_char_boundary(span.end));
                last = span.end;
            }
        }

        #[test]
        fn prop_fence_events_come_in_pairs(text in "[`{}a-c\n]{0,64}") {
            let evs: Vec<_> = Scanner::new(&text).collect();
            prop_assert_eq!(evs.len() % 2, 0);
            for pair in evs.chunks(2) {
                let is_open = matches!(pair[0], Event::FenceOpen { .. });
                let is_close = matches!(pair[1], Event::FenceClose(_));
                prop_assert!(is_open);
                prop_assert!(is_close);
            }
        }
    }
}
