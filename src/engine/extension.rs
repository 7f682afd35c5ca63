//! File extension classification.
//!
//! Extensions are data, not logic: the host may replace either list. All
//! comparisons are case-insensitive and use dot-prefixed extensions.

use std::path::Path;

/// Plain markdown variants, which must not contain executable code.
pub const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

/// Composite document extensions, which may contain executable code.
pub const EXECUTABLE_EXTENSIONS: &[&str] = &[".qmd"];

/// Policy branch selected by a document's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Non-executable markdown; code chunks are a usage error.
    Markdown,
    /// Executable document; code chunks are allowed.
    Executable,
    /// Any other extension, or none.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionTable {
    markdown: Vec<String>,
    executable: Vec<String>,
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self {
            markdown: MARKDOWN_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            executable: EXECUTABLE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ExtensionTable {
    /// Create a table from explicit extension lists.
    pub fn new<M, E>(markdown: M, executable: E) -> Self
    where
        M: IntoIterator,
        M::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            markdown: markdown.into_iter().map(|e| normalize(e.as_ref())).collect(),
            executable: executable.into_iter().map(|e| normalize(e.as_ref())).collect(),
        }
    }

    pub fn markdown(&self) -> &[String] {
        &self.markdown
    }

    pub fn executable(&self) -> &[String] {
        &self.executable
    }

    /// Classify a bare extension such as `".MD"` or `"qmd"`.
    pub fn classify_extension(&self, ext: &str) -> DocumentKind {
        let ext = normalize(ext);
        if self.markdown.contains(&ext) {
            DocumentKind::Markdown
        } else if self.executable.contains(&ext) {
            DocumentKind::Executable
        } else {
            DocumentKind::Other
        }
    }

    /// Classify a path by its final extension.
    pub fn classify(&self, path: &Path) -> DocumentKind {
        match extension_of(path) {
            Some(ext) => self.classify_extension(&ext),
            None => DocumentKind::Other,
        }
    }

    /// Executable extensions followed by markdown extensions.
    pub fn valid_extensions(&self) -> Vec<&str> {
        self.executable
            .iter()
            .chain(&self.markdown)
            .map(String::as_str)
            .collect()
    }
}

/// Lowercase, dot-prefixed extension of `path`.
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(normalize(ext))
}

fn normalize(ext: &str) -> String {
    let ext = ext.trim().to_ascii_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let table = ExtensionTable::default();
        assert_eq!(table.classify(Path::new("doc.md")), DocumentKind::Markdown);
        assert_eq!(
            table.classify(Path::new("doc.markdown")),
            DocumentKind::Markdown
        );
        assert_eq!(
            table.classify(Path::new("doc.qmd")),
            DocumentKind::Executable
        );
        assert_eq!(table.classify(Path::new("doc.typ")), DocumentKind::Other);
        assert_eq!(table.classify(Path::new("README")), DocumentKind::Other);
    }

    #[test]
    fn test_case_insensitive() {
        let table = ExtensionTable::default();
        assert_eq!(table.classify(Path::new("DOC.MD")), DocumentKind::Markdown);
        assert_eq!(table.classify_extension("QMD"), DocumentKind::Executable);
    }

    #[test]
    fn test_only_final_extension_counts() {
        let table = ExtensionTable::default();
        assert_eq!(
            table.classify(Path::new("notes.md.qmd")),
            DocumentKind::Executable
        );
    }

    #[test]
    fn test_custom_table_normalizes() {
        let table = ExtensionTable::new(["txt", ".MD"], ["Rmd"]);
        assert_eq!(table.markdown(), [".txt", ".md"]);
        assert_eq!(table.executable(), [".rmd"]);
        assert_eq!(table.classify(Path::new("a.Rmd")), DocumentKind::Executable);
        assert_eq!(table.classify(Path::new("a.qmd")), DocumentKind::Other);
    }

    #[test]
    fn test_valid_extensions_order() {
        assert_eq!(
            ExtensionTable::default().valid_extensions(),
            vec![".qmd", ".md", ".markdown"]
        );
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b.QMD")), Some(".qmd".to_string()));
        assert_eq!(extension_of(Path::new("a/b")), None);
    }
}
