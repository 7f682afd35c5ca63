//! Execution engine glue for a document-processing host.
//!
//! The engine is one configuration record ([`EngineConfig`]) plus stateless
//! functions. The host handle is passed into [`target`] and [`process`]
//! explicitly; nothing is captured globally.
//!
//! # Pipeline
//!
//! 1. [`target`] loads the document through the [`Host`]
//! 2. [`execute`] chunks it, enforces the extension policy via [`check`],
//!    and renders the converted document
//!
//! ```
//! use std::path::Path;
//! use typst_engine::engine::{EngineConfig, MemoryHost, process};
//!
//! let host = MemoryHost::new().with_file("doc.qmd", "hello\n```{r}\n1+1\n```\n");
//! let result = process(&host, &EngineConfig::default(), Path::new("doc.qmd"))?;
//! assert!(result.markdown.starts_with("```{=typst}\nhello"));
//! # Ok::<(), typst_engine::Error>(())
//! ```

mod extension;
mod host;

pub use extension::{
    DocumentKind, EXECUTABLE_EXTENSIONS, ExtensionTable, MARKDOWN_EXTENSIONS, extension_of,
};
pub use host::{FsHost, Host, MemoryHost};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::document::{Chunk, RenderConfig, Renderer, frontmatter, has_executable_code, parse};
use crate::error::{Error, Result};

/// Name the engine registers under.
pub const ENGINE_NAME: &str = "typst";

/// Engine descriptor and processing options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub name: String,
    /// Extension used for new documents.
    pub default_ext: String,
    pub render: RenderConfig,
    pub extensions: ExtensionTable,
    pub can_freeze: bool,
    pub generates_figures: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: ENGINE_NAME.to_string(),
            default_ext: EXECUTABLE_EXTENSIONS[0].to_string(),
            render: RenderConfig::default(),
            extensions: ExtensionTable::default(),
            can_freeze: false,
            generates_figures: false,
        }
    }
}

impl EngineConfig {
    pub fn with_raw_format(mut self, format: impl Into<String>) -> Self {
        self.render.raw_format = format.into();
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionTable) -> Self {
        self.extensions = extensions;
        self
    }

    /// Every extension the engine accepts.
    pub fn valid_extensions(&self) -> Vec<&str> {
        self.extensions.valid_extensions()
    }

    /// The engine claims plain markdown files; executable documents are
    /// left to engines that can run their code.
    pub fn claims_file(&self, path: &Path) -> bool {
        self.extensions.classify(path) == DocumentKind::Markdown
    }

    /// The engine executes no language itself.
    pub fn claims_language(&self, _language: &str) -> bool {
        false
    }

    pub fn default_yaml(&self) -> Vec<String> {
        Vec::new()
    }

    pub fn default_content(&self) -> Vec<String> {
        Vec::new()
    }

    pub fn dependencies(&self) -> Dependencies {
        Dependencies::default()
    }
}

/// A loaded document ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionTarget {
    pub source: PathBuf,
    pub input: PathBuf,
    pub markdown: String,
    /// Raw frontmatter body, if the document has one.
    pub metadata: Option<String>,
}

/// Output of [`execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteResult {
    pub engine: String,
    /// The converted document.
    pub markdown: String,
    pub supporting: Vec<PathBuf>,
    pub filters: Vec<String>,
}

/// Extra includes an engine contributes to the render. Always empty here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependencies {
    pub includes: HashMap<String, Vec<String>>,
}

/// Build an [`ExecutionTarget`] for `path`.
///
/// When `markdown` is `None` the document text is loaded from the host.
pub fn target<H: Host + ?Sized>(
    host: &H,
    path: &Path,
    markdown: Option<String>,
) -> Result<ExecutionTarget> {
    let markdown = match markdown {
        Some(markdown) => markdown,
        None => host.read_source(path)?,
    };
    let metadata = frontmatter(&parse(&markdown)).map(str::to_string);

    Ok(ExecutionTarget {
        source: path.to_path_buf(),
        input: path.to_path_buf(),
        markdown,
        metadata,
    })
}

/// Reject code chunks in documents restricted to plain markdown.
pub fn check(config: &EngineConfig, input: &Path, chunks: &[Chunk]) -> Result<()> {
    if config.extensions.classify(input) == DocumentKind::Markdown && has_executable_code(chunks)
    {
        return Err(Error::ExecutableCode {
            path: input.to_path_buf(),
        });
    }
    Ok(())
}

/// Chunk, validate and convert a loaded document.
pub fn execute(config: &EngineConfig, target: &ExecutionTarget) -> Result<ExecuteResult> {
    let chunks = parse(&target.markdown);
    debug!(
        input = %target.input.display(),
        chunks = chunks.len(),
        code = chunks.iter().filter(|c| c.is_code()).count(),
        "parsed chunks"
    );

    check(config, &target.input, &chunks)?;

    let markdown = Renderer::with_config(config.render.clone()).render(&chunks);

    Ok(ExecuteResult {
        engine: config.name.clone(),
        markdown,
        supporting: Vec::new(),
        filters: Vec::new(),
    })
}

/// Load `path` from the host and [`execute`] it.
pub fn process<H: Host + ?Sized>(
    host: &H,
    config: &EngineConfig,
    path: &Path,
) -> Result<ExecuteResult> {
    let target = target(host, path, None)?;
    execute(config, &target)
}
