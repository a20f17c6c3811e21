//! Source map for managing source files and extracting lines for diagnostics.

use std::sync::Arc;

use crate::FileId;

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use nitro_util::SourceFile;
///
/// let file = SourceFile::new(0, "main.nitro", "i32 x = 1;");
/// assert_eq!(file.name(), "main.nitro");
/// assert_eq!(file.content(), "i32 x = 1;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::compute_line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn compute_line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the text of a line (1-based), without its trailing newline
    ///
    /// Returns `None` if the line number is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use nitro_util::SourceFile;
    ///
    /// let file = SourceFile::new(0, "main.nitro", "first\nsecond\n");
    /// assert_eq!(file.line_text(2), Some("second"));
    /// assert_eq!(file.line_text(9), None);
    /// ```
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let index = (line as usize).checked_sub(1)?;
        let start = *self.line_starts.get(index)?;
        let end = self
            .line_starts
            .get(index + 1)
            .map(|next| next - 1)
            .unwrap_or(self.content.len());
        let text = self.content.get(start..end)?;
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

/// Collection of source files indexed by [`FileId`]
///
/// # Examples
///
/// ```
/// use nitro_util::SourceMap;
///
/// let mut sources = SourceMap::new();
/// let id = sources.add("main.nitro", "i32 x = 1;");
/// assert_eq!(sources.get(id).map(|f| f.name()), Some("main.nitro"));
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

impl SourceMap {
    /// Create an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and return its identifier
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let id = self.files.len();
        self.files.push(SourceFile::new(id, name, content));
        FileId(id)
    }

    /// Look up a file by identifier
    pub fn get(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// Number of registered files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no files are registered
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
