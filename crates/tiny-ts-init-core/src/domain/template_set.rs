use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;

use crate::domain::error::DomainError;

/// Content of a single template file.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateContent {
    /// Written verbatim.
    Text(Cow<'static, str>),
    /// Pretty-printed with two-space indentation at write time.
    Json(Value),
}

impl TemplateContent {
    /// Render to the exact bytes written to disk.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Text(text) => Ok(text.to_string()),
            Self::Json(value) => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
        }
    }
}

/// One `(relative path, content)` pair of a [`TemplateSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    pub(crate) path: PathBuf,
    pub(crate) content: TemplateContent,
}

impl TemplateEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &TemplateContent {
        &self.content
    }

    /// Render this entry, attributing serialization failures to its path.
    pub fn render(&self) -> Result<String, DomainError> {
        self.content
            .render()
            .map_err(|e| DomainError::Serialization {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })
    }
}

/// The fixed, ordered collection of files written by every run.
///
/// Entries are kept in insertion order; writes happen in that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSet {
    entries: Vec<TemplateEntry>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, content: TemplateContent) {
        self.entries.push(TemplateEntry {
            path: path.into(),
            content,
        });
    }

    pub fn with_text(
        mut self,
        path: impl Into<PathBuf>,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.add(path, TemplateContent::Text(text.into()));
        self
    }

    pub fn with_json(mut self, path: impl Into<PathBuf>, value: Value) -> Self {
        self.add(path, TemplateContent::Json(value));
        self
    }

    /// Check that the set is non-empty and every path is relative, stays
    /// inside the project directory, and appears once.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyTemplateSet);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = &entry.path;
            let path_str = path.display().to_string();

            if path.is_absolute() || path.has_root() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if path.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(DomainError::PathEscapesRoot { path: path_str });
            }
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }

    /// Distinct parent directories that must exist before writing, in
    /// first-seen order. Top-level files contribute nothing.
    pub fn directories(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for parent in self.paths().filter_map(Path::parent) {
            if !parent.as_os_str().is_empty() && !dirs.contains(&parent) {
                dirs.push(parent);
            }
        }
        dirs
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a TemplateEntry;
    type IntoIter = std::slice::Iter<'a, TemplateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
