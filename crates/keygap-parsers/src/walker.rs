use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::treesitter::detect_language;

pub const IGNORE_FILENAME: &str = ".keygapignore";

pub struct WalkEntry {
    pub path: PathBuf,
    pub language: String,
}

pub struct FileWalker {
    root: PathBuf,
    excludes: GlobSet,
}

impl FileWalker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            excludes: GlobSet::empty(),
        }
    }

    /// Skip files whose root-relative path matches any of `patterns`.
    /// Invalid globs are dropped with a warning.
    pub fn with_excludes(mut self, patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => tracing::warn!(pattern = %pattern, error = %e, "skipping invalid ignore pattern"),
            }
        }
        self.excludes = builder.build().unwrap_or_else(|_| GlobSet::empty());
        self
    }

    pub fn walk(&self) -> Vec<WalkEntry> {
        let mut entries = Vec::new();

        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .add_custom_ignore_filename(IGNORE_FILENAME)
            .filter_entry(|e| e.file_name() != "node_modules")
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "walk error");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);
            if self.excludes.is_match(relative) {
                continue;
            }
            if let Some(lang) = detect_language(&path) {
                entries.push(WalkEntry {
                    path,
                    language: lang.to_string(),
                });
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries
    }
}
