// ============================================================================
// File: src/export.rs
// Plain-text download of generated content
// ============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::GenerationResult;

const FILE_SUFFIX: &str = "_blog.txt";

/// `{topic with spaces as underscores}_blog.txt`
///
/// Path separators also become underscores and leading dots are dropped, so
/// the name always stays a single entry inside the output directory.
pub fn file_name(topic: &str) -> String {
    let sanitized: String = topic
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();

    format!("{}{}", sanitized.trim_start_matches('.'), FILE_SUFFIX)
}

pub struct BlogExporter<'a> {
    topic: &'a str,
    result: &'a GenerationResult,
}

impl<'a> BlogExporter<'a> {
    pub fn new(topic: &'a str, result: &'a GenerationResult) -> Self {
        Self { topic, result }
    }

    /// Write the content into `dir` and return the file's path
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(file_name(self.topic));

        fs::write(&path, &self.result.content)
            .with_context(|| format!("Failed to write blog to {}", path.display()))?;

        Ok(path)
    }
}
