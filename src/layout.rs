//! Path resolution for dataset files.
//!
//! Joins relative dataset paths onto the data root and derives the concrete
//! path of a numbered block file from its filename template.

use crate::config::DataRoot;
use crate::constants::{BLOCK_PLACEHOLDER, BLOCK_WILDCARD};
use crate::error::{CatalogError, Result};
use std::path::{Path, PathBuf};

/// Fail unless the template holds exactly one block placeholder
pub fn check_pattern(template: &str) -> Result<()> {
    let placeholders = template.matches(BLOCK_PLACEHOLDER).count();
    if placeholders != 1 {
        return Err(CatalogError::InvalidPattern {
            pattern: template.to_string(),
            placeholders,
        });
    }
    Ok(())
}

/// Concrete path of block `index` for a filename template
pub fn block_path(root: &DataRoot, template: &str, index: usize) -> Result<PathBuf> {
    check_pattern(template)?;
    Ok(root.join(template.replacen(BLOCK_PLACEHOLDER, &index.to_string(), 1)))
}

/// Directory holding the block files of a template
pub fn block_directory(root: &DataRoot, template: &str) -> PathBuf {
    let joined = root.join(template);
    match joined.parent() {
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::new(),
    }
}

/// Glob pattern matching every block file of a template. The root is escaped
/// so directory names containing glob metacharacters match literally.
pub fn block_glob(root: &DataRoot, template: &str) -> Result<String> {
    check_pattern(template)?;
    let escaped_root = glob::Pattern::escape(&root.path().to_string_lossy());
    let file_pattern = glob::Pattern::escape(template).replacen(
        &glob::Pattern::escape(BLOCK_PLACEHOLDER),
        BLOCK_WILDCARD,
        1,
    );
    if escaped_root.is_empty() {
        return Ok(file_pattern);
    }
    Ok(Path::new(&escaped_root)
        .join(file_pattern)
        .to_string_lossy()
        .into_owned())
}
