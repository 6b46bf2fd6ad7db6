//! Recursive directory scan: analyze every supported file beneath a root.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::analysis::analyzer::CodeAnalyzer;
use crate::analysis::languages::SourceKind;
use crate::report::AnalysisReport;

// Vendor and build output directories that never hold first-party sources.
const SKIP_DIRS: &[&str] = &["node_modules", "target", "__pycache__", "venv", "dist", "build"];

/// Analyze every Python/JavaScript file under `root`, in deterministic
/// (sorted-path) order. Unreadable files are logged and skipped.
pub fn scan_directory(
    analyzer: &CodeAnalyzer,
    root: &Path,
) -> Result<Vec<(PathBuf, AnalysisReport)>> {
    let mut files = Vec::new();
    collect_files(root, &mut files)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    files.sort();

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        match fs::read_to_string(&path) {
            Ok(content) => {
                let report = analyzer.analyze(&path.to_string_lossy(), &content);
                reports.push((path, report));
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            }
        }
    }
    Ok(reports)
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        // file_type() does not follow symlinks: a symlinked directory is
        // never recursed into, so link cycles cannot hang the walk
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            if name.starts_with('.') || SKIP_DIRS.contains(&name.as_ref()) {
                continue;
            }
            collect_files(&path, out)?;
        } else if SourceKind::from_path(&path.to_string_lossy()) != SourceKind::Unknown {
            out.push(path);
        }
    }
    Ok(())
}
