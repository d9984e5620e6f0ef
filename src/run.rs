//! Batch driver: file discovery, parse-clean-write cycle, reporting
//!
//! This is the I/O shell around the cleanup passes. It walks the paths it
//! is given, parses each `.tf` file, runs [`clean_document`], and rewrites
//! the file in place only when the serialized bytes actually changed,
//! preserving the file's permissions. Files that fail to parse are logged
//! and skipped, never modified. Problems with individual files are logged
//! and do not abort the batch.

use crate::clean::clean_document;
use crate::hcl::{parse, serialize, Diagnostic};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Driver options, set from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Report files that need cleaning without writing anything.
    pub check: bool,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Cleaned and rewritten (or, in check mode, would be rewritten).
    Changed,
    /// Parsed fine; nothing to clean.
    Unchanged,
    /// Parse diagnostics; the file was left untouched.
    ParseFailed { diagnostics: Vec<Diagnostic> },
    /// An I/O problem; the file may not have been processed.
    IoError { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn changed(&self) -> bool {
        self.status == FileStatus::Changed
    }
}

/// Process one command-line argument: a file or a directory tree.
pub fn process_path(path: &Path, options: &Options, outcomes: &mut Vec<FileOutcome>) {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            eprintln!("Failed to stat {:?}: {}", path, err);
            outcomes.push(FileOutcome {
                path: path.to_path_buf(),
                status: FileStatus::IoError {
                    message: err.to_string(),
                },
            });
            return;
        }
    };

    if metadata.is_dir() {
        process_dir(path, options, outcomes);
    } else if metadata.is_file() {
        if path.extension().map(|e| e == "tf").unwrap_or(false) {
            process_file(path, options, outcomes);
        }
    } else {
        eprintln!("Skipping {:?}: not a regular file or directory", path);
    }
}

fn process_dir(path: &Path, options: &Options, outcomes: &mut Vec<FileOutcome>) {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Failed to read directory {:?}: {}", path, err);
            outcomes.push(FileOutcome {
                path: path.to_path_buf(),
                status: FileStatus::IoError {
                    message: err.to_string(),
                },
            });
            return;
        }
    };

    // Sorted traversal keeps log and report order reproducible.
    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    children.sort();

    for child in children {
        // Hidden directories (.git, .terraform) are never descended into.
        let hidden = child
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(false);
        if hidden && child.is_dir() {
            continue;
        }
        process_path(&child, options, outcomes);
    }
}

fn process_file(path: &Path, options: &Options, outcomes: &mut Vec<FileOutcome>) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read file {:?}: {}", path, err);
            outcomes.push(FileOutcome {
                path: path.to_path_buf(),
                status: FileStatus::IoError {
                    message: err.to_string(),
                },
            });
            return;
        }
    };

    let (mut body, diagnostics) = parse(&source);
    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            eprintln!("{:?}: {}", path, diagnostic);
        }
        outcomes.push(FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::ParseFailed { diagnostics },
        });
        return;
    }

    clean_document(&mut body);

    let cleaned = serialize(&body);
    if cleaned == source {
        outcomes.push(FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::Unchanged,
        });
        return;
    }

    if options.check {
        eprintln!("Would make changes to {:?}", path);
        outcomes.push(FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::Changed,
        });
        return;
    }

    if let Err(err) = write_in_place(path, &cleaned) {
        eprintln!("Failed to write to {:?}: {}", path, err);
        eprintln!("WARNING: file {:?} may be left with only partial content", path);
        outcomes.push(FileOutcome {
            path: path.to_path_buf(),
            status: FileStatus::IoError {
                message: err.to_string(),
            },
        });
        return;
    }

    eprintln!("Made changes to {:?}", path);
    outcomes.push(FileOutcome {
        path: path.to_path_buf(),
        status: FileStatus::Changed,
    });
}

/// Rewrite a file's contents, keeping its existing permissions.
fn write_in_place(path: &Path, contents: &str) -> std::io::Result<()> {
    let permissions = fs::metadata(path)?.permissions();
    fs::write(path, contents)?;
    fs::set_permissions(path, permissions)
}
