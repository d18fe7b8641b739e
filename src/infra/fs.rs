//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for reading replay scripts from disk.
//!
//! 此模块提供从磁盘读取回放脚本的实用功能。

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a replay script into memory.
///
/// # Arguments
/// * `path` - Path to the script file
///
/// # Returns
/// The file content, or an error naming the path if it is missing or unreadable
pub fn read_script(path: &Path) -> Result<String> {
    if is_directory(path) {
        bail!("Replay script path is a directory: {}", path.display());
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script: {}", path.display()))
}

/// Checks if a path exists and is a directory.
///
/// # Arguments
/// * `path` - Path to check
///
/// # Returns
/// `true` if the path exists and is a directory, `false` otherwise
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
