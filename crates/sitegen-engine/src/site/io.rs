use std::fs;
use std::path::{Path, PathBuf};

use super::SiteError;

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, SiteError> {
    if !path.exists() {
        return Err(SiteError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(io_error(path))
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(path, content).map_err(io_error(path))
}

/// Remove a directory tree if it exists
pub fn remove_dir_if_exists(path: &Path) -> Result<(), SiteError> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(io_error(path))?;
    }
    Ok(())
}

pub fn create_dir(path: &Path) -> Result<(), SiteError> {
    fs::create_dir_all(path).map_err(io_error(path))
}

/// Copy every file under `src` into `dest`, recursing into subdirectories.
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if !src.is_dir() {
        return Err(SiteError::NotFound(src.to_path_buf()));
    }
    create_dir(dest)?;

    let mut copied = 0;
    for from in sorted_entries(src)? {
        let Some(name) = from.file_name() else {
            continue;
        };
        let to = dest.join(name);
        if from.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            log::debug!(" * {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(io_error(&from))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, SiteError> {
    if !root.is_dir() {
        return Err(SiteError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
    let entries = fs::read_dir(dir).map_err(io_error(dir))?;
    let mut paths = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(dir))?;
    paths.sort();
    Ok(paths)
}
