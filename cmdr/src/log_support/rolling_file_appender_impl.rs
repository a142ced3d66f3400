// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Creates the log file (and its folder) if needed. The file is never rotated, since a
/// single `colorconv` session writes very little.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
/// - The parent directory can't be created
pub fn try_create(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    if !parent.as_os_str().is_empty() {
        std::fs::create_dir_all(parent).map_err(|error| {
            miette::miette!("Can't create log folder {}: {error}", parent.display())
        })?;
    }

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_parent_folder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("colorconv.log");

        let _appender = try_create(&path.display().to_string()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
    }
}
