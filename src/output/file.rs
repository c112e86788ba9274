//! File-target setup: expanded directory, `output.log`, append mode.

use super::{Destination, OutputError};
use crate::config::LoggerConfig;
use crate::internal;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Opens `<expanded directory>/output.log` for appending, creating the
/// directory (mode 0770) and the file (mode 0660) when missing.
///
/// A failed directory creation is retried once through `sudo -n`, which
/// never prompts.
///
/// # Errors
/// `CreateDir` when the directory still can't be created, `OpenFile` when the
/// file can't be opened.
pub fn open_log_file(config: &LoggerConfig) -> Result<(Destination, PathBuf), OutputError> {
    let dir = config.resolved_directory();
    let path = config.log_file_path();
    internal::debug("FILE", &format!("Resolved log file: {}", path.display()));

    if let Err(source) = ensure_dir(&dir) {
        return Err(OutputError::CreateDir { path: dir, source });
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o660);
    }

    match options.open(&path) {
        Ok(file) => Ok((Destination::file(file), path)),
        Err(source) => Err(OutputError::OpenFile { path, source }),
    }
}

fn ensure_dir(dir: &Path) -> io::Result<()> {
    ensure_dir_with(dir, create_dir, create_dir_elevated)
}

/// One plain attempt, then exactly one elevated attempt if the first failed.
fn ensure_dir_with(
    dir: &Path,
    create: impl FnOnce(&Path) -> io::Result<()>,
    create_elevated: impl FnOnce(&Path) -> io::Result<()>,
) -> io::Result<()> {
    let Err(e) = create(dir) else {
        return Ok(());
    };
    internal::debug(
        "FILE",
        &format!(
            "Creating {} failed ({e}), retrying with sudo",
            dir.display()
        ),
    );
    // The original error is more useful to report than sudo's.
    create_elevated(dir).map_err(|_| e)
}

#[cfg(unix)]
fn create_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o770).create(dir)
}

#[cfg(not(unix))]
fn create_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn create_dir_elevated(dir: &Path) -> io::Result<()> {
    use std::process::{Command, Stdio};

    let status = Command::new("sudo")
        .args(["-n", "mkdir", "-p", "-m", "0770"])
        .arg(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("sudo mkdir exited with {status}")))
    }
}

#[cfg(not(unix))]
fn create_dir_elevated(_dir: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "elevated directory creation is unix-only",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &Path) -> LoggerConfig {
        LoggerConfig {
            target: "file".to_string(),
            directory: dir.to_string_lossy().into_owned(),
            ..LoggerConfig::default()
        }
    }

    #[test]
    fn creates_nested_directory_and_file() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        let (_, path) = open_log_file(&config_in(&nested)).unwrap();
        assert_eq!(path, nested.join("output.log"));
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn file_mode_is_group_readable_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let (_, path) = open_log_file(&config_in(tmp.path())).unwrap();
        let mode = fs::metadata(path).unwrap().permissions().mode() & 0o777;
        // umask can only clear bits
        assert_eq!(mode & !0o660, 0);
    }

    #[test]
    fn existing_directory_needs_no_elevated_retry() {
        let tmp = TempDir::new().unwrap();
        let mut retried = false;
        ensure_dir_with(tmp.path(), create_dir, |_| {
            retried = true;
            Ok(())
        })
        .unwrap();
        assert!(!retried);
    }

    #[test]
    fn any_failure_is_retried_once_elevated() {
        let mut calls = 0;
        ensure_dir_with(
            Path::new("/logs"),
            |_| Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            |_| {
                calls += 1;
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(calls, 1);

        calls = 0;
        ensure_dir_with(
            Path::new("/logs"),
            |_| Err(io::Error::from(io::ErrorKind::NotADirectory)),
            |_| {
                calls += 1;
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn failed_retry_reports_the_first_error() {
        let err = ensure_dir_with(
            Path::new("/logs"),
            |_| Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            |_| Err(io::Error::other("sudo: a password is required")),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn directory_under_a_regular_file_fails_with_create_dir() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = open_log_file(&config_in(&blocker.join("logs"))).unwrap_err();
        assert!(matches!(err, OutputError::CreateDir { .. }));
    }
}
