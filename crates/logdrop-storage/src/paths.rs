//! Confinement of untrusted file names to a base directory.

use crate::traits::{StorageError, StorageResult};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve `relative` under `base`, guaranteeing the result stays inside `base`.
///
/// `relative` is derived from uploader input, so it is checked twice:
///
/// 1. Lexically: parent references (`..`), absolute paths and platform
///    prefixes are rejected, `.` components are dropped. Separators between
///    normal components are kept.
/// 2. Against the filesystem: the deepest already existing part of the
///    candidate is canonicalized and must still be under the canonical
///    `base`, so a symlink placed inside `base` cannot redirect the write.
///
/// Any violation is a [`StorageError::PathEscape`].
pub fn resolve_path(base: &Path, relative: &str) -> StorageResult<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(StorageError::PathEscape(format!(
                    "{:?} contains a parent directory reference",
                    relative
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(StorageError::PathEscape(format!(
                    "{:?} is an absolute path",
                    relative
                )));
            }
        }
    }

    if clean.as_os_str().is_empty() {
        return Err(StorageError::PathEscape(format!(
            "{:?} does not name a file",
            relative
        )));
    }

    let candidate = base.join(&clean);
    check_resolved(base, &candidate, relative)?;
    Ok(candidate)
}

fn check_resolved(base: &Path, candidate: &Path, relative: &str) -> StorageResult<()> {
    let base_canonical = match base.canonicalize() {
        Ok(path) => path,
        // Nothing below a missing base can exist yet, so nothing can redirect.
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(StorageError::IoError(e)),
    };

    for ancestor in candidate.ancestors() {
        if ancestor == base {
            return Ok(());
        }

        match std::fs::symlink_metadata(ancestor) {
            Ok(_) => {
                // Dangling symlinks fail to canonicalize; writing through one
                // would create its target wherever it points.
                let resolved = ancestor.canonicalize().map_err(|_| {
                    StorageError::PathEscape(format!("{:?} resolves to an unknown location", relative))
                })?;

                if resolved.starts_with(&base_canonical) {
                    return Ok(());
                }
                return Err(StorageError::PathEscape(format!(
                    "{:?} resolves outside {}",
                    relative,
                    base.display()
                )));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(StorageError::IoError(e)),
        }
    }

    Ok(())
}
