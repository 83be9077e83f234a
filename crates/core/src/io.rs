//! Output directory provisioning.

use std::{fs::create_dir_all, path::Path};

use log::info;

use crate::error::{Error, Result};

/// What [`ensure_directory`] found or did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyPresent,
}

/// Create `path` and its parents unless something already exists there.
///
/// An existing regular file at `path` counts as present; the mismatch shows up
/// later as a write failure.
pub fn ensure_directory(path: &Path) -> Result<Provisioned> {
    if path.exists() {
        info!("{} is already present", path.display());
        return Ok(Provisioned::AlreadyPresent);
    }

    create_dir_all(path)
        .map_err(|source| Error::DirectoryCreation { path: path.to_path_buf(), source })?;
    info!("Created {}", path.display());
    Ok(Provisioned::Created)
}
