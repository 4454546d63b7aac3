//! ZIP container reading.
//!
//! ZIP support is self-contained: the `zip` crate parses the central
//! directory and inflates entries without any external program.

use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::Result;

/// An open, read-only ZIP container.
pub struct ZipHandle {
    path: PathBuf,
    archive: zip::ZipArchive<File>,
    names: Vec<String>,
}

impl ZipHandle {
    /// Opens a ZIP file and caches its member list in central-directory
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::Io` when the file cannot be read and
    /// `ExtractionError::InvalidArchive` when the container is corrupt.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| invalid(path, &e))?;

        let mut names = Vec::with_capacity(archive.len());
        for index in 0..archive.len() {
            let entry = archive.by_index_raw(index).map_err(|e| invalid(path, &e))?;
            names.push(entry.name().to_owned());
        }

        Ok(Self {
            path: path.to_path_buf(),
            archive,
            names,
        })
    }

    /// Member paths in container order. Safe to call repeatedly.
    #[must_use]
    pub fn member_names(&self) -> &[String] {
        &self.names
    }

    /// Writes the requested member subset into `dest`, preserving
    /// internal directory structure. Returns the number of file
    /// entries written.
    pub fn extract_members(&mut self, dest: &Path, members: &BTreeSet<String>) -> Result<usize> {
        let mut written = 0;
        for index in 0..self.archive.len() {
            let mut entry = self
                .archive
                .by_index(index)
                .map_err(|e| invalid(&self.path, &e))?;
            let name = entry.name().to_owned();
            if !members.contains(&name) {
                continue;
            }

            let out = dest.join(&name);
            if entry.is_dir() {
                fs::create_dir_all(&out)?;
                continue;
            }
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let mut file = File::create(&out)?;
            io::copy(&mut entry, &mut file)?;
            written += 1;
        }
        Ok(written)
    }
}

fn invalid(path: &Path, err: &zip::result::ZipError) -> ExtractionError {
    ExtractionError::InvalidArchive {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::write_test_zip;
    use tempfile::TempDir;

    #[test]
    fn test_member_names_in_order() {
        let temp = TempDir::new().unwrap();
        let archive = write_test_zip(
            &temp.path().join("a.zip"),
            vec![("z.txt", b"z"), ("a.txt", b"a"), ("dir/m.txt", b"m")],
        );
        let handle = ZipHandle::open(&archive).unwrap();
        assert_eq!(handle.member_names(), &["z.txt", "a.txt", "dir/m.txt"]);
    }

    #[test]
    fn test_extract_subset_only() {
        let temp = TempDir::new().unwrap();
        let archive = write_test_zip(
            &temp.path().join("a.zip"),
            vec![("keep.txt", b"keep"), ("skip.txt", b"skip")],
        );
        let mut handle = ZipHandle::open(&archive).unwrap();
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();

        let members: BTreeSet<String> = ["keep.txt".to_owned()].into();
        let written = handle.extract_members(&dest, &members).unwrap();

        assert_eq!(written, 1);
        assert!(dest.join("keep.txt").exists());
        assert!(!dest.join("skip.txt").exists());
    }

    #[test]
    fn test_extract_creates_intermediate_dirs() {
        let temp = TempDir::new().unwrap();
        let archive = write_test_zip(
            &temp.path().join("a.zip"),
            vec![("a/b/c/deep.txt", b"deep")],
        );
        let mut handle = ZipHandle::open(&archive).unwrap();
        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();

        let members: BTreeSet<String> = ["a/b/c/deep.txt".to_owned()].into();
        handle.extract_members(&dest, &members).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("a/b/c/deep.txt")).unwrap(),
            "deep"
        );
    }

    #[test]
    fn test_open_corrupt_zip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.zip");
        // Valid local-file magic, garbage after: sniffing would accept
        // this, the central directory read must not.
        fs::write(&path, b"PK\x03\x04garbage").unwrap();
        assert!(matches!(
            ZipHandle::open(&path),
            Err(ExtractionError::InvalidArchive { .. })
        ));
    }
}
