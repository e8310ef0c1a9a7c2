//! Destination directories and idempotent file placement.

use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::category::Bucket;
use crate::error::SortError;

/// Outcome of a single placement call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The file was copied into the bucket directory.
    Copied,
    /// The destination already existed; nothing was written.
    AlreadyExists,
}

/// The three bucket directories under a root, created up front.
#[derive(Debug)]
pub struct BucketDirs {
    horizontal: PathBuf,
    vertical: PathBuf,
    square: PathBuf,
}

impl BucketDirs {
    /// Ensure `root/horizontal`, `root/vertical` and `root/square` exist,
    /// creating them (and any missing parents) as needed. A no-op for
    /// directories that are already present.
    pub fn ensure(root: &Path) -> Result<Self, SortError> {
        for bucket in Bucket::ALL {
            let dir = root.join(bucket.dir_name());
            fs::create_dir_all(&dir).map_err(|e| SortError::io(dir, e))?;
        }

        Ok(Self {
            horizontal: root.join(Bucket::Horizontal.dir_name()),
            vertical: root.join(Bucket::Vertical.dir_name()),
            square: root.join(Bucket::Square.dir_name()),
        })
    }

    pub fn dir(&self, bucket: Bucket) -> &Path {
        match bucket {
            Bucket::Horizontal => &self.horizontal,
            Bucket::Vertical => &self.vertical,
            Bucket::Square => &self.square,
        }
    }

    /// Copy `src` into the bucket directory, keeping its file name.
    ///
    /// The copy happens only when the destination does not already exist, so
    /// repeated runs never overwrite or duplicate files. The original is
    /// never touched.
    pub fn place(&self, src: &Path, bucket: Bucket) -> Result<PlaceOutcome, SortError> {
        let file_name = src.file_name().ok_or_else(|| {
            SortError::io(
                src,
                std::io::Error::other("source path has no file name"),
            )
        })?;

        let destination = self.dir(bucket).join(file_name);
        if destination.exists() {
            return Ok(PlaceOutcome::AlreadyExists);
        }

        fs::copy(src, &destination).map_err(|e| SortError::io(destination, e))?;
        Ok(PlaceOutcome::Copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_creates_all_buckets() {
        let dir = tempfile::tempdir().unwrap();
        let dirs = BucketDirs::ensure(dir.path()).unwrap();

        for bucket in Bucket::ALL {
            assert!(dirs.dir(bucket).is_dir());
        }
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        BucketDirs::ensure(dir.path()).unwrap();
        BucketDirs::ensure(dir.path()).unwrap();

        assert!(dir.path().join("horizontal").is_dir());
    }

    #[test]
    fn test_place_copies_once() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("photo.jpg");
        fs::write(&src, b"original bytes").unwrap();

        let dirs = BucketDirs::ensure(dir.path()).unwrap();

        let first = dirs.place(&src, Bucket::Horizontal).unwrap();
        assert_eq!(first, PlaceOutcome::Copied);

        let copy = dir.path().join("horizontal").join("photo.jpg");
        assert_eq!(fs::read(&copy).unwrap(), b"original bytes");

        // Second placement is a no-op even if the copy has diverged.
        fs::write(&copy, b"modified").unwrap();
        let second = dirs.place(&src, Bucket::Horizontal).unwrap();
        assert_eq!(second, PlaceOutcome::AlreadyExists);
        assert_eq!(fs::read(&copy).unwrap(), b"modified");

        // The original is untouched throughout.
        assert_eq!(fs::read(&src).unwrap(), b"original bytes");
    }

    #[test]
    fn test_place_into_two_buckets() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("near-square.png");
        fs::write(&src, b"pixels").unwrap();

        let dirs = BucketDirs::ensure(dir.path()).unwrap();
        dirs.place(&src, Bucket::Vertical).unwrap();
        dirs.place(&src, Bucket::Square).unwrap();

        assert!(dir.path().join("vertical").join("near-square.png").exists());
        assert!(dir.path().join("square").join("near-square.png").exists());
    }
}
