//! Two-pass aspect classification over a flat directory of images.
//!
//! The first pass probes and classifies every candidate to pre-size the
//! per-bucket progress bars; the second pass reclassifies each file and
//! copies it into its bucket directories. Reopening every image twice is an
//! accepted cost of keeping the passes independent.

pub mod category;
pub mod dest;
pub mod probe;
pub mod scan;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;

use crate::error::SortError;
use crate::utils::verbose_println;

pub use category::{classify, Bucket, Category, Dimensions};
pub use dest::{BucketDirs, PlaceOutcome};

#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Root directory holding the images to sort. Bucket subdirectories are
    /// created directly beneath it.
    pub root: PathBuf,
    /// Tag near-square images with their orientation and the square bucket.
    pub approximate: bool,
    pub verbose: bool,
}

/// Per-category file counts accumulated by the count pass.
pub type CategoryCounts = HashMap<Category, u64>;

/// Progress-bar totals per physical bucket, derived from [`CategoryCounts`].
///
/// Approximate categories contribute to their orientation bucket and to the
/// square bucket, so every placement in the second pass advances a bar that
/// accounted for it. This aggregation exists purely to size progress bars;
/// placement never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketTotals {
    pub horizontal: u64,
    pub vertical: u64,
    pub square: u64,
}

impl BucketTotals {
    pub fn from_counts(counts: &CategoryCounts) -> Self {
        let mut totals = Self::default();
        for (&category, &count) in counts {
            for &bucket in category.buckets() {
                *totals.slot(bucket) += count;
            }
        }
        totals
    }

    pub fn get(&self, bucket: Bucket) -> u64 {
        match bucket {
            Bucket::Horizontal => self.horizontal,
            Bucket::Vertical => self.vertical,
            Bucket::Square => self.square,
        }
    }

    fn slot(&mut self, bucket: Bucket) -> &mut u64 {
        match bucket {
            Bucket::Horizontal => &mut self.horizontal,
            Bucket::Vertical => &mut self.vertical,
            Bucket::Square => &mut self.square,
        }
    }
}

/// One progress stream per physical bucket.
pub struct BucketProgress {
    horizontal: ProgressBar,
    vertical: ProgressBar,
    square: ProgressBar,
}

impl BucketProgress {
    pub fn new(horizontal: ProgressBar, vertical: ProgressBar, square: ProgressBar) -> Self {
        Self {
            horizontal,
            vertical,
            square,
        }
    }

    /// Silent progress streams, for callers that do not render bars.
    pub fn hidden() -> Self {
        Self::new(
            ProgressBar::hidden(),
            ProgressBar::hidden(),
            ProgressBar::hidden(),
        )
    }

    pub fn bar(&self, bucket: Bucket) -> &ProgressBar {
        match bucket {
            Bucket::Horizontal => &self.horizontal,
            Bucket::Vertical => &self.vertical,
            Bucket::Square => &self.square,
        }
    }

    fn advance(&self, bucket: Bucket) {
        self.bar(bucket).inc(1);
    }

    pub fn finish(&self) {
        for bucket in Bucket::ALL {
            self.bar(bucket).finish();
        }
    }
}

/// Copied/skipped tallies for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketTally {
    pub copied: u64,
    pub skipped: u64,
}

/// Result of the placement pass.
#[derive(Debug, Default)]
pub struct PlacementSummary {
    pub horizontal: BucketTally,
    pub vertical: BucketTally,
    pub square: BucketTally,
    /// Number of candidate files processed.
    pub files: usize,
}

impl PlacementSummary {
    pub fn tally(&self, bucket: Bucket) -> BucketTally {
        match bucket {
            Bucket::Horizontal => self.horizontal,
            Bucket::Vertical => self.vertical,
            Bucket::Square => self.square,
        }
    }

    pub fn total_copied(&self) -> u64 {
        Bucket::ALL.iter().map(|&b| self.tally(b).copied).sum()
    }

    pub fn total_skipped(&self) -> u64 {
        Bucket::ALL.iter().map(|&b| self.tally(b).skipped).sum()
    }

    fn record(&mut self, bucket: Bucket, outcome: PlaceOutcome) {
        let tally = match bucket {
            Bucket::Horizontal => &mut self.horizontal,
            Bucket::Vertical => &mut self.vertical,
            Bucket::Square => &mut self.square,
        };
        match outcome {
            PlaceOutcome::Copied => tally.copied += 1,
            PlaceOutcome::AlreadyExists => tally.skipped += 1,
        }
    }
}

#[derive(Debug)]
pub struct ClassifyEngine {
    config: ClassifyConfig,
}

impl ClassifyEngine {
    /// Build an engine for the given root.
    ///
    /// Fails with [`SortError::PathNotFound`] before any filesystem mutation
    /// when the root does not exist or is not a directory.
    pub fn new(config: ClassifyConfig) -> Result<Self, SortError> {
        if !config.root.is_dir() {
            return Err(SortError::PathNotFound(config.root.clone()));
        }
        Ok(Self { config })
    }

    /// List the candidate files in the root, in directory order.
    pub fn discover_candidates(&self) -> Result<Vec<PathBuf>, SortError> {
        let candidates = scan::scan_root(&self.config.root)?;
        verbose_println(
            self.config.verbose,
            &format!("found {} candidate image(s)", candidates.len()),
        );
        Ok(candidates)
    }

    /// Probe and classify one file under the active mode.
    fn classify_file(&self, path: &Path) -> Result<Category, SortError> {
        let dimensions = probe::probe_dimensions(path)?;
        Ok(classify(dimensions, self.config.approximate))
    }

    /// Count pass: classify every candidate and accumulate per-category
    /// counts. Results are not memoized; the placement pass reclassifies.
    ///
    /// Any unreadable candidate aborts the pass.
    pub fn count_categories(&self, files: &[PathBuf]) -> Result<CategoryCounts, SortError> {
        let mut counts = CategoryCounts::new();
        for file in files {
            let category = self.classify_file(file)?;
            *counts.entry(category).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Placement pass: classify each candidate again, copy it into its
    /// bucket directories, and advance the matching progress stream(s) by
    /// exactly one per assignment.
    ///
    /// The bucket directories are created up front; the whole run aborts on
    /// the first unreadable file. Copies made before the failure remain.
    pub fn place_all(
        &self,
        files: &[PathBuf],
        progress: &BucketProgress,
    ) -> Result<PlacementSummary, SortError> {
        let dirs = BucketDirs::ensure(&self.config.root)?;
        let mut summary = PlacementSummary::default();

        for file in files {
            let category = self.classify_file(file)?;
            verbose_println(
                self.config.verbose,
                &format!("{} -> {:?}", file.display(), category),
            );

            for &bucket in category.buckets() {
                let outcome = dirs.place(file, bucket)?;
                summary.record(bucket, outcome);
                progress.advance(bucket);
            }
            summary.files += 1;
        }

        Ok(summary)
    }
}
