use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aspect-sorter",
    about = "Sort a folder of images into horizontal, vertical and square buckets",
    long_about = "
Aspect Sorter

Scans the image files directly inside a directory (no recursion), classifies
each one by its width/height relationship, and copies it into the matching
subdirectory: horizontal/, vertical/ or square/. Originals are never moved,
renamed or deleted, and files that already exist in a bucket are left alone,
so repeated runs are safe.

With --approximate, images that are close to square (height/width between
0.9 and 1.1) are filed into their orientation bucket AND the square bucket,
so the square folder can be browsed either by exact shape or by \"roughly
square, which way does it lean\". A perfectly square image always goes into
square/ alone.

Recognized files: names ending in .jpg, .jpeg or .png (case-sensitive).

Example Usage:
  # Sort by exact orientation
  aspect-sorter ~/Pictures/wallpapers

  # Also tag near-square images into the square bucket
  aspect-sorter ~/Pictures/wallpapers --approximate

  # Show per-file classification while sorting
  aspect-sorter ~/Pictures/wallpapers -a -v"
)]
pub struct Args {
    /// Root directory containing the images to sort
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// File near-square images into their orientation bucket and square/
    #[arg(short = 'a', long = "approximate")]
    pub approximate: bool,

    /// Enable verbose output with per-file classification
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
