//! Converts pixel-labeled mask images into COCO object-detection
//! datasets.
//!
//! The pipeline pairs image files with their label masks by naming
//! convention, splits the pairs into training and validation subsets,
//! extracts boundary polygons per label and writes one COCO annotation
//! file per subset alongside the copied images.

mod common;
pub mod dataset;
pub mod process;
pub mod split;

pub use dataset::{scan_pairs, ImageMaskPair};
pub use process::{assemble, process_pair, process_split, PairRecord, ProcessOptions};
pub use split::{train_val_split, TrainValSplit};
