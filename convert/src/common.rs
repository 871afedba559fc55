pub use anyhow::{Context as _, Result};
pub use log::info;
pub use mask2coco::{process_split, scan_pairs, train_val_split, ProcessOptions, TrainValSplit};
pub use serde::{Deserialize, Serialize};
pub use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};
