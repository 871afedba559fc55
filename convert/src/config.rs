use crate::common::*;

/// Converter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub annotation: ProcessOptions,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

/// Input and output locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Directory holding the source images.
    pub image_dir: PathBuf,
    /// Directory holding the "Mask of <image>" label masks.
    pub mask_dir: PathBuf,
    /// Directory receiving the train/ and val/ outputs.
    pub output_dir: PathBuf,
}

/// Train/validation split options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of the pairs put into the validation subset.
    #[serde(default = "default_val_ratio")]
    pub val_ratio: f64,
    /// Seed of the split shuffle.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            val_ratio: default_val_ratio(),
            seed: default_seed(),
        }
    }
}

fn default_val_ratio() -> f64 {
    0.2
}

fn default_seed() -> u64 {
    42
}
