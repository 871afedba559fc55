use crate::common::*;
use crate::dataset::ImageMaskPair;

/// Train/validation partition of the paired samples.
#[derive(Debug, Clone)]
pub struct TrainValSplit {
    pub train: Vec<ImageMaskPair>,
    pub val: Vec<ImageMaskPair>,
}

/// Splits `pairs` into training and validation subsets.
///
/// The shuffle is driven by `seed` alone, so the membership of both
/// subsets is reproducible across runs. The validation subset receives
/// `ceil(n * val_ratio)` samples. No stratification is applied.
pub fn train_val_split(
    mut pairs: Vec<ImageMaskPair>,
    val_ratio: f64,
    seed: u64,
) -> Result<TrainValSplit> {
    ensure!(
        (0.0..1.0).contains(&val_ratio),
        "val_ratio must lie in [0, 1), but got {}",
        val_ratio
    );

    let mut rng = StdRng::seed_from_u64(seed);
    pairs.shuffle(&mut rng);

    let num_val = (pairs.len() as f64 * val_ratio).ceil() as usize;
    let train = pairs.split_off(num_val);

    Ok(TrainValSplit { train, val: pairs })
}
