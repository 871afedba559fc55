mod common;
pub mod config;

use crate::{common::*, config::Config};

pub async fn start(config: Arc<Config>) -> Result<()> {
    let Config {
        dataset: ref dataset_config,
        ref split,
        ref annotation,
    } = *config;

    // pair images with their masks
    let pairs = scan_pairs(&dataset_config.image_dir, &dataset_config.mask_dir)?;
    info!(
        "found {} image/mask pairs in '{}'",
        pairs.len(),
        dataset_config.image_dir.display()
    );

    // split into train and validation subsets
    let TrainValSplit { train, val } = train_val_split(pairs, split.val_ratio, split.seed)?;
    info!(
        "split into {} training and {} validation pairs",
        train.len(),
        val.len()
    );

    // convert both subsets
    process_split(train, dataset_config.output_dir.join("train"), annotation).await?;
    process_split(val, dataset_config.output_dir.join("val"), annotation).await?;

    Ok(())
}
