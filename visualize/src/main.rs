use anyhow::{Context, Result};
use log::info;
use rand::prelude::*;
use std::path::PathBuf;
use structopt::StructOpt;
use visualize::OutlineColor;

#[derive(Debug, Clone, StructOpt)]
/// Overlay COCO polygon annotations on a randomly chosen image
struct Args {
    #[structopt(long, default_value = "coco_annotations.json")]
    /// COCO annotation file
    pub annotations_file: PathBuf,
    #[structopt(long)]
    /// directory holding the annotated images, defaults to the
    /// annotation file's directory
    pub image_dir: Option<PathBuf>,
    #[structopt(long, default_value = "annotated.png")]
    /// rendered output file
    pub output_file: PathBuf,
    #[structopt(long)]
    /// seed of the image choice, random when omitted
    pub seed: Option<u64>,
    #[structopt(long, default_value = "255,0,0")]
    /// outline color as decimal "r,g,b" components
    pub color: OutlineColor,
}

pub fn main() -> Result<()> {
    pretty_env_logger::init();

    // parse arguments
    let Args {
        annotations_file,
        image_dir,
        output_file,
        seed,
        color,
    } = Args::from_args();

    let image_dir = image_dir
        .or_else(|| annotations_file.parent().map(|dir| dir.to_owned()))
        .unwrap_or_else(|| PathBuf::from("."));
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // render one image with its annotations
    let (file_name, image) =
        visualize::render_random_image(&annotations_file, &image_dir, &mut rng, color.0)?;
    image
        .save(&output_file)
        .with_context(|| format!("failed to write '{}'", output_file.display()))?;
    info!("rendered '{}' to '{}'", file_name, output_file.display());

    Ok(())
}
