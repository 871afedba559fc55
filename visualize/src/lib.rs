//! Renders COCO polygon annotations over a source image for manual
//! inspection.

use anyhow::{bail, format_err, Context, Result};
use coco_format::CocoDataset;
use image::{Rgb, RgbImage};
use imageproc::drawing;
use rand::prelude::*;
use std::{path::Path, str::FromStr};

/// An outline color given as decimal "r,g,b" components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineColor(pub Rgb<u8>);

impl FromStr for OutlineColor {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self> {
        let components: Vec<u8> = text
            .split(',')
            .map(|part| part.trim().parse())
            .collect::<Result<_, _>>()
            .with_context(|| format!("invalid color '{}', expected 'r,g,b'", text))?;
        match components[..] {
            [r, g, b] => Ok(Self(Rgb([r, g, b]))),
            _ => bail!("invalid color '{}', expected 'r,g,b'", text),
        }
    }
}

/// Draws every polygon annotated on the image named `file_name` as an
/// unfilled outline.
///
/// Fails when no image record of `dataset` matches `file_name`. An
/// image without annotations is left untouched.
pub fn draw_annotations(
    image: &mut RgbImage,
    dataset: &CocoDataset,
    file_name: &str,
    color: Rgb<u8>,
) -> Result<()> {
    let record = dataset
        .image_by_file_name(file_name)
        .ok_or_else(|| format_err!("no image record matches file '{}'", file_name))?;

    for ann in dataset.annotations_for_image(record.id) {
        for ring in &ann.segmentation {
            draw_ring(image, ring, color);
        }
    }

    Ok(())
}

fn draw_ring(image: &mut RgbImage, ring: &[f64], color: Rgb<u8>) {
    let points: Vec<(f32, f32)> = ring
        .chunks_exact(2)
        .map(|pair| (pair[0] as f32, pair[1] as f32))
        .collect();

    for index in 0..points.len() {
        let start = points[index];
        let end = points[(index + 1) % points.len()];
        drawing::draw_line_segment_mut(image, start, end, color);
    }
}

/// Loads the annotation file, picks one image record with `rng` and
/// renders its annotations over the source image found in `image_dir`.
///
/// Returns the chosen file name together with the rendered image.
/// Fails when the annotation file holds no image records or the chosen
/// image file is missing from `image_dir`.
pub fn render_random_image<R>(
    annotations_file: &Path,
    image_dir: &Path,
    rng: &mut R,
    color: Rgb<u8>,
) -> Result<(String, RgbImage)>
where
    R: Rng,
{
    let dataset = CocoDataset::open(annotations_file)?;
    let record = dataset.images.choose(rng).ok_or_else(|| {
        format_err!(
            "'{}' contains no image records",
            annotations_file.display()
        )
    })?;

    let image_path = image_dir.join(&record.file_name);
    let mut image = image::open(&image_path)
        .with_context(|| format!("could not read image '{}'", image_path.display()))?
        .to_rgb8();

    let file_name = record.file_name.clone();
    draw_annotations(&mut image, &dataset, &file_name, color)?;

    Ok((file_name, image))
}
