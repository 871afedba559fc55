//! The COCO object-detection annotation format.
//!
//! The subset of the schema produced by the converter and consumed by the
//! visualizer: `images`, `annotations` and `categories` lists with
//! cross-referencing ids.
//!
//! <http://cocodataset.org/#format-data>

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// File name of the annotation file written next to the exported images.
pub const ANNOTATION_FILE_NAME: &str = "coco_annotations.json";

/// An entry of the `images` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: u32,
    pub file_name: String,
    pub height: u32,
    pub width: u32,
}

/// An entry of the `annotations` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub id: u32,
    pub image_id: u32,
    pub category_id: u32,
    /// Flattened polygon rings, `[[x1, y1, x2, y2, ...]]`.
    pub segmentation: Vec<Vec<f64>>,
    pub area: f64,
    /// `[x, y, width, height]` in pixels.
    pub bbox: [f64; 4],
    pub iscrowd: u32,
}

/// An entry of the `categories` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoCategory {
    pub id: u32,
    pub name: String,
}

/// A complete annotation file.
///
/// Every `annotations[i].image_id` refers to an `images[j].id` within the
/// same dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CocoDataset {
    pub images: Vec<CocoImage>,
    pub annotations: Vec<CocoAnnotation>,
    pub categories: Vec<CocoCategory>,
}

impl CocoDataset {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let dataset = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        Ok(dataset)
    }

    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = serde_json::to_string(self)?;
        fs::write(path, text).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }

    /// Looks up an image record by its file name.
    pub fn image_by_file_name(&self, file_name: &str) -> Option<&CocoImage> {
        self.images.iter().find(|image| image.file_name == file_name)
    }

    /// All annotations belonging to the image with id `image_id`.
    pub fn annotations_for_image(&self, image_id: u32) -> impl Iterator<Item = &CocoAnnotation> {
        self.annotations
            .iter()
            .filter(move |ann| ann.image_id == image_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> CocoDataset {
        CocoDataset {
            images: vec![
                CocoImage {
                    id: 1,
                    file_name: "a.tif".into(),
                    height: 16,
                    width: 24,
                },
                CocoImage {
                    id: 2,
                    file_name: "b.tif".into(),
                    height: 16,
                    width: 24,
                },
            ],
            annotations: vec![
                CocoAnnotation {
                    id: 1,
                    image_id: 1,
                    category_id: 1,
                    segmentation: vec![vec![1.0, 1.0, 5.0, 1.0, 5.0, 4.0]],
                    area: 6.0,
                    bbox: [1.0, 1.0, 5.0, 4.0],
                    iscrowd: 0,
                },
                CocoAnnotation {
                    id: 2,
                    image_id: 1,
                    category_id: 1,
                    segmentation: vec![vec![7.0, 7.0, 9.0, 7.0, 9.0, 9.0]],
                    area: 2.0,
                    bbox: [7.0, 7.0, 3.0, 3.0],
                    iscrowd: 0,
                },
            ],
            categories: vec![CocoCategory {
                id: 1,
                name: "hole".into(),
            }],
        }
    }

    #[test]
    fn lookup_by_file_name() {
        let dataset = sample_dataset();
        assert_eq!(dataset.image_by_file_name("b.tif").map(|img| img.id), Some(2));
        assert!(dataset.image_by_file_name("missing.tif").is_none());
    }

    #[test]
    fn annotations_filtered_by_image() {
        let dataset = sample_dataset();
        let ids: Vec<_> = dataset.annotations_for_image(1).map(|ann| ann.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(dataset.annotations_for_image(2).count(), 0);
    }

    #[test]
    fn save_then_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ANNOTATION_FILE_NAME);

        let dataset = sample_dataset();
        dataset.save(&path).unwrap();
        let loaded = CocoDataset::open(&path).unwrap();

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn open_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ANNOTATION_FILE_NAME);
        fs::write(&path, "{not json").unwrap();

        assert!(CocoDataset::open(&path).is_err());
    }
}
