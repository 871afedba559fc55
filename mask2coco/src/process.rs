use crate::common::*;
use crate::dataset::ImageMaskPair;
use coco_format::{
    CocoAnnotation, CocoCategory, CocoDataset, CocoImage, ANNOTATION_FILE_NAME,
};
use mask_poly::Polygon;

/// Category id of every emitted annotation. The converter supports a
/// single object class.
pub const CATEGORY_ID: u32 = 1;

/// Options governing annotation assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Name of the single emitted category.
    pub category_name: String,
    /// Douglas-Peucker tolerance in pixels; 0 disables polygon
    /// simplification.
    pub simplify_epsilon: f64,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            category_name: "hole".into(),
            simplify_epsilon: 0.0,
        }
    }
}

/// Per-pair output before any ids are assigned.
///
/// Records are id-free so that pairs can be processed concurrently and
/// merged by a single writer afterwards.
#[derive(Debug, Clone)]
pub struct PairRecord {
    pub file_name: String,
    pub height: u32,
    pub width: u32,
    pub polygons: Vec<Polygon>,
}

/// Loads one image/mask pair, copies the image into `output_dir` and
/// extracts the boundary polygons of every non-zero label value.
pub fn process_pair(
    pair: &ImageMaskPair,
    output_dir: &Path,
    options: &ProcessOptions,
) -> Result<PairRecord> {
    let ImageMaskPair {
        image_path,
        mask_path,
    } = pair;

    let image = image::open(image_path)
        .with_context(|| format!("could not read image '{}'", image_path.display()))?;
    // keep the mask's integer label values instead of collapsing to color
    let mask = image::open(mask_path)
        .with_context(|| format!("could not read mask '{}'", mask_path.display()))?
        .to_luma16();

    let file_name = image_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format_err!("invalid image file name '{}'", image_path.display()))?
        .to_owned();
    fs::copy(image_path, output_dir.join(&file_name)).with_context(|| {
        format!(
            "failed to copy '{}' into '{}'",
            image_path.display(),
            output_dir.display()
        )
    })?;

    let polygons: Vec<_> = mask_poly::mask_labels(&mask)
        .into_iter()
        .flat_map(|label| {
            let binary = mask_poly::isolate_label(&mask, label);
            mask_poly::extract_polygons(&binary, options.simplify_epsilon)
        })
        .collect();

    Ok(PairRecord {
        file_name,
        height: image.height(),
        width: image.width(),
        polygons,
    })
}

/// Merges per-pair records into a COCO dataset, minting sequential
/// image and annotation ids in record order starting at 1.
pub fn assemble(records: Vec<PairRecord>, options: &ProcessOptions) -> CocoDataset {
    let mut images = vec![];
    let mut annotations = vec![];
    let mut ann_id = 0;

    for (index, record) in records.into_iter().enumerate() {
        let PairRecord {
            file_name,
            height,
            width,
            polygons,
        } = record;
        let image_id = index as u32 + 1;

        for polygon in polygons {
            ann_id += 1;
            let [x, y, w, h] = polygon.bounding_rect();
            annotations.push(CocoAnnotation {
                id: ann_id,
                image_id,
                category_id: CATEGORY_ID,
                segmentation: vec![polygon.flatten()],
                area: polygon.area(),
                bbox: [x as f64, y as f64, w as f64, h as f64],
                iscrowd: 0,
            });
        }

        images.push(CocoImage {
            id: image_id,
            file_name,
            height,
            width,
        });
    }

    CocoDataset {
        images,
        annotations,
        categories: vec![CocoCategory {
            id: CATEGORY_ID,
            name: options.category_name.clone(),
        }],
    }
}

/// Processes every pair of one split concurrently, then writes the
/// merged annotation file into `output_dir`.
///
/// The per-pair work fans out onto blocking workers; ids are minted in
/// a single merge pass once all workers complete, so they are unique
/// within the written file and deterministic in input-pair order. A
/// pair that fails to load is logged and left out without aborting its
/// siblings.
pub async fn process_split(
    pairs: Vec<ImageMaskPair>,
    output_dir: impl AsRef<Path>,
    options: &ProcessOptions,
) -> Result<CocoDataset> {
    let output_dir = output_dir.as_ref().to_owned();
    fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            output_dir.display()
        )
    })?;

    let num_pairs = pairs.len();
    let options = Arc::new(options.clone());

    let outcomes: Vec<Option<PairRecord>> = stream::iter(pairs)
        .par_map(None, {
            let output_dir = output_dir.clone();
            let options = options.clone();
            move |pair| {
                let output_dir = output_dir.clone();
                let options = options.clone();
                move || match process_pair(&pair, &output_dir, &options) {
                    Ok(record) => Some(record),
                    Err(err) => {
                        error!("{:#}", err);
                        None
                    }
                }
            }
        })
        .collect()
        .await;

    let records: Vec<_> = outcomes.into_iter().flatten().collect();
    if records.len() < num_pairs {
        warn!(
            "skipped {} of {} pairs in '{}'",
            num_pairs - records.len(),
            num_pairs,
            output_dir.display()
        );
    }

    let dataset = assemble(records, &options);
    dataset.save(output_dir.join(ANNOTATION_FILE_NAME))?;
    info!(
        "wrote {} images and {} annotations to '{}'",
        dataset.images.len(),
        dataset.annotations.len(),
        output_dir.display()
    );

    Ok(dataset)
}
