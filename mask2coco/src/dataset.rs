use crate::common::*;

/// Prefix a mask file name carries in front of its image file name.
pub const MASK_NAME_PREFIX: &str = "Mask of ";

const IMAGE_EXTENSIONS: &[&str] = &["tif", "tiff", "png", "jpg", "jpeg", "bmp"];

/// An image file and its label mask, matched by the mask naming
/// convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMaskPair {
    pub image_path: PathBuf,
    pub mask_path: PathBuf,
}

/// The mask file name the convention assigns to `image_name`.
pub fn mask_file_name(image_name: &str) -> String {
    format!("{}{}", MASK_NAME_PREFIX, image_name)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// Scans `image_dir` and pairs every image file with its mask in
/// `mask_dir`. Image files without a matching mask are skipped.
///
/// The output follows directory listing order, which is not guaranteed
/// to be sorted.
pub fn scan_pairs(image_dir: &Path, mask_dir: &Path) -> Result<Vec<ImageMaskPair>> {
    let entries = fs::read_dir(image_dir)
        .with_context(|| format!("failed to list image directory '{}'", image_dir.display()))?;

    let mut pairs = vec![];
    for entry in entries {
        let image_path = entry?.path();
        if !has_image_extension(&image_path) {
            continue;
        }
        let file_name = match image_path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let mask_path = mask_dir.join(mask_file_name(file_name));
        if mask_path.exists() {
            pairs.push(ImageMaskPair {
                image_path,
                mask_path,
            });
        }
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_names_follow_the_convention() {
        assert_eq!(mask_file_name("sample_01.tif"), "Mask of sample_01.tif");
    }

    #[test]
    fn scan_keeps_only_matched_image_files() {
        let root = tempfile::tempdir().unwrap();
        let image_dir = root.path().join("images");
        let mask_dir = root.path().join("masks");
        fs::create_dir_all(&image_dir).unwrap();
        fs::create_dir_all(&mask_dir).unwrap();

        fs::write(image_dir.join("a.tif"), []).unwrap();
        fs::write(image_dir.join("b.png"), []).unwrap();
        fs::write(image_dir.join("c.tif"), []).unwrap();
        fs::write(image_dir.join("notes.txt"), []).unwrap();
        fs::write(mask_dir.join("Mask of a.tif"), []).unwrap();
        fs::write(mask_dir.join("Mask of b.png"), []).unwrap();
        fs::write(mask_dir.join("Mask of notes.txt"), []).unwrap();

        let mut names: Vec<_> = scan_pairs(&image_dir, &mask_dir)
            .unwrap()
            .into_iter()
            .map(|pair| {
                pair.image_path
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();

        // c.tif has no mask and notes.txt is not an image
        assert_eq!(names, vec!["a.tif", "b.png"]);
    }

    #[test]
    fn scan_fails_on_missing_image_directory() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("does-not-exist");

        assert!(scan_pairs(&missing, root.path()).is_err());
    }
}
