//! Path rules: which files count as images, where single-file output goes, and
//! how batch outputs are named.
use std::path::{Path, PathBuf};

/// Extensions (case-sensitive, with the leading dot) picked up as images.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".bmp", ".gif", ".tiff", ".webp"];

/// Recognized but not decodable; outputs for it are written as JPEG.
pub const WEBP_EXTENSION: &str = ".webp";
const WEBP_REPLACEMENT: &str = ".jpg";

/// Suffix appended to the file stem when no output path is given.
pub const OUTPUT_SUFFIX: &str = "_watermark";

/// Directory created under the input directory when batch mode has no output directory.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "watermarked";

/// Splits the final path component at its last dot: `("cat", ".png")`. Unlike
/// `Path::extension`, a leading dot counts, so `.png` is `("", ".png")`.
fn split_name(path: &Path) -> (String, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(dot) => (name[..dot].to_string(), name[dot..].to_string()),
        None => (name, String::new()),
    }
}

/// Extension of the final path component with its leading dot, or `""`.
pub fn dotted_extension(path: &Path) -> String {
    split_name(path).1
}

pub fn is_supported_image(path: &Path) -> bool {
    SUPPORTED_EXTENSIONS.contains(&dotted_extension(path).as_str())
}

pub fn is_webp(path: &Path) -> bool {
    dotted_extension(path) == WEBP_EXTENSION
}

fn output_extension(source: &Path) -> String {
    if is_webp(source) {
        WEBP_REPLACEMENT.to_string()
    } else {
        dotted_extension(source)
    }
}

/// `explicit` wins (with `.webp` rewritten to `.jpg`); otherwise
/// `<dir>/<stem>_watermark<ext>` next to `source`.
pub fn resolve_output_path(source: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) if is_webp(path) => {
            let (stem, _) = split_name(path);
            path.with_file_name(format!("{}{}", stem, WEBP_REPLACEMENT))
        }
        Some(path) => path.to_path_buf(),
        None => {
            let (stem, _) = split_name(source);
            let name = format!("{}{}{}", stem, OUTPUT_SUFFIX, output_extension(source));
            source.with_file_name(name)
        }
    }
}

/// Batch outputs drop the original name: `<index><ext>`, index starting at 1.
pub fn batch_output_name(index: usize, source: &Path) -> String {
    format!("{}{}", index, output_extension(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions() {
        for ext in SUPPORTED_EXTENSIONS {
            let name = format!("photo{}", ext);
            assert!(is_supported_image(Path::new(&name)), "{}", name);
        }
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("README")));
        assert!(!is_supported_image(Path::new("photo.JPG")));
        assert!(!is_supported_image(Path::new("photo.tif")));
    }

    #[test]
    fn derived_output_sits_next_to_source() {
        assert_eq!(
            resolve_output_path(Path::new("pics/cat.png"), None),
            PathBuf::from("pics/cat_watermark.png")
        );
        assert_eq!(
            resolve_output_path(Path::new("cat.jpeg"), None),
            PathBuf::from("cat_watermark.jpeg")
        );
    }

    #[test]
    fn webp_outputs_become_jpg() {
        assert_eq!(
            resolve_output_path(Path::new("pics/cat.webp"), None),
            PathBuf::from("pics/cat_watermark.jpg")
        );
        assert_eq!(
            resolve_output_path(Path::new("cat.png"), Some(Path::new("out/dog.webp"))),
            PathBuf::from("out/dog.jpg")
        );
    }

    #[test]
    fn explicit_output_is_kept() {
        assert_eq!(
            resolve_output_path(Path::new("cat.png"), Some(Path::new("out/dog.bmp"))),
            PathBuf::from("out/dog.bmp")
        );
    }

    #[test]
    fn batch_names_are_sequence_numbers() {
        assert_eq!(batch_output_name(1, Path::new("a/holiday.png")), "1.png");
        assert_eq!(batch_output_name(12, Path::new("b/c.tiff")), "12.tiff");
        assert_eq!(batch_output_name(3, Path::new("x.webp")), "3.jpg");
    }

    #[test]
    fn dot_files_count_as_extensions() {
        assert_eq!(dotted_extension(Path::new("pics/.png")), ".png");
        assert_eq!(dotted_extension(Path::new("a.tar.gif")), ".gif");
        assert_eq!(dotted_extension(Path::new("trailing.")), ".");
        assert_eq!(dotted_extension(Path::new("README")), "");
        assert!(is_supported_image(Path::new("pics/.png")));
        assert_eq!(
            resolve_output_path(Path::new("pics/.png"), None),
            PathBuf::from("pics/_watermark.png")
        );
        assert_eq!(
            resolve_output_path(Path::new("cat.png"), Some(Path::new("out/.webp"))),
            PathBuf::from("out/.jpg")
        );
    }
}
