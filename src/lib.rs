#![doc = r#"
watermark — batch text watermarking for images.

This crate overlays a text watermark (anchor position, opacity, size, color and a
drop shadow) onto a single image or onto every image of a directory tree. It powers
the `watermark` CLI and can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
watermark = "0.1"
```

Quick start: watermark one file
-------------------------------
```rust,no_run
use std::path::PathBuf;
use watermark::{Anchor, WatermarkParams, WatermarkRequest, watermark_file};

fn main() -> watermark::Result<()> {
    let params = WatermarkParams {
        text: "(c) 2024 Example".to_string(),
        anchor: Anchor::BottomRight,
        opacity: 160,
        ..Default::default()
    };

    // Writes /photos/beach_watermark.jpg
    let request = WatermarkRequest::new("/photos/beach.jpg", None, params);
    let written: PathBuf = watermark_file(&request)?;
    println!("wrote {}", written.display());
    Ok(())
}
```

Batch processing
----------------
```rust,no_run
use std::path::Path;
use watermark::{WatermarkParams, process_directory};

fn main() -> watermark::Result<()> {
    // Outputs land in /photos/watermarked as 1.jpg, 2.png, ... oldest first
    let report = process_directory(Path::new("/photos"), None, &WatermarkParams::default())?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Reproducible colors
-------------------
Random text colors come from an explicitly owned RNG. Build a `Watermarker` with a
fixed seed to get the same colors on every run:

```rust,no_run
use std::path::Path;
use watermark::{ColorMode, Watermarker, WatermarkParams, process_directory_with};

fn main() -> watermark::Result<()> {
    let params = WatermarkParams { color_mode: ColorMode::Random, ..Default::default() };
    let mut watermarker = Watermarker::with_seed(None, 42);
    process_directory_with(&mut watermarker, Path::new("/photos"), Some(Path::new("/out")), &params)?;
    Ok(())
}
```

Error handling
--------------
All public functions return `watermark::Result<T>`; match on `watermark::Error` to
handle specific cases:

```rust,no_run
use watermark::{Error, WatermarkParams, WatermarkRequest, watermark_file};

fn main() {
    let request = WatermarkRequest::new("/photos/clip.webp", None, WatermarkParams::default());
    match watermark_file(&request) {
        Ok(path) => println!("wrote {}", path.display()),
        Err(Error::UnsupportedFormat { path }) => eprintln!("cannot watermark {}", path.display()),
        Err(Error::Decode { path, .. }) => eprintln!("{} is not a readable image", path.display()),
        Err(other) => eprintln!("error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points for files and directories.
- [`core`] — parameters, placement, colors, fonts and the renderer.
- [`io`] — decoding, encoding and output path rules.
- [`types`] — enums (`Anchor`, `ColorMode`, `OutputFormat`).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{WatermarkParams, WatermarkRequest};
pub use core::placement::{MARGIN, Placement, compute_placement};
pub use error::{Error, Result};
pub use types::{Anchor, ColorMode, OutputFormat};

// Rendering
pub use core::font::{Face, FontResolver};
pub use core::render::{Rendered, Watermarker};

// High-level API re-exports
pub use api::{
    BatchReport, collect_image_files, process_directory, process_directory_with, watermark_file,
};
