#![doc = r#"
maskblend — a mask-driven image compositor.

This crate blends two raster images (a background and an overlay) into one
output image, with the per-pixel blend weight controlled by one or more
grayscale masks. Masks can be contrast/gamma normalized, complemented, and
combined by averaging. It powers the maskblend CLI and can be embedded in
your own Rust applications.

Quick start: composite two files
--------------------------------
```rust,no_run
use std::path::Path;
use maskblend::{CompositeParams, composite_to_path};

fn main() -> maskblend::Result<()> {
    let params = CompositeParams {
        masks: vec!["masks/subject.png".into()],
        invert_masks: vec![],
        save_mask: None,
        normalize_level: 2.0,
        encode: maskblend::EncodeProfile::Small,
    };

    composite_to_path(
        Path::new("background.png"),
        Path::new("overlay.png"),
        Path::new("out/composite.png"),
        &params,
    )
}
```

Composite in-memory to `CompositeImage`
---------------------------------------
```rust,no_run
use std::path::Path;
use maskblend::{CompositeParams, composite_to_buffer};

fn main() -> maskblend::Result<()> {
    let img = composite_to_buffer(
        Path::new("background.png"),
        Path::new("overlay.png"),
        &CompositeParams::default(),
    )?;

    // `img.pixels` holds the interleaved 8-bit composite,
    // `img.weight` the blended weight grid as 8-bit grayscale.
    assert_eq!(img.pixels.len(), img.width * img.height * img.channels);
    Ok(())
}
```

Low-level grid helpers (when you already have arrays)
-----------------------------------------------------
```rust
use ndarray::{Array2, Array3};
use maskblend::core::blend::blend_masks;
use maskblend::core::composite::composite_layers;
use maskblend::core::normalize::normalize_mask;

let background = Array3::<f64>::zeros((4, 4, 3));
let overlay = Array3::from_elem((4, 4, 3), 255.0);
let mask = Array2::from_elem((4, 4), 0.25);

let weight = blend_masks(&[normalize_mask(&mask, 0.0)]);
let composite = composite_layers(&background, &overlay, &weight);
assert_eq!(composite.dim(), (4, 4, 3));
```

Behavior notes
--------------
- With no masks supplied the composite uses a constant 50/50 blend.
- Inverted masks are complemented once at load time; after that they are
  ordinary masks.
- Normalization level 0 is the identity; level 1 is a pure min-max stretch;
  higher levels clip, re-expand, and gamma-correct toward a binary mask.
- All requested outputs are encoded first and written concurrently; a load
  or shape-validation failure aborts before anything is written.

Error handling
--------------
All public functions return `maskblend::Result<T>`; match on
`maskblend::Error` to handle specific cases, e.g. unreadable resources or
mismatched input dimensions.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — normalization, blending, compositing, and quantization grids.
- [`io`] — decoding, path-list parsing, and PNG writers.
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
pub use core::params::CompositeParams;
pub use error::{Error, Result};
pub use types::{EncodeProfile, MaskPolarity};

// Readers and path helpers
pub use io::paths::split_path_list;
pub use io::reader::{load_layer, load_mask};

// High-level API re-exports
pub use api::{CompositeImage, composite_to_buffer, composite_to_path};
