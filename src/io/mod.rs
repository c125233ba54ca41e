//! I/O layer for decoding raster layers and masks, resolving path lists,
//! and writing PNG outputs. Provides the `reader` decode helpers, `paths`
//! list parsing, and `writers` for encoding and the concurrent write fan-out.
pub mod paths;
pub use paths::split_path_list;

pub mod reader;
pub use reader::{load_layer, load_mask};

pub mod writers;
