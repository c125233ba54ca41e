//! Output writers: PNG encoding into owned byte buffers and the
//! concurrent write fan-out used to persist all requested outputs at once.
pub mod batch;
pub use batch::{WriteRequest, write_all};

pub mod png;
pub use png::{encode_color_png, encode_gray_png};
