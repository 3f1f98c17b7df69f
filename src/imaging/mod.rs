//! Image processing on top of the `image` crate.
//!
//! | Step | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Invert** | `DynamicImage::invert` |
//! | **Solarize** | per-channel threshold over `Pixel::apply_without_alpha` |
//! | **Encode** | `DynamicImage::save` (format from the output extension) |
//!
//! The module is split into:
//! - **Calculations**: pure per-channel arithmetic (unit testable)
//! - **Operations**: the [`Operation`] registry
//! - **Parameters**: data describing one transform job
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{Channel, invert_value, solarize_value};
pub use operations::Operation;
pub use params::TransformParams;
pub use rust_backend::RustBackend;
