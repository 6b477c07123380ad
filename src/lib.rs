//! Bounding-box annotation helpers for dataset preparation.
//!
//! Load an image into a [`RasterBuffer`], crop labeled regions out of it, draw
//! hollow borders around them and write the result as PNG or JPEG.
//!
//! ```no_run
//! use box_annotate::{RasterBuffer, Rect};
//! use image::Rgba;
//!
//! fn main() -> box_annotate::Result<()> {
//!     let mut image = RasterBuffer::load("street.png")?;
//!     let car = Rect::new(120, 80, 419, 299);
//!     image.crop(&car)?.save("car.png")?;
//!     image.draw_rect(&car, Rgba([255, 0, 0, 255]))?;
//!     image.save("street_boxed.jpg")?;
//!     Ok(())
//! }
//! ```
pub mod batch;
mod config;
mod error;
pub mod fsys;
mod geometry;
pub mod label;
pub mod lines;
mod raster;

pub use batch::{run as run_batch, BatchReport};
pub use config::{load_config, BatchConfig, Config, SaveEncoding};
pub use error::{Error, Result};
pub use geometry::{Rect, Size};
pub use label::BoxLabel;
pub use lines::LineFile;
pub use raster::{OutputFormat, RasterBuffer};
