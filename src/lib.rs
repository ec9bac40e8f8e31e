//! # zenload
//!
//! Per-request options for an image loader: how far to downsample while
//! decoding, what size to crop or scale to afterwards, which processor does
//! that, and whether animated GIFs stay animated.
//!
//! Fetching, caching and decoding are not part of this crate. They read a
//! [`LoadOptions`] through [`pipeline::LoadPipeline`].
//!
//! ## Usage
//!
//! ```rust
//! use zenload::{DisplayMetrics, LoadOptions, MaxSize};
//!
//! let metrics = DisplayMetrics::new(1000, 2000)?;
//! let mut options = LoadOptions::new(&metrics);
//! assert_eq!(options.max_size(), Some(MaxSize::new(1500, 3000)?));
//!
//! // Refresh a long-lived instance from a template without reallocating.
//! let mut template = LoadOptions::from_options(&options);
//! template.set_resize_dimensions(200, 200)?.set_enable_disk_cache(false);
//! options.copy_of(&template);
//! assert_eq!(options, template);
//! # Ok::<(), zenload::LoadError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize sizes, [`RequestLevel`] and [`DownloadOptions`],
//!   validating sizes on load.

#![forbid(unsafe_code)]

mod display;
mod download;
mod error;
mod format;
mod options;
mod processor;
mod size;

pub mod pipeline;

pub use display::DisplayMetrics;
pub use download::{DownloadOptions, RequestLevel};
pub use error::LoadError;
pub use format::ImageFormat;
pub use options::LoadOptions;
pub use processor::{Bitmap, ImageProcessor};
pub use size::{MaxSize, Resize};
