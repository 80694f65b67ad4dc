//! Magic-number header detection.
//!
//! Checks whether files begin with the signature bytes of a format
//! (PNG, JPG, GIF or PDF).
//!
//! ```no_run
//! use magic_detect::application::DetectFilesUseCase;
//! use magic_detect::application::dto::DetectOptions;
//!
//! let options = DetectOptions::new(vec!["photo.png".into()]).with_format("png");
//! let report = DetectFilesUseCase::with_local_files().execute(&options)?;
//! println!("{:?}", report.valid);
//! # Ok::<(), magic_detect::domain::services::DetectError>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::entities::{Detection, FileSignature, FileType, UnsupportedFormat};
pub use domain::services::{DetectError, FileDetector, SignatureRegistry};
