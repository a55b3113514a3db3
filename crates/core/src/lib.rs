#![forbid(unsafe_code)]

pub mod collections;
pub mod error;
pub mod image;
pub mod model;
pub mod settings;
pub mod validation;

pub use error::Error;
pub use settings::{SiteSettings, SiteSettingsDraft};
pub use validation::{Submission, ValidationResult};
