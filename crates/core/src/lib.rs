//! poo-learning-core
//!
//! Identity metadata for the `poo_python_learning` package: an application
//! name and a version string, plus the explicit list of names this crate
//! exports for them.
//!
//! Everything here is a compile-time constant so frontends (CLI banners, log
//! lines, diagnostic reports) can consult it without any setup.

pub mod error;
pub mod metadata;

pub use error::{MetadataError, MetadataResult};
pub use metadata::{
    application_name, public_names, resolve_public_name, version, Metadata, APP_NAME, EXPORTS,
    PUBLIC_NAMES, VERSION,
};
