//! Build configuration for browser userscript bundles.
//!
//! Given a build mode, [`resolve`] selects the output options (source maps,
//! minification, stylesheet handling). [`BuildPlan`] combines them with the
//! project settings and the userscript metadata banner into the record a
//! bundler consumes.

pub mod banner;
pub mod discovery;
pub mod error;
pub mod minify;
pub mod mode;
pub mod options;
pub mod plan;
pub mod project;
pub mod template;
pub mod validation;

// Re-export main types
pub use banner::*;
pub use error::*;
pub use minify::*;
pub use mode::*;
pub use options::*;
pub use plan::*;
pub use project::*;
pub use template::*;

pub use discovery::{CONFIG_FILE, ProjectDiscovery, ProjectSource, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
