//! Userscript metadata banner.
//!
//! The banner text is read once per build and shared by every chunk. It is
//! never parsed: whatever the metadata file holds is prepended as-is.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Asset-processing stage at which size optimizations (minification) run.
pub const PROCESS_ASSETS_STAGE_OPTIMIZE_SIZE: i32 = 400;

/// Opaque banner text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Banner(Arc<str>);

impl Banner {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// Read the banner from disk.
    ///
    /// A missing file is reported as [`ConfigError::BannerNotFound`] so the
    /// caller sees which path was expected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ConfigError::BannerNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io(err),
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded banner");
        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerOptions {
    /// Only prepend to entry chunks
    pub entry_only: bool,

    /// Insert the text verbatim instead of wrapping it in a comment
    pub raw: bool,

    /// Asset-processing stage the banner is applied at
    pub stage: i32,
}

impl Default for BannerOptions {
    fn default() -> Self {
        Self {
            entry_only: true,
            raw: true,
            // After minification so the metadata block survives intact.
            stage: PROCESS_ASSETS_STAGE_OPTIMIZE_SIZE + 1,
        }
    }
}

/// Chunk facts the banner plugin needs.
#[derive(Debug, Clone, Copy)]
pub struct ChunkInfo<'a> {
    pub name: &'a str,
    pub is_entry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerPlugin {
    pub banner: Banner,

    #[serde(flatten)]
    pub options: BannerOptions,
}

impl BannerPlugin {
    pub fn new(banner: Banner) -> Self {
        Self {
            banner,
            options: BannerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BannerOptions) -> Self {
        self.options = options;
        self
    }

    /// Prepend the banner to a chunk's code.
    ///
    /// ```
    /// use scriptpack_config::{Banner, BannerPlugin, ChunkInfo};
    ///
    /// let plugin = BannerPlugin::new(Banner::new("// ==UserScript=="));
    /// let entry = ChunkInfo { name: "main", is_entry: true };
    /// assert_eq!(plugin.apply(entry, "run();"), "// ==UserScript==\nrun();");
    /// ```
    pub fn apply<'c>(&self, chunk: ChunkInfo<'_>, code: &'c str) -> Cow<'c, str> {
        if self.options.entry_only && !chunk.is_entry {
            return Cow::Borrowed(code);
        }
        debug!(chunk = chunk.name, raw = self.options.raw, "prepending banner");

        let header = if self.options.raw {
            Cow::Borrowed(self.banner.as_str())
        } else {
            Cow::Owned(comment_block(self.banner.as_str()))
        };

        let mut out = String::with_capacity(header.len() + 1 + code.len());
        out.push_str(&header);
        out.push('\n');
        out.push_str(code);
        Cow::Owned(out)
    }
}

fn comment_block(text: &str) -> String {
    // A `*/` inside the text would end the comment early.
    let text = text.replace("*/", "* /");
    let mut out = String::from("/*!\n");
    for line in text.lines() {
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            out.push_str(" * ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str(" */");
    out
}
