//! Mode-dependent output options and the resolver that selects them.

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;
use crate::template::FilenameTemplate;

/// How mapping data from bundled output back to source is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapStrategy {
    /// No source maps
    None,
    /// Eval-wrapped modules with full inline source maps
    Full,
    /// Eval-wrapped modules with line-only inline source maps
    Cheap,
}

impl SourceMapStrategy {
    /// Bundler `devtool` value, `None` when maps are disabled.
    pub fn devtool(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Full => Some("eval-source-map"),
            Self::Cheap => Some("eval-cheap-source-map"),
        }
    }
}

/// How stylesheets are attached to the page at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleInjection {
    /// One `<link>` per emitted stylesheet
    LinkTag,
    /// All styles merged into a single `<style>` element
    SingletonStyleTag,
}

impl StyleInjection {
    /// Value of the style loader's `injectType` option.
    pub fn inject_type(self) -> &'static str {
        match self {
            Self::LinkTag => "linkTag",
            Self::SingletonStyleTag => "singletonStyleTag",
        }
    }
}

/// How stylesheet content reaches the style loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum StylesheetStrategy {
    /// Write each stylesheet as its own asset
    EmitFile { name: FilenameTemplate },
    /// Load stylesheet text into the bundle
    InlineLoader,
}

impl StylesheetStrategy {
    /// Loader name in the bundler's rule table.
    pub fn loader(&self) -> &'static str {
        match self {
            Self::EmitFile { .. } => "file-loader",
            Self::InlineLoader => "css-loader",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub source_map: SourceMapStrategy,
    pub minify: bool,
    pub style_injection: StyleInjection,
    pub stylesheet: StylesheetStrategy,
}

impl OutputOptions {
    pub fn production() -> Self {
        Self {
            source_map: SourceMapStrategy::None,
            minify: true,
            style_injection: StyleInjection::LinkTag,
            stylesheet: StylesheetStrategy::EmitFile {
                name: FilenameTemplate::stylesheet(),
            },
        }
    }

    pub fn development() -> Self {
        Self {
            source_map: SourceMapStrategy::Full,
            ..Self::fallback()
        }
    }

    /// Options for any mode that is not a named one.
    pub fn fallback() -> Self {
        Self {
            source_map: SourceMapStrategy::Cheap,
            minify: false,
            style_injection: StyleInjection::SingletonStyleTag,
            stylesheet: StylesheetStrategy::InlineLoader,
        }
    }
}

/// Select the output options for a build mode.
///
/// Total over every mode: values other than `production` and `development`
/// get [`OutputOptions::fallback`].
///
/// # Example
///
/// ```
/// use scriptpack_config::{resolve, BuildMode, SourceMapStrategy};
///
/// let options = resolve(&BuildMode::from("staging"));
/// assert!(!options.minify);
/// assert_eq!(options.source_map, SourceMapStrategy::Cheap);
/// ```
pub fn resolve(mode: &BuildMode) -> OutputOptions {
    match mode {
        BuildMode::Production => OutputOptions::production(),
        BuildMode::Development => OutputOptions::development(),
        BuildMode::Other(_) => OutputOptions::fallback(),
    }
}
