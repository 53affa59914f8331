//! Minimizer settings used by production builds.

use serde::{Deserialize, Serialize};

use crate::options::OutputOptions;

/// `console` methods whose calls are removed from minified output.
///
/// `log`, `warn` and `error` are kept so userscripts can still report
/// problems from a release build.
pub const DROPPED_CONSOLE_METHODS: &[&str] = &[
    "assert",
    "count",
    "countReset",
    "debug",
    "info",
    "profile",
    "profileEnd",
    "timeStamp",
    "trace",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsCompressOptions {
    pub passes: u32,
    pub drop_console: Vec<String>,
    pub hoist_funs: bool,
    pub keep_infinity: bool,
    pub typeofs: bool,
    pub unsafe_arrows: bool,
    pub unsafe_math: bool,
    pub unsafe_proto: bool,
    pub unsafe_regexp: bool,
}

impl Default for JsCompressOptions {
    fn default() -> Self {
        Self {
            passes: 2,
            drop_console: DROPPED_CONSOLE_METHODS
                .iter()
                .map(|method| (*method).to_string())
                .collect(),
            hoist_funs: true,
            keep_infinity: true,
            typeofs: false,
            unsafe_arrows: true,
            unsafe_math: true,
            unsafe_proto: true,
            unsafe_regexp: true,
        }
    }
}

impl JsCompressOptions {
    pub fn drops_console_method(&self, method: &str) -> bool {
        self.drop_console.iter().any(|m| m == method)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsParseOptions {
    /// Allow `return` at the top level of the script
    pub bare_returns: bool,
}

impl Default for JsParseOptions {
    fn default() -> Self {
        Self { bare_returns: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsMinifyOptions {
    pub module: bool,
    pub keep_classnames: bool,
    pub keep_fnames: bool,
    pub toplevel: bool,
    pub ie8: bool,
    pub safari10: bool,
    pub compress: JsCompressOptions,
    pub parse: JsParseOptions,
}

impl Default for JsMinifyOptions {
    fn default() -> Self {
        Self {
            module: true,
            keep_classnames: true,
            keep_fnames: true,
            toplevel: true,
            ie8: true,
            safari10: true,
            compress: JsCompressOptions::default(),
            parse: JsParseOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsMinimizer {
    /// Keep license comments inline instead of moving them to a side file
    pub extract_comments: bool,
    pub options: JsMinifyOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CssMinimizer {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Minimizer {
    Js(JsMinimizer),
    Css(CssMinimizer),
}

/// Minimizers active for a build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Minimizers(Vec<Minimizer>);

impl Minimizers {
    /// Script and stylesheet minimizers when `options.minify` is set,
    /// nothing otherwise.
    pub fn for_options(options: &OutputOptions) -> Self {
        if !options.minify {
            return Self::default();
        }

        Self(vec![
            Minimizer::Js(JsMinimizer::default()),
            Minimizer::Css(CssMinimizer::default()),
        ])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Minimizer> {
        self.0.iter()
    }

    pub fn js(&self) -> Option<&JsMinimizer> {
        self.0.iter().find_map(|m| match m {
            Minimizer::Js(js) => Some(js),
            Minimizer::Css(_) => None,
        })
    }
}
