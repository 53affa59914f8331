use std::fmt;

use serde::{Deserialize, Serialize};

/// Asset filename pattern with `[name]` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub const NAME_PLACEHOLDER: &'static str = "[name]";

    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    /// Default pattern for the bundled userscript.
    pub fn script() -> Self {
        Self::new("[name].user.js")
    }

    /// Default pattern for emitted stylesheets.
    pub fn stylesheet() -> Self {
        Self::new("[name].css")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_name_placeholder(&self) -> bool {
        self.0.contains(Self::NAME_PLACEHOLDER)
    }

    /// Substitute every `[name]` placeholder.
    ///
    /// ```
    /// use scriptpack_config::FilenameTemplate;
    ///
    /// let template = FilenameTemplate::script();
    /// assert_eq!(template.render("evolve"), "evolve.user.js");
    /// ```
    pub fn render(&self, name: &str) -> String {
        self.0.replace(Self::NAME_PLACEHOLDER, name)
    }
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilenameTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_placeholder() {
        let template = FilenameTemplate::new("[name]/[name].min.js");
        assert_eq!(template.render("app"), "app/app.min.js");
    }

    #[test]
    fn keeps_text_without_placeholder() {
        let template = FilenameTemplate::new("bundle.js");
        assert!(!template.has_name_placeholder());
        assert_eq!(template.render("app"), "bundle.js");
    }

    #[test]
    fn leaves_other_placeholders_alone() {
        let template = FilenameTemplate::new("[name].[contenthash].css");
        assert_eq!(template.render("style"), "style.[contenthash].css");
    }
}
