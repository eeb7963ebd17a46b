//! Flat `KEY=value` view of a resolved configuration.
//!
//! External build steps read these as environment variables.

use super::ResolvedConfig;
use crate::bundler::{error::Result, utils::text::single_line};

impl ResolvedConfig {
    /// Every field as an ordered `(KEY, value)` pair.
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        let icon = self
            .installer_icon()
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "default".to_string());
        let languages = self
            .languages()
            .iter()
            .map(|lang| lang.name())
            .collect::<Vec<_>>()
            .join(",");

        vec![
            ("APP_ID", self.id().to_string()),
            ("PUBSPEC_NAME", self.manifest_name().to_string()),
            ("APP_NAME", self.display_name().to_string()),
            ("APP_NAME_CAMEL_CASE", self.camel_case_name()),
            ("APP_DESCRIPTION", single_line(self.description())),
            ("APP_VERSION", self.version().to_string()),
            ("APP_PUBLISHER", single_line(self.publisher())),
            ("APP_URL", single_line(self.url())),
            ("APP_SUPPORT_URL", single_line(self.support_url())),
            ("APP_UPDATES_URL", single_line(self.updates_url())),
            ("APP_INSTALLER_ICON", icon),
            ("APP_LANGUAGES", languages),
            ("APP_ADMIN", self.admin().to_string()),
            ("APP_TYPE", self.build_mode().name().to_string()),
            ("APP_BUILD_APP", self.build_app().to_string()),
            ("APP_BUILD_INSTALLER", self.build_installer().to_string()),
        ]
    }

    /// One `KEY=value` line per field; multi-line text is folded onto one line.
    pub fn to_env_string(&self) -> String {
        self.env_vars()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()
    }

    /// Pretty-printed JSON of the whole configuration.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::bundler::Error::GenericError(format!("serializing config: {e}")))
    }
}
