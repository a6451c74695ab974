//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Options for [`MarkupParser`](crate::MarkupParser).
///
/// Deserializes from the host's config with kebab-case keys; missing keys
/// take their defaults.
///
/// ```
/// use markup::MarkupConfig;
///
/// let config: MarkupConfig = serde_json::from_str(r#"{"block-dark-colors": true}"#).unwrap();
/// assert!(config.block_dark_colors);
/// assert!(config.carry_colors);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarkupConfig {
    /// Drop `&0` and hex colors darker than luminescence 16 from text runs.
    pub block_dark_colors: bool,
    /// Re-apply the codes active before an expression to the text after it.
    pub carry_colors: bool,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            block_dark_colors: false,
            carry_colors: true,
        }
    }
}
