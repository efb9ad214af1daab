use std::time::Duration;

use anyhow::Context as _;
use gpui::{Hsla, Pixels};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::bar::{DEFAULT_DURATION, DEFAULT_LOADING_WIDTH, default_background, default_tint};

/// Tunables and colors of a [`RefreshBar`](super::RefreshBar), loadable from JSON.
///
/// ```json
/// {
///   "loading_width": 20,
///   "duration_ms": 800,
///   "tint": "#458FE5",
///   "background": "#CCCBCB"
/// }
/// ```
///
/// Missing fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RefreshBarSettings {
    /// Width of the bouncing indicator while loading.
    pub loading_width: Pixels,
    /// Milliseconds of one loading traversal.
    pub duration_ms: u64,
    /// Indicator color.
    pub tint: Hsla,
    /// Track color.
    pub background: Hsla,
}

impl Default for RefreshBarSettings {
    fn default() -> Self {
        Self {
            loading_width: DEFAULT_LOADING_WIDTH,
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            tint: default_tint(),
            background: default_background(),
        }
    }
}

impl RefreshBarSettings {
    /// Parse settings from a JSON document.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse refresh bar settings")
    }

    /// The JSON schema of the settings document.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(RefreshBarSettings)
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gpui::{Hsla, px, rgb};
    use indoc::indoc;

    use super::RefreshBarSettings;

    fn assert_color_eq(a: Hsla, b: Hsla) {
        assert!((a.h - b.h).abs() < 1e-3, "{:?} != {:?}", a, b);
        assert!((a.s - b.s).abs() < 1e-3, "{:?} != {:?}", a, b);
        assert!((a.l - b.l).abs() < 1e-3, "{:?} != {:?}", a, b);
        assert!((a.a - b.a).abs() < 1e-3, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_defaults() {
        let settings = RefreshBarSettings::default();

        assert_eq!(settings.loading_width, px(15.));
        assert_eq!(settings.duration_ms, 500);
        assert_eq!(settings.duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_from_json() {
        let settings = RefreshBarSettings::from_json(indoc! {r##"
            {
                "loading_width": 20,
                "duration_ms": 800,
                "tint": "#ff0000"
            }
        "##})
        .unwrap();

        assert_eq!(settings.loading_width, px(20.));
        assert_eq!(settings.duration(), Duration::from_millis(800));
        assert_color_eq(settings.tint, rgb(0xff0000).into());
        assert_eq!(
            settings.background,
            RefreshBarSettings::default().background
        );
    }

    #[test]
    fn test_from_json_empty() {
        let settings = RefreshBarSettings::from_json("{}").unwrap();
        assert_eq!(settings, RefreshBarSettings::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RefreshBarSettings::from_json(r#"{"duration_ms": "slow"}"#).unwrap_err();
        assert_eq!(err.to_string(), "failed to parse refresh bar settings");

        assert!(RefreshBarSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_schema() {
        let schema = serde_json::to_value(RefreshBarSettings::schema()).unwrap();
        let properties = &schema["properties"];

        assert!(properties["loading_width"].is_object());
        assert!(properties["duration_ms"].is_object());
        assert!(properties["tint"].is_object());
        assert!(properties["background"].is_object());
    }
}
