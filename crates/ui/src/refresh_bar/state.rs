use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The display mode of a [`RefreshBar`](super::RefreshBar).
///
/// Equality is structural: two `Progress` states are equal when their
/// fractions are equal, so assigning the same value twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BarState {
    /// A determinate fill, `0.0` is empty and `1.0` is full.
    ///
    /// Values outside of `0.0..=1.0` are kept as is and extrapolate the fill.
    #[serde(rename = "progress")]
    Progress(f32),
    /// An indeterminate animation, the indicator bounces between both edges.
    #[serde(rename = "loading")]
    Loading,
}

impl Default for BarState {
    fn default() -> Self {
        BarState::Progress(1.)
    }
}

impl BarState {
    /// Returns true if the state is [`BarState::Loading`].
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the progress fraction, or `None` while loading.
    #[inline]
    pub fn progress(&self) -> Option<f32> {
        match self {
            Self::Progress(value) => Some(*value),
            Self::Loading => None,
        }
    }
}

impl Display for BarState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BarState::Progress(value) => write!(f, "Progress({})", value),
            BarState::Loading => write!(f, "Loading"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BarState;

    #[test]
    fn test_default_is_full() {
        assert_eq!(BarState::default(), BarState::Progress(1.));
        assert!(!BarState::default().is_loading());
        assert_eq!(BarState::default().progress(), Some(1.));
    }

    #[test]
    fn test_equality() {
        assert_eq!(BarState::Progress(0.5), BarState::Progress(0.5));
        assert_ne!(BarState::Progress(0.5), BarState::Progress(0.25));
        assert_ne!(BarState::Progress(0.), BarState::Loading);
        assert_eq!(BarState::Loading, BarState::Loading);
        assert!(BarState::Loading.is_loading());
        assert_eq!(BarState::Loading.progress(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BarState::Progress(0.5).to_string(), "Progress(0.5)");
        assert_eq!(BarState::Loading.to_string(), "Loading");
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&BarState::Loading).unwrap(),
            r#""loading""#
        );
        assert_eq!(
            serde_json::to_string(&BarState::Progress(0.5)).unwrap(),
            r#"{"progress":0.5}"#
        );
        assert_eq!(
            serde_json::from_str::<BarState>(r#"{"progress":1.5}"#).unwrap(),
            BarState::Progress(1.5)
        );
        assert_eq!(
            serde_json::from_str::<BarState>(r#""loading""#).unwrap(),
            BarState::Loading
        );
    }
}
