/// When activating with no valid selection releases a still frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StillReleasePolicy {
    /// Any invalid selection during a still advances playback, including an
    /// out-of-range register on a packet that does have buttons.
    #[default]
    AnyInvalidSelection,
    /// Only a packet without buttons releases the still; other invalid
    /// selections report `NoCurrentButton`.
    ZeroButtonsOnly,
}

impl StillReleasePolicy {
    pub fn releases(&self, button_count: u8) -> bool {
        match self {
            StillReleasePolicy::AnyInvalidSelection => true,
            StillReleasePolicy::ZeroButtonsOnly => button_count == 0,
        }
    }
}

/// Behavior switches for a navigation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub still_release: StillReleasePolicy,
    /// Directional movement onto an auto-action button activates it.
    pub follow_auto_action: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            still_release: StillReleasePolicy::default(),
            follow_auto_action: true,
        }
    }
}
