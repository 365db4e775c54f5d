//! Widget form factors.
//!
//! The set is closed: a host can only ask for one of these three, so there
//! is no "unsupported form factor" path anywhere in the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Widths below this (in dp) get the small layout on Android launchers.
pub const ANDROID_MEDIUM_MIN_WIDTH_DP: u32 = 200;

/// The size and placement class of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormFactor {
    /// 2×2 home screen widget.
    Small,
    /// 4×2 home screen widget.
    #[default]
    Medium,
    /// Rectangular lock screen accessory.
    LockScreen,
}

impl FormFactor {
    /// Every form factor, in the order hosts declare them.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::LockScreen];

    /// Returns the kebab-case name (`small`, `medium`, `lock-screen`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LockScreen => "lock-screen",
        }
    }

    /// Returns `true` if this form factor has room for the daily summary.
    #[must_use]
    pub const fn shows_summary(self) -> bool {
        matches!(self, Self::Medium)
    }

    /// Returns `true` if the host only supports one tap target for the whole
    /// widget (WidgetKit small and accessory families).
    #[must_use]
    pub const fn single_tap_target(self) -> bool {
        matches!(self, Self::Small | Self::LockScreen)
    }

    /// Picks the home screen layout from the launcher's minimum width.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::FormFactor;
    ///
    /// assert_eq!(FormFactor::for_min_width(110), FormFactor::Small);
    /// assert_eq!(FormFactor::for_min_width(250), FormFactor::Medium);
    /// ```
    #[must_use]
    pub const fn for_min_width(min_width_dp: u32) -> Self {
        if min_width_dp < ANDROID_MEDIUM_MIN_WIDTH_DP {
            Self::Small
        } else {
            Self::Medium
        }
    }

    /// Returns the next form factor, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium => Self::LockScreen,
            Self::LockScreen => Self::Small,
        }
    }

    /// Returns the previous form factor, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Small => Self::LockScreen,
            Self::Medium => Self::Small,
            Self::LockScreen => Self::Medium,
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormFactor {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "lock-screen" | "lockscreen" => Ok(Self::LockScreen),
            _ => Err(ProtocolError::UnknownFormFactor(s.to_string())),
        }
    }
}
