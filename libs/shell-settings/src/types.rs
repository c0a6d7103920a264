//! Typed views over individual settings

use serde_json::Value;

/// Screen edge the bar is pinned to, persisted as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl BarPosition {
    pub fn index(&self) -> u8 {
        match self {
            BarPosition::Top => 0,
            BarPosition::Bottom => 1,
            BarPosition::Left => 2,
            BarPosition::Right => 3,
        }
    }

    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(BarPosition::Top),
            1 => Some(BarPosition::Bottom),
            2 => Some(BarPosition::Left),
            3 => Some(BarPosition::Right),
            _ => None,
        }
    }

    /// Map a legacy "at bottom" flag
    pub fn from_at_bottom(at_bottom: bool) -> Self {
        if at_bottom {
            BarPosition::Bottom
        } else {
            BarPosition::Top
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, BarPosition::Left | BarPosition::Right)
    }

    pub fn to_value(self) -> Value {
        Value::from(self.index())
    }
}

/// Source of the launcher button logo, persisted as its lowercase name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LauncherLogoMode {
    /// Generic apps grid icon
    #[default]
    Apps,
    /// Distribution logo
    Os,
    /// Shell logo
    Dank,
    /// Compositor logo
    Compositor,
    /// User-supplied image
    Custom,
}

impl LauncherLogoMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LauncherLogoMode::Apps => "apps",
            LauncherLogoMode::Os => "os",
            LauncherLogoMode::Dank => "dank",
            LauncherLogoMode::Compositor => "compositor",
            LauncherLogoMode::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "apps" => Some(LauncherLogoMode::Apps),
            "os" => Some(LauncherLogoMode::Os),
            "dank" => Some(LauncherLogoMode::Dank),
            "compositor" => Some(LauncherLogoMode::Compositor),
            "custom" => Some(LauncherLogoMode::Custom),
            _ => None,
        }
    }

    pub fn to_value(self) -> Value {
        Value::from(self.as_str())
    }
}
