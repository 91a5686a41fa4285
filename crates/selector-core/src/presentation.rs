//! Hints forwarded verbatim to the host's overlay and scroll primitives.
//!
//! The widget never interprets these; it only carries them on the view
//! tree. Each accepts the string spelling hosts usually configure with.

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    Portrait,
    Landscape,
    PortraitUpsideDown,
    LandscapeLeft,
    LandscapeRight,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
            Orientation::PortraitUpsideDown => "portrait-upside-down",
            Orientation::LandscapeLeft => "landscape-left",
            Orientation::LandscapeRight => "landscape-right",
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            "portrait-upside-down" => Ok(Orientation::PortraitUpsideDown),
            "landscape-left" => Ok(Orientation::LandscapeLeft),
            "landscape-right" => Ok(Orientation::LandscapeRight),
            other => Err(ConfigError::UnknownOrientation(other.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the overlay enters and leaves the screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AnimationType {
    None,
    #[default]
    Slide,
    Fade,
}

impl AnimationType {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationType::None => "none",
            AnimationType::Slide => "slide",
            AnimationType::Fade => "fade",
        }
    }
}

impl FromStr for AnimationType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(AnimationType::None),
            "slide" => Ok(AnimationType::Slide),
            "fade" => Ok(AnimationType::Fade),
            other => Err(ConfigError::UnknownAnimation(other.to_string())),
        }
    }
}

impl fmt::Display for AnimationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether taps inside a scroll region reach their target while the
/// software keyboard is up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum KeyboardPersistTaps {
    #[default]
    Always,
    Never,
    Handled,
}

impl KeyboardPersistTaps {
    pub fn as_str(self) -> &'static str {
        match self {
            KeyboardPersistTaps::Always => "always",
            KeyboardPersistTaps::Never => "never",
            KeyboardPersistTaps::Handled => "handled",
        }
    }
}

/// `true` maps to `Always`, `false` to `Never`.
impl From<bool> for KeyboardPersistTaps {
    fn from(persist: bool) -> Self {
        if persist {
            KeyboardPersistTaps::Always
        } else {
            KeyboardPersistTaps::Never
        }
    }
}

impl FromStr for KeyboardPersistTaps {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" | "true" => Ok(KeyboardPersistTaps::Always),
            "never" | "false" => Ok(KeyboardPersistTaps::Never),
            "handled" => Ok(KeyboardPersistTaps::Handled),
            other => Err(ConfigError::UnknownPersistTaps(other.to_string())),
        }
    }
}

impl fmt::Display for KeyboardPersistTaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
