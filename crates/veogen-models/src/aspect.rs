//! Aspect ratio and resolution definitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Aspect ratios selectable on a generation request.
///
/// The provider only renders two ratios; [`AspectRatio::provider_ratio`]
/// maps the full set onto the supported subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum AspectRatio {
    /// Let the provider decide (treated as widescreen)
    #[serde(rename = "auto")]
    #[default]
    Auto,
    /// Widescreen 16:9
    #[serde(rename = "16:9")]
    Wide16x9,
    /// Vertical 9:16
    #[serde(rename = "9:16")]
    Tall9x16,
    /// Square 1:1
    #[serde(rename = "1:1")]
    Square,
    /// Classic 4:3
    #[serde(rename = "4:3")]
    Standard4x3,
    /// Portrait 3:4
    #[serde(rename = "3:4")]
    Portrait3x4,
    /// Cinematic 21:9
    #[serde(rename = "21:9")]
    UltraWide21x9,
}

impl AspectRatio {
    /// All selectable ratios.
    pub const ALL: &'static [AspectRatio] = &[
        AspectRatio::Auto,
        AspectRatio::Wide16x9,
        AspectRatio::Tall9x16,
        AspectRatio::Square,
        AspectRatio::Standard4x3,
        AspectRatio::Portrait3x4,
        AspectRatio::UltraWide21x9,
    ];

    /// The ratio string as shown to users and used in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Auto => "auto",
            AspectRatio::Wide16x9 => "16:9",
            AspectRatio::Tall9x16 => "9:16",
            AspectRatio::Square => "1:1",
            AspectRatio::Standard4x3 => "4:3",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::UltraWide21x9 => "21:9",
        }
    }

    /// Map onto the subset the provider can render.
    ///
    /// Vertical-leaning ratios (9:16, 3:4) become 9:16; everything else
    /// becomes 16:9.
    pub fn provider_ratio(&self) -> ProviderAspectRatio {
        match self {
            AspectRatio::Tall9x16 | AspectRatio::Portrait3x4 => ProviderAspectRatio::Tall,
            _ => ProviderAspectRatio::Wide,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(AspectRatio::Auto),
            "16:9" => Ok(AspectRatio::Wide16x9),
            "9:16" => Ok(AspectRatio::Tall9x16),
            "1:1" => Ok(AspectRatio::Square),
            "4:3" => Ok(AspectRatio::Standard4x3),
            "3:4" => Ok(AspectRatio::Portrait3x4),
            "21:9" => Ok(AspectRatio::UltraWide21x9),
            _ => Err(AspectRatioParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown aspect ratio: {0}")]
pub struct AspectRatioParseError(String);

/// The two aspect ratios the provider actually renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ProviderAspectRatio {
    /// 16:9
    #[serde(rename = "16:9")]
    Wide,
    /// 9:16
    #[serde(rename = "9:16")]
    Tall,
}

impl ProviderAspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderAspectRatio::Wide => "16:9",
            ProviderAspectRatio::Tall => "9:16",
        }
    }
}

impl fmt::Display for ProviderAspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output resolution for generated video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
pub enum Resolution {
    /// 1280x720
    #[serde(rename = "720p")]
    #[default]
    P720,
    /// 1920x1080
    #[serde(rename = "1080p")]
    P1080,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P720 => "720p",
            Resolution::P1080 => "1080p",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "720p" => Ok(Resolution::P720),
            "1080p" => Ok(Resolution::P1080),
            _ => Err(ResolutionParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown resolution: {0}")]
pub struct ResolutionParseError(String);
