use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::CatalogError;

/// Equipment product line. Each family has its own filtration mechanism and
/// its own sizing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Family {
    /// Hydrocyclone separators (LCS / CTS lines).
    Separator,
    /// Self-cleaning screen filters (CTF line).
    #[serde(rename = "VAF")]
    Vaf,
    /// Vortisand cross-flow media filters (VC line).
    Vortisand,
}

impl Family {
    /// Families in the order results are presented.
    pub const ALL: [Family; 3] = [Family::Separator, Family::Vaf, Family::Vortisand];

    pub fn label(self) -> &'static str {
        match self {
            Family::Separator => "Separator",
            Family::Vaf => "VAF",
            Family::Vortisand => "Vortisand",
        }
    }

    /// Filtered-water quality the family delivers.
    pub fn water_quality(self) -> &'static str {
        match self {
            Family::Separator => "Good (70 Micron / High SG)",
            Family::Vaf => "Better (25 Micron / All)",
            Family::Vortisand => "Best (0.5 Micron / All)",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Family {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "separator" | "separators" => Ok(Family::Separator),
            "vaf" => Ok(Family::Vaf),
            "vortisand" => Ok(Family::Vortisand),
            _ => Err(CatalogError::UnknownFamily {
                name: s.to_string(),
            }),
        }
    }
}

/// Files accept the same spellings as the command line.
impl<'de> Deserialize<'de> for Family {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
