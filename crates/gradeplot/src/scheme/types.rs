//! Core type definitions for grading and response schemes.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// A fixed categorical vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SchemeId {
    /// Unsatisfactory / Borderline / Satisfactory / Excellent.
    #[serde(rename = "UBSE")]
    Ubse,
    /// UBSE without Borderline.
    #[serde(rename = "USE")]
    Use,
    /// UBSE without Excellent.
    #[serde(rename = "UBS")]
    Ubs,
    /// Correct / Incorrect / Don't Know.
    #[serde(rename = "CIDK")]
    Cidk,
    /// Competent / Needs Improvement / Not Competent.
    #[serde(rename = "CNINC")]
    Cninc,
    /// Pass / Fail with distinction.
    #[serde(rename = "PFE")]
    Pfe,
    /// Pass / Fail.
    #[serde(rename = "PF")]
    Pf,
    Gender,
    Ethnicity,
    Disability,
    /// No scheme could be determined.
    Unknown,
}

impl SchemeId {
    /// Every scheme, in display order.
    pub const ALL: [SchemeId; 11] = [
        SchemeId::Ubse,
        SchemeId::Use,
        SchemeId::Ubs,
        SchemeId::Cidk,
        SchemeId::Cninc,
        SchemeId::Pfe,
        SchemeId::Pf,
        SchemeId::Gender,
        SchemeId::Ethnicity,
        SchemeId::Disability,
        SchemeId::Unknown,
    ];

    /// Short name used in messages and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SchemeId::Ubse => "UBSE",
            SchemeId::Use => "USE",
            SchemeId::Ubs => "UBS",
            SchemeId::Cidk => "CIDK",
            SchemeId::Cninc => "CNINC",
            SchemeId::Pfe => "PFE",
            SchemeId::Pf => "PF",
            SchemeId::Gender => "Gender",
            SchemeId::Ethnicity => "Ethnicity",
            SchemeId::Disability => "Disability",
            SchemeId::Unknown => "Unknown",
        }
    }

    /// The scheme whose catalog entries normalize this scheme's values.
    ///
    /// Reduced schemes (USE, UBS, PF) have no entries of their own.
    pub fn catalog_scheme(&self) -> SchemeId {
        match self {
            SchemeId::Use | SchemeId::Ubs => SchemeId::Ubse,
            SchemeId::Pf => SchemeId::Pfe,
            other => *other,
        }
    }

    /// Category axis label for charts of this scheme.
    pub fn axis_label(&self) -> &'static str {
        match self {
            SchemeId::Ubse
            | SchemeId::Use
            | SchemeId::Ubs
            | SchemeId::Cninc
            | SchemeId::Pfe
            | SchemeId::Pf => "Grade",
            SchemeId::Cidk => "Response",
            SchemeId::Gender => "Gender",
            SchemeId::Ethnicity => "Ethnicity",
            SchemeId::Disability => "Disability",
            SchemeId::Unknown => "Unknown Scheme",
        }
    }

    /// Returns true if this is a concrete, chartable scheme.
    pub fn is_known(&self) -> bool {
        !matches!(self, SchemeId::Unknown)
    }
}

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemeId::ALL
            .iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown scheme: {}", s))
    }
}

/// Caller hint used to break ties between overlapping schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ForceScheme {
    #[serde(rename = "USE")]
    Use,
    #[serde(rename = "UBS")]
    Ubs,
    #[serde(rename = "PF")]
    Pf,
    #[serde(rename = "CIDK")]
    Cidk,
    #[serde(rename = "CNINC")]
    Cninc,
}

impl ForceScheme {
    /// Interpret caller text. Anything unrecognised counts as not supplied.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        let raw = value?;
        let parsed = raw.parse().ok();
        if parsed.is_none() {
            tracing::debug!(force_scheme = raw, "ignoring unrecognised force scheme");
        }
        parsed
    }

    /// The scheme this hint asks for.
    pub fn scheme(&self) -> SchemeId {
        match self {
            ForceScheme::Use => SchemeId::Use,
            ForceScheme::Ubs => SchemeId::Ubs,
            ForceScheme::Pf => SchemeId::Pf,
            ForceScheme::Cidk => SchemeId::Cidk,
            ForceScheme::Cninc => SchemeId::Cninc,
        }
    }

    /// For reductions: the full scheme and the level whose absence permits
    /// narrowing to the reduced scheme.
    pub fn reduction(&self) -> Option<(SchemeId, &'static str)> {
        match self {
            ForceScheme::Use => Some((SchemeId::Ubse, "Borderline")),
            ForceScheme::Ubs => Some((SchemeId::Ubse, "Excellent")),
            ForceScheme::Pf => Some((SchemeId::Pfe, "Excellent")),
            ForceScheme::Cidk | ForceScheme::Cninc => None,
        }
    }
}

impl fmt::Display for ForceScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme().name())
    }
}

impl FromStr for ForceScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USE" => Ok(ForceScheme::Use),
            "UBS" => Ok(ForceScheme::Ubs),
            "PF" => Ok(ForceScheme::Pf),
            "CIDK" => Ok(ForceScheme::Cidk),
            "CNINC" => Ok(ForceScheme::Cninc),
            _ => Err(format!(
                "Unknown force scheme: {}. Use: USE, UBS, PF, CIDK, or CNINC.",
                s
            )),
        }
    }
}

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Color([(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8])
    }

    /// `#RRGGBB` form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0[0], self.0[1], self.0[2])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}
