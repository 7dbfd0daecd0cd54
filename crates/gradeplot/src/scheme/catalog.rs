//! Static catalog of raw label spellings, their schemes and canonical labels.
//!
//! Matching is exact and case-sensitive: every accepted spelling is listed
//! explicitly. A raw value may belong to several schemes (e.g. `"C"` is both
//! Correct and Competent), so lookups return a set of entries.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use super::types::{Color, SchemeId};

/// One (raw value, scheme, canonical label) mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogEntry {
    pub raw_value: &'static str,
    pub scheme: SchemeId,
    pub canonical_label: &'static str,
}

type Spellings = &'static [(&'static str, &'static [&'static str])];

// =============================================================================
// SPELLINGS
// =============================================================================
// Canonical label first, then every raw spelling that maps to it. Each
// canonical label is listed among its own spellings.

const UBSE_SPELLINGS: Spellings = &[
    (
        "Unsatisfactory",
        &["U", "u", "Unsatisfactory", "unsatisfactory", "UNSATISFACTORY", "Unsat", "unsat"],
    ),
    (
        "Borderline",
        &["B", "b", "Borderline", "borderline", "BORDERLINE", "Border line", "border line", "BL"],
    ),
    (
        "Satisfactory",
        &["S", "s", "Satisfactory", "satisfactory", "SATISFACTORY", "Sat", "sat"],
    ),
    ("Excellent", &["E", "e", "Excellent", "excellent", "EXCELLENT", "Exc"]),
];

const PFE_SPELLINGS: Spellings = &[
    ("Fail", &["F", "f", "Fail", "fail", "FAIL"]),
    ("Pass", &["P", "p", "Pass", "pass", "PASS"]),
    (
        "Excellent",
        &["E", "e", "Excellent", "excellent", "EXCELLENT", "Exc", "Distinction", "distinction"],
    ),
];

const CIDK_SPELLINGS: Spellings = &[
    ("Correct", &["C", "c", "Correct", "correct", "CORRECT"]),
    ("Incorrect", &["I", "i", "Incorrect", "incorrect", "INCORRECT"]),
    (
        "Don't Know",
        &[
            "DK", "dk", "Dk", "Don't Know", "Don't know", "don't know", "DON'T KNOW", "Dont Know",
            "dont know", "DontKnow", "dontknow", "Do not know",
        ],
    ),
];

const CNINC_SPELLINGS: Spellings = &[
    ("Competent", &["C", "c", "Competent", "competent", "COMPETENT"]),
    (
        "Needs Improvement",
        &["NI", "ni", "Needs Improvement", "Needs improvement", "needs improvement", "NeedsImprovement"],
    ),
    (
        "Not Competent",
        &["NC", "nc", "Not Competent", "Not competent", "not competent", "NotCompetent"],
    ),
];

const GENDER_SPELLINGS: Spellings = &[
    ("Female", &["Female", "female", "FEMALE"]),
    ("Male", &["Male", "male", "MALE"]),
    ("Non-binary", &["Non-binary", "non-binary", "Nonbinary", "nonbinary", "Non binary"]),
    ("Other", &["Other", "other"]),
    ("Prefer not to say", &["Prefer not to say", "prefer not to say", "Prefer Not To Say"]),
];

const ETHNICITY_SPELLINGS: Spellings = &[
    ("Asian", &["Asian", "asian", "ASIAN"]),
    ("Black", &["Black", "black", "BLACK"]),
    ("Mixed", &["Mixed", "mixed", "MIXED"]),
    ("White", &["White", "white", "WHITE"]),
    ("Other", &["Other", "other"]),
    ("Prefer not to say", &["Prefer not to say", "prefer not to say", "Prefer Not To Say"]),
];

const DISABILITY_SPELLINGS: Spellings = &[
    ("Disabled", &["Disabled", "disabled", "DISABLED"]),
    (
        "Not Disabled",
        &[
            "Not Disabled", "Not disabled", "not disabled", "No Known Disability",
            "No known disability", "no known disability",
        ],
    ),
    ("Prefer not to say", &["Prefer not to say", "prefer not to say", "Prefer Not To Say"]),
];

/// Schemes that own catalog entries. Reduced schemes borrow their parent's.
const CATALOGUED: &[(SchemeId, Spellings)] = &[
    (SchemeId::Ubse, UBSE_SPELLINGS),
    (SchemeId::Cidk, CIDK_SPELLINGS),
    (SchemeId::Cninc, CNINC_SPELLINGS),
    (SchemeId::Pfe, PFE_SPELLINGS),
    (SchemeId::Gender, GENDER_SPELLINGS),
    (SchemeId::Ethnicity, ETHNICITY_SPELLINGS),
    (SchemeId::Disability, DISABILITY_SPELLINGS),
];

// =============================================================================
// LEVELS AND PALETTES
// =============================================================================

const RED: Color = Color::from_hex(0xD7191C);
const AMBER: Color = Color::from_hex(0xFDAE61);
const LIGHT_GREEN: Color = Color::from_hex(0xA6D96A);
const GREEN: Color = Color::from_hex(0x1A9641);
const GREY: Color = Color::from_hex(0xBABABA);

const ORANGE: Color = Color::from_hex(0xE69F00);
const SKY_BLUE: Color = Color::from_hex(0x56B4E9);
const BLUISH_GREEN: Color = Color::from_hex(0x009E73);
const YELLOW: Color = Color::from_hex(0xF0E442);
const BLUE: Color = Color::from_hex(0x0072B2);
const VERMILION: Color = Color::from_hex(0xD55E00);
const PURPLE: Color = Color::from_hex(0xCC79A7);
const NEUTRAL: Color = Color::from_hex(0x999999);

/// Category that collects observations outside the resolved scheme.
pub const OUT_OF_SCHEME_LEVEL: &str = "NA";

/// Bar color of [`OUT_OF_SCHEME_LEVEL`].
pub const OUT_OF_SCHEME_COLOR: Color = Color::from_hex(0xDDDDDD);

/// Qualitative palette (Okabe-Ito) used where no fixed colors exist.
pub const FALLBACK_PALETTE: [Color; 8] = [
    ORANGE, SKY_BLUE, BLUISH_GREEN, YELLOW, BLUE, VERMILION, PURPLE, NEUTRAL,
];

fn levels(scheme: SchemeId) -> &'static [&'static str] {
    match scheme {
        SchemeId::Ubse => &["Unsatisfactory", "Borderline", "Satisfactory", "Excellent"],
        SchemeId::Use => &["Unsatisfactory", "Satisfactory", "Excellent"],
        SchemeId::Ubs => &["Unsatisfactory", "Borderline", "Satisfactory"],
        SchemeId::Cidk => &["Correct", "Incorrect", "Don't Know"],
        SchemeId::Cninc => &["Competent", "Needs Improvement", "Not Competent"],
        SchemeId::Pfe => &["Fail", "Pass", "Excellent"],
        SchemeId::Pf => &["Fail", "Pass"],
        SchemeId::Gender => &["Female", "Male", "Non-binary", "Other", "Prefer not to say"],
        SchemeId::Ethnicity => &["Asian", "Black", "Mixed", "White", "Other", "Prefer not to say"],
        SchemeId::Disability => &["Disabled", "Not Disabled", "Prefer not to say"],
        SchemeId::Unknown => &[],
    }
}

fn colors(scheme: SchemeId) -> &'static [Color] {
    match scheme {
        SchemeId::Ubse => &[RED, AMBER, LIGHT_GREEN, GREEN],
        SchemeId::Use => &[RED, LIGHT_GREEN, GREEN],
        SchemeId::Ubs => &[RED, AMBER, LIGHT_GREEN],
        SchemeId::Cidk => &[GREEN, RED, GREY],
        SchemeId::Cninc => &[GREEN, AMBER, RED],
        SchemeId::Pfe => &[RED, LIGHT_GREEN, GREEN],
        SchemeId::Pf => &[RED, LIGHT_GREEN],
        SchemeId::Gender => &[ORANGE, SKY_BLUE, BLUISH_GREEN, YELLOW, NEUTRAL],
        SchemeId::Ethnicity => &[BLUE, VERMILION, PURPLE, BLUISH_GREEN, YELLOW, NEUTRAL],
        SchemeId::Disability => &[BLUE, ORANGE, NEUTRAL],
        SchemeId::Unknown => &[],
    }
}

// =============================================================================
// CATALOG
// =============================================================================

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

/// Immutable lookup table from raw value to scheme memberships.
#[derive(Debug)]
pub struct Catalog {
    by_value: IndexMap<&'static str, Vec<CatalogEntry>>,
}

impl Catalog {
    /// The process-wide catalog, built on first use.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    fn build() -> Self {
        let mut by_value: IndexMap<&'static str, Vec<CatalogEntry>> = IndexMap::new();

        for &(scheme, spellings) in CATALOGUED {
            for &(canonical_label, raw_values) in spellings {
                for &raw_value in raw_values {
                    by_value.entry(raw_value).or_default().push(CatalogEntry {
                        raw_value,
                        scheme,
                        canonical_label,
                    });
                }
            }
        }

        Self { by_value }
    }

    /// All entries for a raw value, possibly from several schemes.
    pub fn lookup(&self, raw_value: &str) -> &[CatalogEntry] {
        self.by_value
            .get(raw_value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the raw value is known to any scheme.
    pub fn contains(&self, raw_value: &str) -> bool {
        self.by_value.contains_key(raw_value)
    }

    /// Canonical label of a raw value under a scheme (reduced schemes use
    /// their parent's entries).
    pub fn canonical(&self, raw_value: &str, scheme: SchemeId) -> Option<&'static str> {
        let target = scheme.catalog_scheme();
        self.lookup(raw_value)
            .iter()
            .find(|e| e.scheme == target)
            .map(|e| e.canonical_label)
    }

    /// Every entry belonging to a scheme, in catalog order.
    pub fn entries_for(&self, scheme: SchemeId) -> Vec<CatalogEntry> {
        let target = scheme.catalog_scheme();
        self.by_value
            .values()
            .flatten()
            .filter(|e| e.scheme == target)
            .copied()
            .collect()
    }

    /// Schemes with a fixed level list.
    pub fn schemes(&self) -> impl Iterator<Item = SchemeId> {
        SchemeId::ALL.into_iter().filter(SchemeId::is_known)
    }

    /// Ordered canonical levels of a scheme (empty for `Unknown`).
    pub fn levels_of(&self, scheme: SchemeId) -> &'static [&'static str] {
        levels(scheme)
    }

    /// Display colors parallel to [`Catalog::levels_of`].
    pub fn colors_of(&self, scheme: SchemeId) -> &'static [Color] {
        colors(scheme)
    }

    /// Number of distinct raw spellings.
    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    /// Whether the catalog holds no spellings.
    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }
}

/// Colors for `n` ad-hoc categories, cycling the fallback palette.
pub fn fallback_colors(n: usize) -> Vec<Color> {
    FALLBACK_PALETTE.iter().copied().cycle().take(n).collect()
}
