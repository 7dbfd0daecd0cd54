//! Scheme identifiers and the static label catalog.

mod catalog;
mod types;

pub use catalog::{
    fallback_colors, Catalog, CatalogEntry, FALLBACK_PALETTE, OUT_OF_SCHEME_COLOR,
    OUT_OF_SCHEME_LEVEL,
};
pub use types::{Color, ForceScheme, SchemeId};
