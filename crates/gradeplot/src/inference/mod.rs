//! Inference engine for scheme detection and normalization.

mod resolver;
mod tally;

pub use resolver::{Estimate, ResolutionResult, ResolverConfig, SchemeResolver};
pub use tally::{MatchTally, SchemeScore};
