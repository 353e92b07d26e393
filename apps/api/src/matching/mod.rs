// Matching core: skill importance classification, match scoring, job ranking.
// Pure functions only; handlers wire them to the catalogue and the parser.

pub mod classifier;
pub mod engine;
pub mod handlers;
pub mod jitter;
