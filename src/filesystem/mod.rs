//! Turning a parsed [`TreeLayout`](crate::tree::TreeLayout) into real
//! directories and empty files.

mod materializer;

pub use materializer::{MaterializeError, MaterializeReport, Materializer, Tally};
