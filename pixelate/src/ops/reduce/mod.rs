//! Per-block representative color for each strategy.

mod average;
mod median;
mod random;

pub(crate) use average::Average;
pub(crate) use median::Median;
pub(crate) use random::RandomPick;
