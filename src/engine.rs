//! Scanning engine and text metrics

pub mod metrics;
pub mod scanner;

pub use scanner::{Scanner, scan};
