//! Conformance validators, one module per concern.

pub mod descriptors;
pub mod ranges;
pub mod references;
