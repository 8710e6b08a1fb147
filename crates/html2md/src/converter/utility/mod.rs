//! Shared helpers for the converter.

pub(crate) mod metadata;
pub(crate) mod output;
