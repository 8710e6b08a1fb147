//! Inline element handlers.

pub(crate) mod code;
pub(crate) mod emphasis;
pub(crate) mod image;
pub(crate) mod link;
pub(crate) mod text;
