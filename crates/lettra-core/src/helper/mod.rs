//! Value parsing and HTML assembly helpers used by the renderer.

pub mod condition;
pub mod size;
pub mod spacing;
pub mod tag;
