//! HTTP request handlers, one module per resource.

pub mod ai;
pub mod cards;
pub mod presets;
