//! Text output: attribute inspection and JSON.

mod detail;
mod json;

pub use detail::{is_structural, DetailInspector, DetailRow, ValueTone};
pub use json::{node_to_json, to_json, JsonFormat};
