//! Configuration schedule
//!
//! Turns a compact configuration string such as `(3-5 -> 5-7) -> 10 -> 25-30`
//! into the ordered list of stages a timer walks through.
//!
//! - **stage**: `Stage` and its timing kind
//! - **parser**: the configuration grammar
//! - **display**: minute-aware formatting of stage text

mod display;
mod error;
mod parser;
mod stage;

pub use display::{format_stage_text, format_time, stage_strip, target_label};
pub use error::FormatError;
pub use parser::parse_config;
pub use stage::{Stage, StageKind};
