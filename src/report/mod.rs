//! Report renderers for license findings.
//!
//! - [`terminal`]: colored, tabular output with summary box; respects `--verbose` / `--quiet`.
//! - [`json`]: the findings as pretty-printed JSON.

pub mod json;
pub mod terminal;
