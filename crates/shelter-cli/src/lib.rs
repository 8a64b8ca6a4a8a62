//! Terminal shells around the adoption engine.
//!
//! The `shelter` binary runs one batch and prints the JSON report; the
//! `shelter-menu` binary runs the interactive lookup session.

pub mod args;
pub mod menu;
pub mod output;
pub mod telemetry;
