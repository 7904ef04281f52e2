//! Library components for the CIDP evaluation CLI.

pub mod case;
pub mod logging;
pub mod report;
