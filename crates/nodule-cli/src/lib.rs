//! Library components for the nodule command-line tool.

pub mod case;
pub mod logging;
