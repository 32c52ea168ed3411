//! Library components for the shelver CLI.

pub mod audit;
pub mod copy;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
