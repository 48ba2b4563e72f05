#![forbid(unsafe_code)]

pub mod agents;
pub mod cli;
pub mod error;
