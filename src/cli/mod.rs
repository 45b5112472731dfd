//! Command line interface for the Tapis binary.

pub mod args;
pub mod commands;
