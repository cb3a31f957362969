//! Command implementations for the Tasks CLI

pub mod serve;
