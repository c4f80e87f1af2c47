//! Command implementations for the Clerkly CLI

pub mod fields;
pub mod generate;
pub mod list;
