//! Inbound adapters driving the user directory.

pub mod cli;
