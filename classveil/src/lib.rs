// classveil/src/lib.rs
//! # Classveil CLI
//!
//! This crate provides the command-line front end for the classveil core
//! engine: argument parsing, logger bootstrap, console progress reporting,
//! and summary presentation.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod reporter;
pub mod ui;
