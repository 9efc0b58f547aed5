//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal UI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`ui`] — Terminal UI (ratatui) and a plain console front end
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
