//! # Connect Four
//!
//! Two-player Connect Four on a 6x7 board, played over text input and output.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, turn state machine
//! - [`ui`] — Text front end: column prompt, status lines, interactive loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
