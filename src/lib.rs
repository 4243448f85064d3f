//! # Connect Four
//!
//! A two-player Connect Four game built around a headless rules engine.
//! The engine can be driven from the terminal UI (Ratatui), from the
//! line-oriented console, or directly from code and tests; all three give
//! identical outcomes for the same sequence of column drops.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win detection, engine
//! - [`console`] — Text console front end and scripted-session harness
//! - [`ui`] — Terminal UI: board view, name editor, help overlay
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — Tracing subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
