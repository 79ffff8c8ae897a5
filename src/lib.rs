//! # Connect Four Engine
//!
//! A two-player Connect Four game engine with three computer difficulty
//! tiers. Features a terminal UI built with Ratatui and a headless arena
//! for pitting tiers against each other.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, win/draw detection, move engine
//! - [`ai`] — Difficulty tiers, tactical move selection, `Agent` trait
//! - [`session`] — Session controller with cancelable deferred computer moves
//! - [`arena`] — Computer-vs-computer rounds and result tallies
//! - [`ui`] — Terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
