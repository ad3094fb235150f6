//! Pokedex TUI - list creatures, inspect one
//!
//! This library exposes the app's modules for the binary and for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod envelope;
pub mod format;
pub mod logging;
pub mod reducer;
pub mod source;
pub mod sprite;
pub mod state;
