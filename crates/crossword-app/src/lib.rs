//! Shared library module for the Crossword app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod action_handler;
pub mod app;
pub mod game_factory;
pub mod render;
pub mod state;
