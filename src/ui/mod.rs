//! GUI module for the Nim game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod pile_view;
mod session;
mod theme;

pub use app::NimApp;
pub use session::{AiState, GameOutcome, MoveTimer, Session};
