//! # User Interface Module
//!
//! Dear ImGui layer of the plot viewer.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`statistics_panels`] - The 2×2 grid of statistics plots
//!
//! ## Input Handling
//!
//! Panels are fixed in place; the only interaction is closing the window
//! (close button or Escape), which ends the viewer's blocking `show` call.

pub mod manager;
pub mod panel;

// Re-export main types
pub use manager::UiManager;
pub use panel::statistics_panels;
