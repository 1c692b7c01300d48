//! # Graphics Module
//!
//! GPU surface management for the plot viewer window. All drawing happens
//! in the Dear ImGui overlay; the [`RenderEngine`] clears the surface,
//! hands the frame to the UI pass, and presents it.

pub mod render_engine;

pub use render_engine::RenderEngine;
