//! Common utilities for the tatami background renderer.
//!
//! This crate provides shared infrastructure used by the CSS math and
//! rendering components:
//! - **Warning System** - colored terminal output for unsupported values
//! - **Image Data** - decoded RGBA image data with optional sprite clipping

pub mod image;
pub mod warning;
