//! Software execution of tatami display lists.
//!
//! Executes a `DisplayList` to an RGBA pixel buffer: clip-stack maintenance,
//! repeating pattern fills sampled from the tiling rectangle, and PNG
//! output.

mod renderer;

pub use renderer::Renderer;
