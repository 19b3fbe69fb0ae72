//! Input device abstractions for plane-anchored placement
//!
//! This crate provides platform-agnostic pointer input types. The host
//! windowing layer translates its native events (Android `MotionEvent`,
//! winit `Touch`/`CursorMoved`, browser pointer events) into these types
//! before handing them to the placement controller.
//!
//! # Modules
//!
//! - [`pointer`]: Single-pointer samples and event phases

pub mod pointer;

// Re-export commonly used types at crate root
pub use pointer::{PointerPhase, PointerSample};
