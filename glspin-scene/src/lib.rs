//! # glspin-scene
//!
//! Target-independent scene data for the spinning-triangle demo: the
//! static triangle geometry, the per-frame rotation accumulator, and the
//! 4×4 model-view matrix recomputed from it every frame.
//!
//! ```text
//!  RotationState.advance()        ◀─── once per scheduled frame
//!       │
//!       ▼
//!  RotationState.model_view()     ◀─── identity-then-rotate-about-Z
//!       │
//!       ▼
//!  Mat4 (column-major)            ◀─── uploaded as the model-view uniform
//! ```
//!
//! Nothing here touches the browser; the crate compiles and tests
//! natively.

pub mod matrix;
pub mod rotation;
pub mod vertex;

// Re-exports for convenience
pub use matrix::Mat4;
pub use rotation::{RotationState, DEFAULT_STEP};
pub use vertex::TriangleVertex;
