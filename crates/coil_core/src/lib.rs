//! Coil Core
//!
//! Foundational primitives for the coil spring animation:
//!
//! - **Matrices**: dense row-major `f32` grids with checked products
//! - **Transformations**: 4x4 affine translation, rotation and scale, composed
//!   by matrix product
//! - **Key events**: the raw key callback model the animation reacts to
//!
//! # Example
//!
//! ```rust
//! use coil_core::Transformation;
//!
//! let jump = Transformation::translation(0.2, 0.1, 0.0)
//!     .compose(&Transformation::rotation_about(0.0, 0.08, 0.5));
//!
//! // 16 floats, row-major, ready for a uniform upload
//! assert_eq!(jump.export_buffer().len(), 16);
//! ```

pub mod error;
pub mod events;
pub mod matrix;
pub mod transform;

pub use error::MatrixError;
pub use events::{KeyAction, KeyEvent, Modifiers};
pub use matrix::Matrix;
pub use transform::Transformation;
