//! Camera fitting for bounding boxes.
//!
//! Provides the tight-fit placement algorithm, the camera description it
//! consumes, a render-ready camera for the fitted pose, and frustum tests
//! to check what that camera sees.

/// Render-ready camera with view and projection matrices.
pub mod core;
/// Tight-fit camera placement.
pub mod fit;
/// View frustum extraction and containment tests.
pub mod frustum;
/// Projection parameters and viewing direction.
pub mod spec;

pub use self::core::{Camera, Projection};
pub use fit::{fit, FitResult, NEAR_CLEARANCE};
pub use frustum::Frustum;
pub use spec::{CameraSpec, ViewBasis};
