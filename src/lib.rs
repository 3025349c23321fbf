// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Tight camera framing of axis-aligned bounding boxes.
//!
//! Boundsfit computes where to put a perspective or orthographic camera so
//! that a bounding box fills as much of the frame as its shape allows,
//! with a configurable padding margin. It was written for batch
//! generation of prefab icon thumbnails, where every icon should be
//! cropped tightly regardless of the prefab's proportions.
//!
//! # Key entry points
//!
//! - [`camera::fit()`] - the stateless fitter
//! - [`camera::Camera`] - render-ready view/projection for a fitted pose
//! - [`icons::IconFramer`] - orientation-aware framing of a prefab's bounds
//! - [`icons::IconBatch`] - which icons of a batch need rendering
//! - [`options::Options`] - TOML-backed icon generator settings
//!
//! # Algorithm
//!
//! The perspective fit does not settle for a bounding sphere. For each of
//! the four frustum side planes it finds the box corner the plane has to
//! pass through, intersects the left/right and top/bottom plane pairs into
//! two lines, and places the camera on the closest segment between those
//! lines. All four sides end up tangent to the box silhouette along the
//! binding axis. Very wide fields of view can put that point on the
//! nearest corner, so the camera then backs off until every corner keeps
//! a small depth margin.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod icons;
pub mod options;

pub use error::FitError;
