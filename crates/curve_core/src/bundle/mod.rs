//! Build results.
//!
//! - [`block`]: Jacobian column ranges per curve ([`CurveBuildingBlockBundle`])
//! - [`multicurve`]: Curves keyed by currency and index ([`MulticurveBundle`])

pub mod block;
pub mod multicurve;

pub use block::{BlockRange, CurveBuildingBlock, CurveBuildingBlockBundle, JacobianMatrix};
pub use multicurve::{AttachmentConflict, MulticurveBundle};
