//! Read-only draw data for an external renderer
//!
//! The simulation never talks to a graphics API. Hosts call
//! `build_instances` once per frame and upload the records as-is.

pub mod digits;
pub mod instances;

pub use digits::{score_digits, score_instances, segment_mask};
pub use instances::{Instance, ShapeKind, build_instances, colors};
