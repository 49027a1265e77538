//! ARGIC product-code generation.
//!
//! [`CodeMapper`] turns vehicle attributes, the windows picked on the damage
//! diagram and the glass specification into a product code such as
//! `2436ABL`.

pub mod mapper;

pub use argic_model::{
    ArgicError, CodeBreakdown, CodeRequest, GlassSpecification, ProductCode, Result,
    VehicleDetails,
};
pub use mapper::{CodeMapper, NO_SEGMENT};
