//! Domain definitions.

pub mod agreement;
pub mod tool;

pub use self::{agreement::RentalAgreement, tool::Tool};
