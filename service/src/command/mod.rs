//! [`Command`] definition.

pub mod checkout;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::checkout::Checkout;
