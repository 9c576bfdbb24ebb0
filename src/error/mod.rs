//! Failure types for the two error channels.
//!
//! Validation failures are data ([`Violation`], [`Violations`]) and travel
//! inside verdicts; programming and configuration failures are [`Fatal`]
//! errors that abort the in-progress call.

mod fatal;
mod violation;

pub use fatal::Fatal;
pub use violation::{Violation, Violations};
