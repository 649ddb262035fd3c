//! Recoverable physics errors surfaced by stepping operations.
//!
//! These conditions come from degenerate scenario data. They are reported
//! instead of letting a division produce NaN or infinity that would then
//! poison every later snapshot.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Two bodies occupy exactly the same position, so the pairwise
    /// gravitational acceleration is undefined.
    CoincidentBodies { first: String, second: String },
    /// A body's rotation period is zero, so its axial spin rate is
    /// undefined.
    ZeroRotationPeriod { body: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentBodies { first, second } => {
                write!(f, "bodies '{}' and '{}' coincide; gravity is singular", first, second)
            }
            SimError::ZeroRotationPeriod { body } => {
                write!(f, "body '{}' has a zero rotation period", body)
            }
        }
    }
}

impl Error for SimError {}
