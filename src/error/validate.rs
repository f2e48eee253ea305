//! Validation utilities for field and curve operations

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate curve membership
#[inline(always)]
pub fn on_curve(is_member: bool, context: &'static str) -> Result<()> {
    if !is_member {
        return Err(Error::InvalidPoint { context });
    }
    Ok(())
}
