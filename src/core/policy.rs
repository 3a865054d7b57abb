//! Single authorization gate, consulted once per command.

use crate::errors::{AppError, AppResult};
use crate::models::role::Role;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny(&'static str),
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allow)
    }
}

/// Operations a command may need clearance for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ViewOwnStatus,
    ViewOtherStatus,
    Punch,
    Export,
}

pub fn authorize(role: Role, operation: Operation) -> Access {
    match (role, operation) {
        (Role::Employee, Operation::ViewOtherStatus) => {
            Access::Deny("only managers and admins can view another user's status")
        }
        _ => Access::Allow,
    }
}

/// Convenience wrapper mapping a denial to `AppError::Forbidden`.
pub fn ensure(role: Role, operation: Operation) -> AppResult<()> {
    match authorize(role, operation) {
        Access::Allow => Ok(()),
        Access::Deny(reason) => Err(AppError::Forbidden(reason.to_string())),
    }
}
