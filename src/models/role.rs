/// User role as configured on the client; mirrors what the server enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    pub fn code(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// Helper: convert input code from the config file (any case).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "employee" => Some(Role::Employee),
            "manager" => Some(Role::Manager),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}
