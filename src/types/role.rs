use std::fmt;
use std::str::FromStr;

/// Grantable application roles.
///
/// "user" is the implicit default for every authenticated account and is
/// never stored as a grant, so it is deliberately absent here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Premium,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Premium => "premium",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a role name that cannot be granted.
#[derive(Debug, thiserror::Error)]
#[error("Invalid role: {0}")]
pub struct InvalidRole(pub String);

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "premium" => Ok(Role::Premium),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}
