//! Library owners: the user account or group a request is scoped to.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    Group,
    User,
}

impl OwnerKind {
    /// Leading path segment of the owner's API prefix.
    pub fn path_segment(&self) -> &'static str {
        match self {
            OwnerKind::Group => "groups",
            OwnerKind::User => "users",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerKind::Group => write!(f, "group"),
            OwnerKind::User => write!(f, "user"),
        }
    }
}

impl FromStr for OwnerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(OwnerKind::Group),
            "user" => Ok(OwnerKind::User),
            other => Err(format!("unknown owner kind '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub kind: OwnerKind,
    pub id: String,
}

impl Owner {
    pub fn group(id: impl Into<String>) -> Self {
        Self {
            kind: OwnerKind::Group,
            id: id.into(),
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self {
            kind: OwnerKind::User,
            id: id.into(),
        }
    }

    /// API path prefix, e.g. `/groups/555`.
    pub fn api_prefix(&self) -> String {
        format!("/{}/{}", self.kind.path_segment(), self.id)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

/// Parses an identity value of the form `group <id>` or `user <id>`.
impl FromStr for Owner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [kind, id] = parts.as_slice() else {
            return Err(format!("expected '<group|user> <id>', got '{}'", s));
        };

        let kind = kind.parse::<OwnerKind>()?;
        if !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("owner id '{}' is not numeric", id));
        }

        Ok(Self {
            kind,
            id: id.to_string(),
        })
    }
}
