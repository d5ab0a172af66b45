//! Types shared by every entity module.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything carrying a stable string id. Used by the state container to
/// match rows and by the populator to index reference collections.
pub trait Identified {
    fn key(&self) -> &str;
}

/// A record with a display name, such as a reference entity.
pub trait Named: Identified {
    fn name(&self) -> &str;
}

/// `{id, name}` projection of a resolved foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

impl NamedRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn of<T: Named + ?Sized>(record: &T) -> Self {
        Self::new(record.key(), record.name())
    }
}

/// Lifecycle status of staff, teachers and students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Pending,
    Archive,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Inactive,
        Status::Pending,
        Status::Archive,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Inactive => "INACTIVE",
            Status::Pending => "PENDING",
            Status::Archive => "ARCHIVE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown status: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&Status::Archive).unwrap(), "\"ARCHIVE\"");
        let status: Status = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(status, Status::Pending);
    }

    #[test]
    fn test_status_from_str_is_case_insensitive() {
        assert_eq!("inactive".parse::<Status>().unwrap(), Status::Inactive);
        assert!("retired".parse::<Status>().is_err());
    }
}
