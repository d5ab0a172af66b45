use std::fmt;

/// A repository operation. Drives simulated latency, metric labels and the
/// wording of state-container error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Dropdown,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
        Operation::Dropdown,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Dropdown => "dropdown",
        }
    }

    /// Verb used in user-facing failure messages, e.g. "Failed to fetch staffs".
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Operation::List | Operation::Get | Operation::Dropdown => "fetch",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
