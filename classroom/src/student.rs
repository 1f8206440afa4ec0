use std::fmt;

use crate::types::StudentName;

/// A student is identified by name alone.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Student {
    name: StudentName,
}

impl Student {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: StudentName::new(name),
        }
    }

    pub fn name(&self) -> &StudentName {
        &self.name
    }
}

impl From<StudentName> for Student {
    fn from(name: StudentName) -> Self {
        Self { name }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)
    }
}
