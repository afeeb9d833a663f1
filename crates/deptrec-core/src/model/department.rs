use std::fmt;

use serde::{Deserialize, Serialize};

/// Department - one organizational unit
///
/// `id` is `None` exactly when the value has no row behind it, either because
/// it was never saved or because its row was deleted. Instances are plain
/// values: two of them may describe the same row and drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Store-generated row id (None until first save)
    pub id: Option<i64>,

    /// Department name
    pub name: String,

    /// Where the department sits
    pub location: String,
}

impl Department {
    /// Create an unsaved Department
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    /// Create a Department that claims an existing row id
    pub fn with_id(id: i64, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            location: location.into(),
        }
    }

    /// Map a `(id, name, location)` row into a Department
    pub fn from_row((id, name, location): (i64, String, String)) -> Self {
        Self::with_id(id, name, location)
    }

    /// Whether this value currently corresponds to a row
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl From<(i64, String, String)> for Department {
    fn from(row: (i64, String, String)) -> Self {
        Self::from_row(row)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Department {}: {}, {}>", id, self.name, self.location),
            None => write!(f, "<Department unsaved: {}, {}>", self.name, self.location),
        }
    }
}
