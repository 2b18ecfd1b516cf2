use super::{RecordKind, ResolvedRecords};
use std::fmt;

/// One mismatching field between two resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub field: String,
    pub value_a: String,
    pub value_b: String,
}

impl DiffEntry {
    pub fn new(field: impl Into<String>, value_a: impl Into<String>, value_b: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value_a: value_a.into(),
            value_b: value_b.into(),
        }
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} != {}", self.field, self.value_a, self.value_b)
    }
}

/// Ordered differences between the record sets served by two name servers.
///
/// Empty iff every kind's values and status match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostDiff {
    entries: Vec<DiffEntry>,
}

impl HostDiff {
    /// Compares `a` against `b` kind by kind, in declaration order. A value
    /// mismatch is reported before a status mismatch for the same kind.
    pub fn between(a: &ResolvedRecords, b: &ResolvedRecords) -> Self {
        let mut entries = Vec::new();

        for kind in RecordKind::ALL {
            let left = a.get(kind);
            let right = b.get(kind);

            if left.values() != right.values() {
                entries.push(DiffEntry::new(
                    kind.as_str(),
                    left.render_values(),
                    right.render_values(),
                ));
            }

            if left.status != right.status {
                entries.push(DiffEntry::new(
                    format!("{} status", kind.as_str()),
                    left.status.clone(),
                    right.status.clone(),
                ));
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[DiffEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}
