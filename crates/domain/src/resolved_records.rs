use super::RecordKind;

/// Normalized values and response status for one record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindRecords {
    pub kind: RecordKind,
    values: Vec<String>,
    pub status: String,
}

impl KindRecords {
    /// Values are sorted lexicographically and deduplicated on construction.
    pub fn new(kind: RecordKind, values: impl IntoIterator<Item = String>, status: impl Into<String>) -> Self {
        let mut values: Vec<String> = values.into_iter().collect();
        values.sort();
        values.dedup();
        Self {
            kind,
            values,
            status: status.into(),
        }
    }

    pub fn empty(kind: RecordKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
            status: String::new(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Renders the value list as `[v1, v2]`.
    pub fn render_values(&self) -> String {
        format!("[{}]", self.values.join(", "))
    }
}

/// Every record kind resolved for one (server, hostname) pair.
///
/// All kinds are always present, in [`RecordKind::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecords {
    hostname: String,
    entries: Vec<KindRecords>,
}

impl ResolvedRecords {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            entries: RecordKind::ALL.into_iter().map(KindRecords::empty).collect(),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn set(&mut self, records: KindRecords) {
        if let Some(slot) = self.entries.iter_mut().find(|e| e.kind == records.kind) {
            *slot = records;
        }
    }

    pub fn with(mut self, records: KindRecords) -> Self {
        self.set(records);
        self
    }

    pub fn get(&self, kind: RecordKind) -> &KindRecords {
        // entries always holds every kind in declaration order
        &self.entries[Self::index_of(kind)]
    }

    pub fn values(&self, kind: RecordKind) -> &[String] {
        self.get(kind).values()
    }

    pub fn status(&self, kind: RecordKind) -> &str {
        &self.get(kind).status
    }

    pub fn iter(&self) -> impl Iterator<Item = &KindRecords> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.values().is_empty())
    }

    fn index_of(kind: RecordKind) -> usize {
        RecordKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default()
    }
}
