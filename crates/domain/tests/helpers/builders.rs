#![allow(dead_code)]
use dnsdiff_domain::{KindRecords, RecordKind, ResolvedRecords};

pub struct ResolvedRecordsBuilder {
    records: ResolvedRecords,
}

impl ResolvedRecordsBuilder {
    pub fn new() -> Self {
        let mut records = ResolvedRecords::new("example.com");
        for kind in RecordKind::ALL {
            records.set(KindRecords::new(kind, Vec::new(), "NOERROR"));
        }
        Self { records }
    }

    pub fn kind(mut self, kind: RecordKind, values: &[&str]) -> Self {
        let status = self.records.status(kind).to_string();
        self.records.set(KindRecords::new(
            kind,
            values.iter().map(|v| v.to_string()),
            status,
        ));
        self
    }

    pub fn status(mut self, kind: RecordKind, status: &str) -> Self {
        let values = self.records.values(kind).to_vec();
        self.records.set(KindRecords::new(kind, values, status));
        self
    }

    pub fn build(self) -> ResolvedRecords {
        self.records
    }
}
