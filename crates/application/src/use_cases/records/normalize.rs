//! Canonical string forms for answer records.

use dnsdiff_domain::RecordKind;
use hickory_proto::rr::{Name, RData, Record};

/// Renders a name without its trailing root dot.
pub fn name_to_string(name: &Name) -> String {
    let utf8 = name.to_utf8();
    match utf8.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => utf8,
    }
}

/// True if `record` belongs to the answer set for `kind`. CNAMEs returned
/// alongside an A query, for instance, are skipped.
pub fn matches_kind(record: &Record, kind: RecordKind) -> bool {
    u16::from(record.record_type()) == kind.to_u16()
}

/// Canonical values of every matching record in an answer section.
pub fn answer_values(kind: RecordKind, answers: &[Record]) -> Vec<String> {
    answers
        .iter()
        .filter(|record| matches_kind(record, kind))
        .flat_map(|record| canonical_values(kind, record.data()))
        .collect()
}

/// TXT and SPF records yield one value per character-string; every other
/// kind yields at most one.
pub fn canonical_values(kind: RecordKind, rdata: &RData) -> Vec<String> {
    match (kind, rdata) {
        (RecordKind::A, RData::A(a)) => vec![a.0.to_string()],
        (RecordKind::AAAA, RData::AAAA(aaaa)) => vec![aaaa.0.to_string()],
        (RecordKind::CNAME, RData::CNAME(cname)) => vec![name_to_string(&cname.0)],
        (RecordKind::NS, RData::NS(ns)) => vec![name_to_string(&ns.0)],
        (RecordKind::PTR, RData::PTR(ptr)) => vec![name_to_string(&ptr.0)],
        (RecordKind::MX, RData::MX(mx)) => {
            vec![format!("{} {}", mx.preference(), name_to_string(mx.exchange()))]
        }
        (RecordKind::SRV, RData::SRV(srv)) => vec![format!(
            "{} {} {} {}",
            srv.priority(),
            srv.weight(),
            srv.port(),
            name_to_string(srv.target())
        )],
        (RecordKind::SOA, RData::SOA(soa)) => vec![format!(
            "{} {} {} {} {} {} {}",
            name_to_string(soa.mname()),
            name_to_string(soa.rname()),
            soa.serial(),
            soa.refresh(),
            soa.retry(),
            soa.expire(),
            soa.minimum()
        )],
        (RecordKind::CAA, RData::CAA(caa)) => vec![caa.to_string()],
        (RecordKind::TXT, RData::TXT(txt)) | (RecordKind::SPF, RData::TXT(txt)) => txt
            .txt_data()
            .iter()
            .map(|segment| String::from_utf8_lossy(segment).into_owned())
            .collect(),
        (RecordKind::SPF, RData::Unknown { rdata, .. }) => character_strings(rdata.anything()),
        _ => vec![],
    }
}

/// Splits raw RDATA into its length-prefixed character-strings. A length
/// byte that overruns the buffer ends the scan.
pub fn character_strings(raw: &[u8]) -> Vec<String> {
    let mut segments = Vec::new();
    let mut rest = raw;

    while let Some((&len, tail)) = rest.split_first() {
        let len = len as usize;
        if len > tail.len() {
            break;
        }
        let (segment, remainder) = tail.split_at(len);
        segments.push(String::from_utf8_lossy(segment).into_owned());
        rest = remainder;
    }

    segments
}
