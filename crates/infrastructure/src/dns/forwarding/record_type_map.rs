//! Mapping between `dnsdiff_domain::RecordKind` and `hickory_proto::rr::RecordType`.

use dnsdiff_domain::RecordKind;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert a record kind to the hickory type used in the question.
    pub fn to_hickory(kind: RecordKind) -> HickoryRecordType {
        match kind {
            RecordKind::A => HickoryRecordType::A,
            RecordKind::AAAA => HickoryRecordType::AAAA,
            RecordKind::CNAME => HickoryRecordType::CNAME,
            RecordKind::MX => HickoryRecordType::MX,
            RecordKind::NS => HickoryRecordType::NS,
            RecordKind::SRV => HickoryRecordType::SRV,
            RecordKind::TXT => HickoryRecordType::TXT,
            RecordKind::SOA => HickoryRecordType::SOA,
            RecordKind::CAA => HickoryRecordType::CAA,
            RecordKind::PTR => HickoryRecordType::PTR,
            // hickory has no dedicated SPF type
            RecordKind::SPF => HickoryRecordType::from(kind.to_u16()),
        }
    }

    /// Returns `None` for types that are never compared.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordKind> {
        RecordKind::from_u16(u16::from(hickory_type))
    }
}
