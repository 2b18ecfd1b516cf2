use std::fmt;
use std::str::FromStr;

/// Record kinds compared between two servers.
///
/// Declaration order is significant: resolution and diff output both follow
/// [`RecordKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    A,
    AAAA,
    CNAME,
    MX,
    NS,
    SRV,
    TXT,
    SOA,
    CAA,
    PTR,
    SPF,
}

impl RecordKind {
    pub const ALL: [RecordKind; 11] = [
        RecordKind::A,
        RecordKind::AAAA,
        RecordKind::CNAME,
        RecordKind::MX,
        RecordKind::NS,
        RecordKind::SRV,
        RecordKind::TXT,
        RecordKind::SOA,
        RecordKind::CAA,
        RecordKind::PTR,
        RecordKind::SPF,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::A => "A",
            RecordKind::AAAA => "AAAA",
            RecordKind::CNAME => "CNAME",
            RecordKind::MX => "MX",
            RecordKind::NS => "NS",
            RecordKind::SRV => "SRV",
            RecordKind::TXT => "TXT",
            RecordKind::SOA => "SOA",
            RecordKind::CAA => "CAA",
            RecordKind::PTR => "PTR",
            RecordKind::SPF => "SPF",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordKind::A => 1,
            RecordKind::NS => 2,
            RecordKind::CNAME => 5,
            RecordKind::SOA => 6,
            RecordKind::PTR => 12,
            RecordKind::MX => 15,
            RecordKind::TXT => 16,
            RecordKind::AAAA => 28,
            RecordKind::SRV => 33,
            RecordKind::SPF => 99,
            RecordKind::CAA => 257,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.to_u16() == code)
    }

    /// Address kinds may be served round-robin, so a single response can
    /// show only a slice of the full answer set.
    pub fn is_load_balanced(&self) -> bool {
        matches!(self, RecordKind::A | RecordKind::AAAA)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == upper)
            .ok_or_else(|| format!("Unknown record kind: {}", s))
    }
}
