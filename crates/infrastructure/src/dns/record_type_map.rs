//! Mapping from `hickory_proto::rr::RecordType` to `visibleip_dns_domain::RecordType`

use hickory_proto::rr::RecordType as HickoryRecordType;
use visibleip_dns_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Total: types the domain does not name come back as `RecordType::Unknown`.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_types_map_to_named_variants() {
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::A),
            RecordType::A
        );
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::AAAA),
            RecordType::AAAA
        );
    }

    #[test]
    fn test_other_types_map_to_unknown() {
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::MX),
            RecordType::Unknown(15)
        );
        assert_eq!(
            RecordTypeMapper::from_hickory(HickoryRecordType::CAA),
            RecordType::Unknown(257)
        );
    }
}
