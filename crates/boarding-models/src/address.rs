//! Address value object.
//!
//! An address is a chain of optional geographic ids (nationality, division,
//! district, sub-district, post office, village). The hierarchy is not checked
//! for parent/child consistency.

use serde::{Deserialize, Serialize};

use crate::ids::{DistrictId, DivisionId, NationalityId, PostOfficeId, SubDistrictId, VillageId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality_id: Option<NationalityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<DivisionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<DistrictId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_district_id: Option<SubDistrictId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_office_id: Option<PostOfficeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village_id: Option<VillageId>,
}

impl Address {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Address::default()
    }
}

/// Mirrors the present address into the permanent one when `same_as_present`
/// is set. Leaves the permanent address alone otherwise.
pub fn sync_same_as_present<A: Clone>(same_as_present: bool, present: &A, permanent: &mut A) {
    if same_as_present {
        *permanent = present.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dhaka() -> Address {
        Address {
            nationality_id: Some("n1".into()),
            division_id: Some("d1".into()),
            district_id: Some("dt1".into()),
            ..Address::default()
        }
    }

    #[test]
    fn test_sync_copies_when_flag_set() {
        let present = dhaka();
        let mut permanent = Address::default();
        sync_same_as_present(true, &present, &mut permanent);
        assert_eq!(permanent, present);
    }

    #[test]
    fn test_sync_leaves_permanent_when_flag_clear() {
        let present = dhaka();
        let mut permanent = Address::default();
        sync_same_as_present(false, &present, &mut permanent);
        assert!(permanent.is_empty());
    }

    #[test]
    fn test_address_serializes_camel_case_and_skips_none() {
        let json = serde_json::to_value(dhaka()).unwrap();
        assert_eq!(json["districtId"], "dt1");
        assert!(json.get("villageId").is_none());
    }
}
