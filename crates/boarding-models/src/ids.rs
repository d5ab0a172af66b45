//! Strongly-typed ID newtypes for domain entities.
//!
//! Ids are opaque prefixed strings (`g1`, `bg3`, `st104`). Stores assign them
//! from a per-store sequence; fixtures use hand-picked values. The newtypes
//! keep a `DesignationId` from being passed where a `GenderId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use boarding_models::ids::{GenderId, StaffId};
//!
//! fn gender_label(id: &GenderId) { /* ... */ }
//!
//! let gender = GenderId::new("g1");
//! let staff = StaffId::new("st1");
//!
//! gender_label(&gender);    // OK
//! // gender_label(&staff);  // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Defines a strongly-typed string ID newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            #[inline]
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Reference entities
define_id!(
    /// Id of a Gender reference entity (`g*`).
    GenderId
);
define_id!(
    /// Id of a Blood Group reference entity (`bg*`).
    BloodGroupId
);
define_id!(
    /// Id of a Residential Status reference entity (`rs*`).
    ResidentialStatusId
);
define_id!(
    /// Id of a Religion reference entity (`r*`).
    ReligionId
);
define_id!(
    /// Id of a Designation reference entity (`d*`).
    DesignationId
);
define_id!(
    /// Id of a Relation reference entity (`rel*`).
    RelationId
);
define_id!(
    /// Id of a Marital Status reference entity (`ms*`).
    MaritalStatusId
);
define_id!(
    /// Id of a Job Rule reference entity (`jr*`).
    JobRuleId
);

// People
define_id!(GuardianId);
define_id!(StaffId);
define_id!(TeacherId);
define_id!(StudentId);

// Nested employee records
define_id!(QualificationId);
define_id!(ExperienceId);
define_id!(ReferenceId);

// Foreign keys into catalogs this layer does not own
define_id!(NationalityId);
define_id!(DivisionId);
define_id!(DistrictId);
define_id!(SubDistrictId);
define_id!(PostOfficeId);
define_id!(VillageId);
define_id!(SubjectId);
define_id!(GradeLevelId);
define_id!(LanguageProficiencyId);
