//! Configuration and results for demo-data seeding.

use boarding_models::ids::{BloodGroupId, GenderId, ReligionId};

/// How many records of each kind to generate.
#[derive(Clone, Debug, Default)]
pub struct SeedConfig {
    pub guardians: usize,
    pub students: usize,
}

impl SeedConfig {
    pub fn new(guardians: usize, students: usize) -> Self {
        Self {
            guardians,
            students,
        }
    }

    /// Sets the number of guardians.
    pub fn with_guardians(mut self, guardians: usize) -> Self {
        self.guardians = guardians;
        self
    }

    /// Sets the number of students.
    pub fn with_students(mut self, students: usize) -> Self {
        self.students = students;
        self
    }

    pub fn total(&self) -> usize {
        self.guardians + self.students
    }
}

/// Reference ids a generated student may point at.
///
/// Generated students only ever reference ids that exist in the reference
/// stores, so their detail views resolve fully.
#[derive(Clone, Debug, Default)]
pub struct StudentReferences {
    pub genders: Vec<GenderId>,
    pub blood_groups: Vec<BloodGroupId>,
    pub religions: Vec<ReligionId>,
}

/// Record counts after a seeding run.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub guardians_created: usize,
    pub students_created: usize,
    pub total_guardians: usize,
    pub total_students: usize,
}
