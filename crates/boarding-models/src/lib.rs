//! # Boarding Models
//!
//! Domain models and DTOs for the Boarding admin data layer.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed prefixed string ids
//! - [`common`]: status enum, `{id, name}` projections and identity traits
//! - [`address`]: the address value object and "same as present" mirroring
//! - [`general`]: reference entities (gender, religion, designation, ...)
//! - [`guardians`]: guardian records
//! - [`employees`]: staff and teacher records with nested history lists
//! - [`students`]: student records, file references and dropdown projection
//! - [`rules`]: named text-length validators used by the DTOs
//!
//! # Example
//!
//! ```ignore
//! use boarding_models::guardians::CreateGuardianDto;
//! use validator::Validate;
//!
//! let dto = CreateGuardianDto { name: "Abdul Karim".into(), ..Default::default() };
//! assert!(dto.validate().is_ok());
//! ```

pub mod address;
pub mod common;
pub mod employees;
pub mod general;
pub mod guardians;
pub mod ids;
pub mod rules;
pub mod students;

pub use address::{Address, sync_same_as_present};
pub use common::{Identified, Named, NamedRef, Status};

pub use employees::{
    CreateEmployeeDto, EducationalQualification, EmployeeDetail, EmployeeFilterParams,
    EmployeeProfile, ExperienceInput, HasProfile, OnlineProfiles, ProfessionalExperience,
    ProfessionalReference, QualificationInput, ReferenceInput, Staff, StaffDetail, Teacher,
    TeacherDetail, UpdateEmployeeDto,
};

pub use general::{
    BloodGroup, CreateReferenceDto, Designation, Gender, JobRule, MaritalStatus,
    ReferenceFilterParams, Relation, Religion, ResidentialStatus, SimpleEntities,
    UpdateReferenceDto,
};

pub use guardians::{CreateGuardianDto, Guardian, GuardianFilterParams, UpdateGuardianDto};

pub use students::{
    CreateStudentDto, FileRef, Student, StudentDetail, StudentFilterParams, StudentOption,
    UpdateStudentDto,
};
