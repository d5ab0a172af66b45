//! Deterministic seed data for every store.
//!
//! Reference collections and guardians are built directly. Employee and
//! student records are written as wire-format JSON documents and go through
//! the same deserialization as any other payload.

use boarding_models::{
    Address, BloodGroup, Designation, Gender, Guardian, JobRule, MaritalStatus, Relation,
    Religion, ResidentialStatus, SimpleEntities, Staff, Student, Teacher,
};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Seed data for one application state.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub reference: SimpleEntities,
    pub guardians: Vec<Guardian>,
    pub staff: Vec<Staff>,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
}

impl Fixtures {
    pub fn load() -> Result<Self, serde_json::Error> {
        let now = Utc::now();
        Ok(Self {
            reference: reference_entities(now),
            guardians: guardians(now),
            staff: from_documents(staff_documents(), now)?,
            teachers: from_documents(teacher_documents(), now)?,
            students: from_documents(student_documents(), now)?,
        })
    }

    /// Stores with nothing but the reference collections.
    pub fn reference_only() -> Self {
        Self {
            reference: reference_entities(Utc::now()),
            guardians: Vec::new(),
            staff: Vec::new(),
            teachers: Vec::new(),
            students: Vec::new(),
        }
    }
}

fn named<T>(
    rows: &[(&str, &str)],
    now: DateTime<Utc>,
    make: impl Fn(&str, &str, DateTime<Utc>) -> T,
) -> Vec<T> {
    rows.iter().map(|(id, name)| make(id, name, now)).collect()
}

pub fn reference_entities(now: DateTime<Utc>) -> SimpleEntities {
    SimpleEntities {
        genders: named(
            &[("g1", "Male"), ("g2", "Female"), ("g3", "Other")],
            now,
            |id, name, at| Gender::new(id, name, at),
        ),
        blood_groups: named(
            &[
                ("bg1", "A+"),
                ("bg2", "A-"),
                ("bg3", "B+"),
                ("bg4", "B-"),
                ("bg5", "AB+"),
                ("bg6", "AB-"),
                ("bg7", "O+"),
                ("bg8", "O-"),
            ],
            now,
            |id, name, at| BloodGroup::new(id, name, at),
        ),
        residential_statuses: named(
            &[
                ("rs1", "Resident"),
                ("rs2", "Non-Resident"),
                ("rs3", "Day Scholar"),
                ("rs4", "Hostel"),
            ],
            now,
            |id, name, at| ResidentialStatus::new(id, name, at),
        ),
        religions: named(
            &[
                ("r1", "Islam"),
                ("r2", "Christianity"),
                ("r3", "Hinduism"),
                ("r4", "Buddhism"),
                ("r5", "Judaism"),
                ("r6", "Other"),
            ],
            now,
            |id, name, at| Religion::new(id, name, at),
        ),
        relations: named(
            &[
                ("rel1", "Self"),
                ("rel2", "Spouse"),
                ("rel3", "Child"),
                ("rel4", "Parent"),
                ("rel5", "Sibling"),
                ("rel6", "Other"),
            ],
            now,
            |id, name, at| Relation::new(id, name, at),
        ),
        marital_statuses: named(
            &[
                ("ms1", "Single"),
                ("ms2", "Married"),
                ("ms3", "Divorced"),
                ("ms4", "Widowed"),
                ("ms5", "Other"),
            ],
            now,
            |id, name, at| MaritalStatus::new(id, name, at),
        ),
        // The unnamed jr3 row is left out: an empty name fails validation.
        job_rules: named(
            &[
                ("jr1", "দারোয়ান"),
                ("jr2", "বাবুর্চি"),
                ("jr4", "খাদেম"),
                ("jr5", "সহায়ক"),
            ],
            now,
            |id, name, at| JobRule::new(id, name, at),
        ),
        designations: named(
            &[
                ("d1", "Teacher"),
                ("d2", "Principal"),
                ("d3", "Hostel Manager"),
                ("d4", "Accountant"),
                ("d5", "Librarian"),
            ],
            now,
            |id, name, at| Designation::new(id, name, at),
        ),
    }
}

/// Address from ids given in hierarchy order: nationality, division,
/// district, sub-district, post office, village.
pub fn address(ids: &[&str]) -> Address {
    let part = |index: usize| ids.get(index).map(|id| (*id).to_owned());
    Address {
        nationality_id: part(0).map(Into::into),
        division_id: part(1).map(Into::into),
        district_id: part(2).map(Into::into),
        sub_district_id: part(3).map(Into::into),
        post_office_id: part(4).map(Into::into),
        village_id: part(5).map(Into::into),
    }
}

fn guardians(now: DateTime<Utc>) -> Vec<Guardian> {
    vec![
        Guardian {
            id: "gdn1".into(),
            name: "Abdul Karim".into(),
            phone: Some("+8801711001100".into()),
            email: Some("abdul.karim@example.com".into()),
            occupation: Some("Businessman".into()),
            photo_url: None,
            details: Some("Father of the student, runs a wholesale shop in Dhaka.".into()),
            present_address: Some(address(&["n1", "d1", "dt1", "sd1", "po1", "v1"])),
            permanent_address: Some(address(&["n1", "d3", "dt3"])),
            same_as_present: false,
            created_at: now,
            updated_at: None,
        },
        Guardian {
            id: "gdn2".into(),
            name: "Shamsun Nahar".into(),
            phone: Some("+8801811223344".into()),
            email: Some("shamsun.nahar@example.com".into()),
            occupation: Some("Teacher".into()),
            photo_url: None,
            details: Some("Mother of the student, teaches at a local school in Chittagong.".into()),
            present_address: Some(address(&["n1", "d2", "dt3", "sd3", "po2", "v2"])),
            permanent_address: Some(address(&["n1", "d2", "dt3"])),
            same_as_present: true,
            created_at: now,
            updated_at: None,
        },
    ]
}

fn from_documents<T: DeserializeOwned>(
    documents: Vec<Value>,
    now: DateTime<Utc>,
) -> Result<Vec<T>, serde_json::Error> {
    documents
        .into_iter()
        .map(|mut document| {
            if let Value::Object(fields) = &mut document {
                fields.insert("createdAt".to_owned(), json!(now));
            }
            serde_json::from_value(document)
        })
        .collect()
}

fn staff_documents() -> Vec<Value> {
    vec![
        json!({
            "id": "st1",
            "firstName": "Hasan",
            "lastName": "Mahmud",
            "dateOfBirth": "1980-03-15",
            "placeOfBirth": "Sylhet, Bangladesh",
            "fatherName": "Mofiz Uddin",
            "motherName": "Jahanara Begum",
            "mobileNumber": "+8801711991122",
            "emailAddress": "hasan.mahmud@example.com",
            "emergencyContact": "+8801911445566",
            "nidNumber": "1980123456789",
            "birthRegNumber": "19800011223",
            "genderId": "g1",
            "bloodGroupId": "bg7",
            "religionId": "r1",
            "nationalityId": "n1",
            "maritalStatusId": "ms2",
            "presentAddress": { "nationalityId": "n1", "divisionId": "d3", "districtId": "dt3" },
            "permanentAddress": { "nationalityId": "n1", "divisionId": "d3", "districtId": "dt3" },
            "sameAsPresent": true,
            "educationalQualifications": [{
                "id": "eqs1",
                "degreeName": "Diploma in Library Science",
                "institution": "Sylhet Polytechnic",
                "year": "2002",
                "grade": "First Division"
            }],
            "professionalExperience": [{
                "id": "pes1",
                "companyName": "Sylhet Govt. College",
                "jobTitle": "Library Assistant",
                "startDate": "2005-01-01",
                "responsibilities": "Managing books, records, and assisting students.",
                "achievements": "Digitized the old library catalog system."
            }],
            "references": [{
                "id": "refs1",
                "name": "Prof. Abdul Kader",
                "relationship": "Supervisor",
                "contactNumber": "+8801711552233",
                "email": "abdul.kader@sgc.edu.bd"
            }],
            "salaryExpectation": 35000.0,
            "joiningDate": "2025-01-01",
            "yearsOfExperience": 20,
            "noticePeriod": "1 month",
            "designationIds": ["d5"],
            "subjectIds": [],
            "gradeLevelIds": [],
            "languageProficiencyIds": ["lp1", "lp2"],
            "computerSkills": "Basic MS Office, Library software",
            "onlineProfiles": { "linkedin": "https://linkedin.com/in/ahmed-rahman" },
            "details": "Dedicated library staff with long years of service.",
            "status": "ACTIVE"
        }),
        json!({
            "id": "st2",
            "firstName": "Shahidul",
            "lastName": "Islam",
            "dateOfBirth": "1975-09-22",
            "placeOfBirth": "Comilla, Bangladesh",
            "fatherName": "Abul Kashem",
            "motherName": "Nurjahan Begum",
            "mobileNumber": "+8801811889900",
            "emailAddress": "shahidul.islam@example.com",
            "emergencyContact": "+8801911667788",
            "nidNumber": "1975123456789",
            "birthRegNumber": "19750098765",
            "genderId": "g1",
            "bloodGroupId": "bg2",
            "religionId": "r1",
            "nationalityId": "n1",
            "maritalStatusId": "ms2",
            "presentAddress": { "nationalityId": "n1", "divisionId": "d2", "districtId": "dt3" },
            "permanentAddress": { "nationalityId": "n1", "divisionId": "d2", "districtId": "dt3" },
            "sameAsPresent": true,
            "educationalQualifications": [{
                "id": "eqs2",
                "degreeName": "B.Com (Accounting)",
                "institution": "National University",
                "year": "1996",
                "grade": "Second Class"
            }],
            "professionalExperience": [{
                "id": "pes2",
                "companyName": "Comilla High School",
                "jobTitle": "Accountant",
                "startDate": "2000-01-01",
                "responsibilities": "Managing accounts, payroll, and financial records.",
                "achievements": "Introduced modern accounting software."
            }],
            "references": [{
                "id": "refs2",
                "name": "Md. Rashed Khan",
                "relationship": "Headmaster",
                "contactNumber": "+8801711778899",
                "email": "rashed.khan@chs.edu.bd"
            }],
            "salaryExpectation": 40000.0,
            "joiningDate": "2025-02-01",
            "yearsOfExperience": 25,
            "noticePeriod": "2 months",
            "designationIds": ["d4"],
            "subjectIds": [],
            "gradeLevelIds": [],
            "languageProficiencyIds": ["lp1", "lp2", "lp4"],
            "computerSkills": "Tally ERP, MS Excel, QuickBooks",
            "onlineProfiles": { "linkedin": "https://linkedin.com/in/ahmed-rahman" },
            "details": "Experienced accountant specialized in school finance management.",
            "status": "ACTIVE"
        }),
    ]
}

fn teacher_documents() -> Vec<Value> {
    vec![
        json!({
            "id": "t1",
            "firstName": "Rahim",
            "lastName": "Uddin",
            "dateOfBirth": "1985-05-10",
            "placeOfBirth": "Dhaka, Bangladesh",
            "fatherName": "Abdul Karim",
            "motherName": "Shamsun Nahar",
            "mobileNumber": "+8801711223344",
            "emailAddress": "rahim.uddin@example.com",
            "emergencyContact": "+8801911002200",
            "nidNumber": "1985123456789",
            "birthRegNumber": "19850012345",
            "genderId": "g1",
            "bloodGroupId": "bg1",
            "nationalityId": "n1",
            "maritalStatusId": "ms2",
            "presentAddress": {
                "nationalityId": "n1", "divisionId": "d1", "districtId": "dt1",
                "subDistrictId": "sd1", "postOfficeId": "po1", "villageId": "v1"
            },
            "permanentAddress": { "nationalityId": "n1", "divisionId": "d1", "districtId": "dt2" },
            "sameAsPresent": false,
            "educationalQualifications": [
                {
                    "id": "eq1",
                    "degreeName": "B.Sc in Mathematics",
                    "institution": "University of Dhaka",
                    "year": "2007",
                    "grade": "First Class"
                },
                {
                    "id": "eq2",
                    "degreeName": "M.Sc in Mathematics",
                    "institution": "University of Dhaka",
                    "year": "2009",
                    "grade": "First Class"
                }
            ],
            "professionalExperience": [
                {
                    "id": "pe1",
                    "companyName": "Dhaka College",
                    "jobTitle": "Lecturer",
                    "startDate": "2010-01-01",
                    "endDate": "2015-12-31",
                    "responsibilities": "Teaching Mathematics to Higher Secondary students.",
                    "achievements": "Introduced digital classroom techniques."
                },
                {
                    "id": "pe2",
                    "companyName": "Notre Dame College",
                    "jobTitle": "Assistant Professor",
                    "startDate": "2016-01-01",
                    "responsibilities": "Teaching Advanced Mathematics and Algebra."
                }
            ],
            "references": [{
                "id": "ref1",
                "name": "Prof. Jamal Uddin",
                "relationship": "Former Supervisor",
                "contactNumber": "+8801711888899",
                "email": "jamal.uddin@du.ac.bd"
            }],
            "salaryExpectation": 60000.0,
            "joiningDate": "2025-01-15",
            "yearsOfExperience": 15,
            "noticePeriod": "2 months",
            "designationIds": ["d1"],
            "subjectIds": ["sub1", "sub3"],
            "gradeLevelIds": ["gl2", "gl3"],
            "languageProficiencyIds": ["lp1", "lp2"],
            "computerSkills": "MS Office, Google Classroom, LaTeX",
            "teachingMethodology": "Interactive learning with problem-solving focus.",
            "details": "Dedicated Mathematics teacher with 15 years of experience.",
            "status": "ACTIVE"
        }),
        json!({
            "id": "t2",
            "firstName": "Farhana",
            "lastName": "Akter",
            "dateOfBirth": "1990-08-20",
            "placeOfBirth": "Chittagong, Bangladesh",
            "fatherName": "Abdur Rahman",
            "motherName": "Nazma Akter",
            "mobileNumber": "+8801811556677",
            "emailAddress": "farhana.akter@example.com",
            "emergencyContact": "+8801911778899",
            "nidNumber": "1990123456789",
            "genderId": "g2",
            "bloodGroupId": "bg3",
            "nationalityId": "n1",
            "maritalStatusId": "ms1",
            "presentAddress": {
                "nationalityId": "n1", "divisionId": "d2", "districtId": "dt3",
                "subDistrictId": "sd3", "postOfficeId": "po2", "villageId": "v2"
            },
            "permanentAddress": { "nationalityId": "n1", "divisionId": "d2", "districtId": "dt3" },
            "sameAsPresent": true,
            "educationalQualifications": [
                {
                    "id": "eq3",
                    "degreeName": "B.A. in English Literature",
                    "institution": "University of Chittagong",
                    "year": "2011",
                    "grade": "First Class"
                },
                {
                    "id": "eq4",
                    "degreeName": "M.A. in English",
                    "institution": "University of Chittagong",
                    "year": "2013",
                    "grade": "First Class"
                }
            ],
            "professionalExperience": [
                {
                    "id": "pe3",
                    "companyName": "Chittagong Grammar School",
                    "jobTitle": "English Teacher",
                    "startDate": "2014-01-01",
                    "endDate": "2020-12-31",
                    "responsibilities": "Teaching English Literature and Grammar."
                },
                {
                    "id": "pe4",
                    "companyName": "Govt. Girls College",
                    "jobTitle": "Lecturer",
                    "startDate": "2021-01-01",
                    "responsibilities": "Teaching English to Higher Secondary students."
                }
            ],
            "references": [{
                "id": "ref2",
                "name": "Dr. Salma Begum",
                "relationship": "Professor & Mentor",
                "contactNumber": "+8801711993344",
                "email": "salma.begum@cu.ac.bd"
            }],
            "salaryExpectation": 50000.0,
            "joiningDate": "2025-02-01",
            "yearsOfExperience": 11,
            "noticePeriod": "1 month",
            "designationIds": ["d1", "d5"],
            "subjectIds": ["sub2", "sub4"],
            "gradeLevelIds": ["gl2", "gl3"],
            "languageProficiencyIds": ["lp1", "lp2", "lp3"],
            "computerSkills": "Google Docs, Zoom, Moodle",
            "teachingMethodology": "Literature analysis, group discussions, presentations.",
            "onlineProfiles": {
                "linkedin": "https://linkedin.com/in/farhanaakter",
                "personalWebsite": "https://farhanaakter.com"
            },
            "details": "Passionate English teacher with strong focus on student engagement.",
            "status": "ACTIVE"
        }),
    ]
}

#[allow(clippy::too_many_arguments)]
fn student(
    id: &str,
    names: [&str; 4],
    date_of_birth: &str,
    health: &str,
    brn: &str,
    demographics: [&str; 4],
    present: &[&str],
    permanent: &[&str],
    same_as_present: bool,
) -> Value {
    let [first, last, father, mother] = names;
    let [gender, blood_group, religion, nationality] = demographics;
    json!({
        "id": id,
        "firstName": first,
        "lastName": last,
        "fatherName": father,
        "motherName": mother,
        "dateOfBirth": date_of_birth,
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "healthCondition": health,
        "brnNumber": brn,
        "genderId": gender,
        "bloodGroupId": blood_group,
        "religionId": religion,
        "nationalityId": nationality,
        "presentAddress": address(present),
        "permanentAddress": address(permanent),
        "sameAsPresent": same_as_present,
        "status": "ACTIVE"
    })
}

fn student_documents() -> Vec<Value> {
    let mut moumita = student(
        "st2",
        ["Moumita", "Chowdhury", "Dipankar Chowdhury", "Rina Chowdhury"],
        "2011-09-05",
        "Asthmatic",
        "20110054321",
        ["g2", "bg3", "r3", "n1"],
        &["n1", "d2", "dt3", "sd3", "po2", "v2"],
        &["n1", "d2", "dt3"],
        false,
    );
    if let Value::Object(fields) = &mut moumita {
        fields.insert(
            "studentPhoto".to_owned(),
            json!({ "url": "/photos/students/moumita.jpg", "fileName": "moumita.jpg" }),
        );
    }

    vec![
        student(
            "st1",
            ["Nafis", "Rahman", "Abdul Karim", "Shamsun Nahar"],
            "2010-04-15",
            "Healthy",
            "20100012345",
            ["g1", "bg1", "r1", "n1"],
            &["n1", "d1", "dt1", "sd1", "po1", "v1"],
            &["n1", "d1", "dt1"],
            true,
        ),
        moumita,
        student(
            "st3",
            ["Arif", "Hossain", "Md. Habib", "Rokeya Begum"],
            "2010-12-01",
            "Healthy",
            "20100067890",
            ["g1", "bg7", "r1", "n1"],
            &["n1", "d1", "dt2", "sd3"],
            &["n1", "d1", "dt2"],
            true,
        ),
        student(
            "st4",
            ["Sumaiya", "Islam", "Shafiqul Islam", "Nasima Akter"],
            "2012-02-20",
            "Healthy",
            "20120011223",
            ["g2", "bg5", "r1", "n1"],
            &["n1", "d1", "dt1", "sd2", "po2", "v2"],
            &["n1", "d1", "dt1"],
            true,
        ),
        student(
            "st5",
            ["Rakesh", "Kumar", "Sanjay Kumar", "Pooja Kumari"],
            "2011-06-11",
            "Healthy",
            "20110099887",
            ["g1", "bg4", "r3", "n2"],
            &["n2"],
            &["n2"],
            true,
        ),
        student(
            "st6",
            ["Maria", "Gomes", "Anthony Gomes", "Lucy Gomes"],
            "2010-11-02",
            "Healthy",
            "20100044556",
            ["g2", "bg2", "r2", "n1"],
            &["n1", "d2", "dt3"],
            &["n1", "d2", "dt3"],
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        let fixtures = Fixtures::load().unwrap();
        assert_eq!(fixtures.reference.blood_groups.len(), 8);
        assert_eq!(fixtures.reference.job_rules.len(), 4);
        assert_eq!(fixtures.guardians.len(), 2);
        assert_eq!(fixtures.staff.len(), 2);
        assert_eq!(fixtures.teachers.len(), 2);
        assert_eq!(fixtures.students.len(), 6);
    }

    #[test]
    fn test_fixture_documents_round_trip_fields() {
        let fixtures = Fixtures::load().unwrap();
        let farhana = &fixtures.teachers[1].profile;
        assert_eq!(farhana.designation_ids.len(), 2);
        assert_eq!(farhana.professional_experience[0].id.as_str(), "pe3");

        let maria = &fixtures.students[5];
        assert_eq!(maria.first_name, "Maria");
        assert_eq!(maria.email.as_deref(), Some("maria.gomes@example.com"));
        assert!(fixtures.students[1].student_photo.is_some());
    }

    #[test]
    fn test_address_hierarchy_order() {
        let address = address(&["n1", "d2"]);
        assert_eq!(address.division_id.as_ref().map(|id| id.as_str()), Some("d2"));
        assert!(address.district_id.is_none());
    }
}
