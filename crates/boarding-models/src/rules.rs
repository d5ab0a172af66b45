//! Named text-length rules for `#[validate(custom(function = ...))]`.
//!
//! `validator`'s `length` takes one message per field; forms report
//! "X is required" and "X must be less than N characters" separately, so each
//! bounded text field gets its own rule here.

use std::borrow::Cow;

use validator::ValidationError;

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

macro_rules! length_rule {
    ($fn_name:ident, $label:literal, required, $max:literal) => {
        pub fn $fn_name(value: &str) -> Result<(), ValidationError> {
            if value.trim().is_empty() {
                return Err(rule_error("required", concat!($label, " is required")));
            }
            if value.chars().count() > $max {
                return Err(rule_error(
                    "length",
                    concat!($label, " must be less than ", $max, " characters"),
                ));
            }
            Ok(())
        }
    };
    ($fn_name:ident, $label:literal, optional, $max:literal) => {
        pub fn $fn_name(value: &str) -> Result<(), ValidationError> {
            if value.chars().count() > $max {
                return Err(rule_error(
                    "length",
                    concat!($label, " must be less than ", $max, " characters"),
                ));
            }
            Ok(())
        }
    };
}

// Reference entities and guardians
length_rule!(reference_name, "Name", required, 50);
length_rule!(guardian_name, "Name", required, 100);
length_rule!(occupation, "Occupation", optional, 100);
length_rule!(details, "Details", optional, 1000);

// People
length_rule!(first_name, "First name", required, 50);
length_rule!(last_name, "Last name", required, 50);
length_rule!(father_name, "Father name", required, 100);
length_rule!(mother_name, "Mother name", required, 100);
length_rule!(optional_mother_name, "Mother name", optional, 100);
length_rule!(place_of_birth, "Place of birth", optional, 100);
length_rule!(nid_number, "NID number", optional, 20);
length_rule!(birth_reg_number, "Birth registration number", optional, 20);
length_rule!(brn_number, "BRN number", optional, 20);
length_rule!(employee_health_condition, "Health condition", optional, 100);
length_rule!(student_health_condition, "Health condition", optional, 500);

// Employment
length_rule!(notice_period, "Notice period", optional, 100);
length_rule!(computer_skills, "Computer skills", optional, 500);
length_rule!(teaching_methodology, "Teaching methodology", optional, 500);

// Qualifications
length_rule!(degree_name, "Degree name", required, 200);
length_rule!(institution, "Institution", required, 200);
length_rule!(grade, "Grade", required, 50);

// Experience
length_rule!(company_name, "Company name", required, 200);
length_rule!(job_title, "Job title", required, 100);
length_rule!(responsibilities, "Responsibilities", required, 1000);
length_rule!(achievements, "Achievements", optional, 1000);

// Professional references
length_rule!(reference_contact_name, "Name", required, 100);
length_rule!(relationship, "Relationship", required, 100);
