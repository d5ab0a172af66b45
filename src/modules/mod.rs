pub mod employees;
pub mod general;
pub mod students;

pub use self::employees::{StaffService, TeacherService};
pub use self::general::GeneralService;
pub use self::students::StudentService;
