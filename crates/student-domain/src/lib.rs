mod errors;
mod student;
pub mod validation;

pub use errors::DomainError;
pub use student::{Student, StudentDto, StudentFields, StudentId, StudentPatch};
// Re-export the validators so the shell does not need the module path
pub use validation::{validate_fields, validate_patch, IDIOMAS_PERMITIDOS};
