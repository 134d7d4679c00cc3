//! Persistence services per model and request validation.

mod courses;
mod users;
mod validation;
pub use courses::CourseService;
pub use users::UserService;
pub use validation::RequestValidator;
