pub mod auth;

pub mod students;

pub mod teachers;

pub mod courses;

pub mod frontend;

pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use frontend::configure_frontend_routes;
pub use students::configure_student_routes;
pub use teachers::configure_teacher_routes;
