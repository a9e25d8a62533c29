pub mod blogs;
pub mod health;

pub use blogs::generate_blog;
pub use health::{health_check, readiness_check};
