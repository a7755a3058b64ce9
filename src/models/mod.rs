pub mod task;
pub mod user;

pub use task::{Task, TaskFields, TaskInput, TaskUpdate};
pub use user::{SignupRequest, User};
