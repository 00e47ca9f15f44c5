pub mod person;
pub mod announcement;

pub use person::*;
pub use announcement::*;
