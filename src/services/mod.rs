pub mod announcer;
pub mod health;
pub mod scheduler;
