// Content calendar: dated post ideas with a Planned / Completed status.

pub mod handlers;
pub mod store;
