pub mod calendar;
pub mod post;
