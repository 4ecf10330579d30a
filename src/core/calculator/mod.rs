pub mod markers;
pub mod search;
