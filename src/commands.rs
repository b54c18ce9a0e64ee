pub mod actions;
pub mod installations;
pub mod page;
