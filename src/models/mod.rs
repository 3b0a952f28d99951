pub mod employee;
pub mod mood_entry;
pub mod resource;
pub mod role;
pub mod team;
