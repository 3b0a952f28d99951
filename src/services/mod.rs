pub mod access_control;
pub mod employee;
pub mod favorites;
pub mod mood_checkin;
pub mod resources;

pub use access_control::AccessPolicy;
pub use employee::{EmployeeError, EmployeeService};
pub use favorites::FavoritesService;
pub use mood_checkin::{CheckinError, MoodCheckinService};
pub use resources::{ResourceError, ResourceService};
