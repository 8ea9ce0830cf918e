pub mod role;
pub mod room;
pub mod user;
pub mod visit_record;

pub use role::RoleFilter;
pub use room::Room;
pub use visit_record::VisitRecord;
