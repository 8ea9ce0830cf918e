pub mod history;
pub mod log;
pub mod register;
pub mod rooms;
