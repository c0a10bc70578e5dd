pub mod log;
pub mod mirror;
pub mod query;
pub mod session;
pub mod store;
pub mod sync;
