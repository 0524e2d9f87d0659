// Library for tests to access modules

pub mod config;
pub mod display;
pub mod format;
pub mod frame;
pub mod models;
pub mod render;
pub mod source;
pub mod sysinfo_repo;
