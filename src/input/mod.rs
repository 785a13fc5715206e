//! Input processing module
//! Handles record file detection and loading

pub mod file_detector;
pub mod manager;

pub use file_detector::FileType;
pub use manager::ProfileLoader;
