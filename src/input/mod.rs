//! Job description input
//! Detects the file format and extracts plain text from it

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
