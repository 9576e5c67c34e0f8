//! Input manager for job description files

use crate::error::{InterviewCoachError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::path::Path;

/// Routes a job description file to the extractor for its format.
#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a job description file as plain text.
    pub async fn load_job_description(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(InterviewCoachError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path).ok_or_else(|| {
            InterviewCoachError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        match file_type {
            FileType::Text => {
                info!("Reading job description: {}", path.display());
                PlainTextExtractor.extract(path).await
            }
            FileType::Markdown => {
                info!("Reading markdown job description: {}", path.display());
                MarkdownExtractor.extract(path).await
            }
            FileType::Unknown => Err(InterviewCoachError::UnsupportedFormat(format!(
                "Unsupported file type for: {}",
                path.display()
            ))),
        }
    }
}
