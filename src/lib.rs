//! Interview coach library
//!
//! Rule-based mock interview engine: job description analysis, adaptive
//! question sequencing and heuristic answer scoring.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod interview;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{InterviewCoachError, Result};
pub use interview::conductor::{InterviewConductor, SharedConductor};
pub use interview::selection::generate_interview_question;
pub use processing::answer_scorer::{analyze_answer, rate_answer, semantic_analysis, AnswerAnalysis};
pub use processing::job_analyzer::{JobAnalyzer, JobDescriptionAnalysis, JobLevel, JobType};
