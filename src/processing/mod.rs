//! Text processing, job description analysis and answer scoring

pub mod text_processor;
pub mod job_analyzer;
pub mod answer_scorer;
