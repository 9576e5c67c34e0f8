//! End-of-interview report

use crate::interview::conversation::{Conversation, Exchange};
use crate::processing::answer_scorer::MAX_NOTE;
use crate::processing::job_analyzer::{JobAnalyzer, JobDescriptionAnalysis};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a conversation with its aggregate scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    pub conversation_id: String,
    pub job: JobDescriptionAnalysis,
    pub exchanges: Vec<Exchange>,
    /// Mean note over every exchange, unanswered ones counting as 0.
    pub average_note: f64,
    pub weak_points: Vec<String>,
    pub answered_count: usize,
    pub verdict: Verdict,
    pub started_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl Verdict {
    pub fn for_average(average_note: f64) -> Self {
        if average_note >= 4.0 {
            Verdict::Excellent
        } else if average_note >= 3.0 {
            Verdict::Good
        } else if average_note >= 2.0 {
            Verdict::Fair
        } else {
            Verdict::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Excellent => "EXCELLENT",
            Verdict::Good => "GOOD",
            Verdict::Fair => "FAIR",
            Verdict::NeedsWork => "NEEDS WORK",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Strong, relevant answers backed by examples.",
            Verdict::Good => "Solid answers; add concrete examples to stand out.",
            Verdict::Fair => "Answers stay general; tie them to the role's skills.",
            Verdict::NeedsWork => "Answers are too short or off topic.",
        }
    }
}

impl InterviewReport {
    pub fn from_conversation(conversation: &Conversation) -> Self {
        let average_note = conversation.average_note();

        Self {
            conversation_id: conversation.conversation_id.clone(),
            job: JobAnalyzer::shared().analyze(&conversation.job_description),
            exchanges: conversation.history.clone(),
            average_note,
            weak_points: conversation.weak_points.clone(),
            answered_count: conversation.answered_count(),
            verdict: Verdict::for_average(average_note),
            started_at: conversation.started_at,
            generated_at: Utc::now(),
        }
    }

    /// Average note on a 0-100 scale.
    pub fn score_percentage(&self) -> u8 {
        let percentage = self.average_note / f64::from(MAX_NOTE) * 100.0;
        percentage.round().clamp(0.0, 100.0) as u8
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.generated_at - self.started_at).num_minutes()
    }
}
