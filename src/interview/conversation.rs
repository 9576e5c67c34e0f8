//! Conversation state: the exchanges of one interview and its weak points

use crate::processing::answer_scorer::AnswerAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One question and, once given, its answer and score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedbacks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<u8>,
}

impl Exchange {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: None,
            feedbacks: None,
            note: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub conversation_id: String,
    pub job_description: String,
    pub history: Vec<Exchange>,
    /// Insertion-ordered, without duplicates.
    pub weak_points: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(conversation_id: String, job_description: String) -> Self {
        Self {
            conversation_id,
            job_description,
            history: Vec::new(),
            weak_points: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Questions already issued, in order.
    pub fn asked_questions(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(|exchange| exchange.question.as_str())
    }

    /// Mean note over the whole history; unscored exchanges count as 0.
    pub fn average_note(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        let total: u32 = self
            .history
            .iter()
            .map(|exchange| u32::from(exchange.note.unwrap_or(0)))
            .sum();
        f64::from(total) / self.history.len() as f64
    }

    /// Store a scored answer on the last exchange and merge its weak points.
    /// Returns `None` when no question is pending an answer.
    pub fn record_answer(&mut self, answer: &str, analysis: AnswerAnalysis) -> Option<Vec<String>> {
        let last = self.history.last_mut()?;
        if last.question.is_empty() {
            return None;
        }

        last.answer = Some(answer.to_string());
        last.feedbacks = Some(analysis.feedbacks.clone());
        last.note = Some(analysis.note);

        for weak_point in analysis.weak_points {
            if !self.weak_points.contains(&weak_point) {
                self.weak_points.push(weak_point);
            }
        }

        Some(analysis.feedbacks)
    }

    pub fn answered_count(&self) -> usize {
        self.history.iter().filter(|exchange| exchange.is_answered()).count()
    }
}
