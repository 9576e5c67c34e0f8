//! Interview conductor: conversation registry and interview state machine

use crate::error::{InterviewCoachError, Result};
use crate::interview::conversation::{Conversation, Exchange};
use crate::interview::question_bank::{self, Difficulty, QuestionDefinition};
use crate::interview::selection::{generate_interview_question, select_question, SelectionContext};
use crate::processing::answer_scorer::analyze_answer;
use crate::processing::job_analyzer::JobAnalyzer;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Conductor shared across threads. Each operation runs under the lock, so
/// read-compute-write sequences on one conversation cannot interleave.
pub type SharedConductor = Arc<Mutex<InterviewConductor>>;

/// In-memory registry of interview conversations.
///
/// Conversations live as long as the conductor; there is no eviction.
#[derive(Debug, Default)]
pub struct InterviewConductor {
    conversations: HashMap<String, Conversation>,
}

impl InterviewConductor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedConductor {
        Arc::new(Mutex::new(self))
    }

    /// Register a new conversation and return its identifier.
    pub fn start_conversation(&mut self, job_description: &str) -> String {
        let conversation_id = Uuid::new_v4().to_string();
        let conversation = Conversation::new(conversation_id.clone(), job_description.to_string());
        self.conversations.insert(conversation_id.clone(), conversation);

        info!("Started conversation {}", conversation_id);
        conversation_id
    }

    /// Choose the next question, record it as a pending exchange and return
    /// its text.
    pub fn get_next_question(&mut self, conversation_id: &str) -> Result<String> {
        let conversation = self.find_mut(conversation_id)?;

        let average_note = conversation.average_note();
        let difficulty = Difficulty::for_average(average_note);
        let last_type = conversation
            .history
            .last()
            .and_then(|exchange| question_bank::find(&exchange.question))
            .map(|definition| definition.question_type);

        let asked: Vec<&str> = conversation.asked_questions().collect();
        let available: Vec<&'static QuestionDefinition> = question_bank::all()
            .iter()
            .filter(|definition| !asked.contains(&definition.question))
            .collect();

        debug!(
            "Conversation {}: average {:.2}, target {}, {} question(s) left",
            conversation_id,
            average_note,
            difficulty,
            available.len()
        );

        let job = JobAnalyzer::shared().analyze(&conversation.job_description);
        let context = SelectionContext {
            difficulty,
            last_type,
            weak_points: &conversation.weak_points,
            job: &job,
        };

        let question = match select_question(&available, &context) {
            Some(definition) => definition.question.to_string(),
            None => {
                warn!(
                    "Conversation {}: catalog exhausted, restarting from the job description",
                    conversation_id
                );
                generate_interview_question(&conversation.job_description)
            }
        };

        conversation.history.push(Exchange::new(question.clone()));
        Ok(question)
    }

    /// Score an answer to the pending question. Returns no feedback, and
    /// changes nothing, when no question has been asked yet.
    pub fn add_answer(&mut self, conversation_id: &str, answer: &str) -> Result<Vec<String>> {
        let conversation = self.find_mut(conversation_id)?;

        let question = match conversation.history.last() {
            Some(exchange) if !exchange.question.is_empty() => exchange.question.clone(),
            _ => {
                debug!("Conversation {}: no pending question, answer ignored", conversation_id);
                return Ok(Vec::new());
            }
        };

        let analysis = analyze_answer(answer, &question);
        info!("Conversation {}: answer scored {}/5", conversation_id, analysis.note);

        Ok(conversation.record_answer(answer, analysis).unwrap_or_default())
    }

    pub fn get_average_note(&self, conversation_id: &str) -> Result<f64> {
        Ok(self.find(conversation_id)?.average_note())
    }

    pub fn get_conversation_history(&self, conversation_id: &str) -> Result<&[Exchange]> {
        Ok(&self.find(conversation_id)?.history)
    }

    pub fn weak_points(&self, conversation_id: &str) -> Result<&[String]> {
        Ok(&self.find(conversation_id)?.weak_points)
    }

    pub fn conversation(&self, conversation_id: &str) -> Result<&Conversation> {
        self.find(conversation_id)
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    fn find(&self, conversation_id: &str) -> Result<&Conversation> {
        self.conversations
            .get(conversation_id)
            .ok_or_else(|| InterviewCoachError::ConversationNotFound(conversation_id.to_string()))
    }

    fn find_mut(&mut self, conversation_id: &str) -> Result<&mut Conversation> {
        self.conversations
            .get_mut(conversation_id)
            .ok_or_else(|| InterviewCoachError::ConversationNotFound(conversation_id.to_string()))
    }
}
