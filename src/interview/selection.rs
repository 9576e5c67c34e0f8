//! Question selection policies
//!
//! [`generate_interview_question`] picks an opening question from the job
//! description alone. [`select_question`] picks follow-ups from what is left
//! of the catalog, given the running difficulty target, the weak points and
//! the type of the previous question.

use crate::interview::question_bank::{
    self, Difficulty, QuestionDefinition, QuestionLevel, QuestionType,
};
use crate::processing::job_analyzer::{JobAnalyzer, JobDescriptionAnalysis, JobLevel, JobType};
use crate::processing::text_processor::TextProcessor;
use log::debug;

/// Inputs of the follow-up selection.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    pub difficulty: Difficulty,
    pub last_type: Option<QuestionType>,
    pub weak_points: &'a [String],
    pub job: &'a JobDescriptionAnalysis,
}

/// Pick the next question among `available` (unasked entries, catalog order,
/// non-empty).
///
/// Weak-point remediation and type rotation scan every available entry; the
/// difficulty target only names the entries it would prefer. The fallback is
/// the first available entry. Type rotation only ever considers the first
/// entry whose type differs from the previous one.
pub fn select_question(
    available: &[&'static QuestionDefinition],
    context: &SelectionContext<'_>,
) -> Option<&'static QuestionDefinition> {
    let default = *available.first()?;

    let at_difficulty = available
        .iter()
        .filter(|question| question.difficulty == Some(context.difficulty))
        .count();
    debug!(
        "{} of {} available question(s) at {} difficulty",
        at_difficulty,
        available.len(),
        context.difficulty
    );

    if let Some(question) = available
        .iter()
        .find(|question| question.has_keyword_in(context.weak_points))
    {
        debug!("Remediating weak points with: {}", question.question);
        return Some(*question);
    }

    if let Some(candidate) = available
        .iter()
        .find(|question| Some(question.question_type) != context.last_type)
    {
        let skills = context.job.skills.as_slice();
        if !skills.is_empty() && candidate.has_keyword_in(skills) {
            debug!("Rotating question type with: {}", candidate.question);
            return Some(*candidate);
        }
    }

    Some(default)
}

fn fits_job(question: &QuestionDefinition, job: &JobDescriptionAnalysis) -> bool {
    let type_fits = match job.job_type {
        JobType::Management => question.question_type == QuestionType::Behavioral,
        JobType::Technical => matches!(
            question.question_type,
            QuestionType::Technical | QuestionType::General
        ),
    };
    let level_fits = match job.level {
        JobLevel::Junior => question.level != QuestionLevel::Senior,
        JobLevel::Senior => question.level != QuestionLevel::Junior,
    };

    type_fits
        && level_fits
        && (job.skills.is_empty() || question.has_keyword_in(job.skills.as_slice()))
        && (job.technologies.is_empty() || question.has_keyword_in(job.technologies.as_slice()))
}

/// Opening question for a job description: among the cold-start entries
/// fitting the job, the one with the most keywords found in the description.
/// Falls back to the first catalog entry.
pub fn generate_interview_question(job_description: &str) -> String {
    let job = JobAnalyzer::shared().analyze(job_description);
    let job_words = TextProcessor::shared().normalize(job_description);

    let mut best = &question_bank::all()[0];
    let mut max_matching_keywords = 0;

    for question in question_bank::cold_start().filter(|question| fits_job(question, &job)) {
        let matching_keywords = question
            .keywords
            .iter()
            .filter(|keyword| job_words.iter().any(|word| word == *keyword))
            .count();

        if matching_keywords > max_matching_keywords {
            max_matching_keywords = matching_keywords;
            best = question;
        }
    }

    debug!(
        "Cold-start question for {} {} role: {}",
        job.level, job.job_type, best.question
    );
    best.question.to_string()
}
