//! Static interview question catalog
//!
//! One canonical catalog. Entries flagged `cold_start` form the view used to
//! pick the opening question from a job description alone; adaptive
//! follow-up selection sees every entry.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    General,
    Motivation,
    Behavioral,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionLevel {
    All,
    Junior,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Target difficulty for a running average note.
    pub fn for_average(average_note: f64) -> Self {
        if average_note >= 4.0 {
            Difficulty::Hard
        } else if average_note < 2.0 {
            Difficulty::Easy
        } else {
            Difficulty::Medium
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionType::General => "general",
            QuestionType::Motivation => "motivation",
            QuestionType::Behavioral => "behavioral",
            QuestionType::Technical => "technical",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionDefinition {
    pub question: &'static str,
    pub keywords: &'static [&'static str],
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub level: QuestionLevel,
    pub difficulty: Option<Difficulty>,
    #[serde(skip)]
    pub cold_start: bool,
}

impl QuestionDefinition {
    /// True when one of the question keywords equals one of `terms`.
    pub fn has_keyword_in<S: AsRef<str>>(&self, terms: &[S]) -> bool {
        terms
            .iter()
            .any(|term| self.keywords.contains(&term.as_ref()))
    }
}

const fn entry(
    question: &'static str,
    keywords: &'static [&'static str],
    question_type: QuestionType,
    level: QuestionLevel,
    difficulty: Option<Difficulty>,
    cold_start: bool,
) -> QuestionDefinition {
    QuestionDefinition {
        question,
        keywords,
        question_type,
        level,
        difficulty,
        cold_start,
    }
}

use Difficulty::{Easy, Hard, Medium};
use QuestionLevel::{All, Junior, Senior};
use QuestionType::{Behavioral, General, Motivation, Technical};

static QUESTIONS: [QuestionDefinition; 21] = [
    entry(
        "Pouvez-vous me parler de votre expérience dans ce domaine ?",
        &["expérience", "parcours", "domaine"],
        General,
        All,
        Some(Easy),
        true,
    ),
    entry(
        "Quelles sont vos principales compétences pour ce poste ?",
        &["compétences", "aptitudes", "qualifications"],
        General,
        All,
        Some(Easy),
        true,
    ),
    entry(
        "Pourquoi avez-vous postulé à ce poste ?",
        &["motivation", "intérêt", "raison"],
        Motivation,
        All,
        Some(Easy),
        true,
    ),
    entry(
        "Comment gérez-vous le stress et la pression ?",
        &["stress", "pression", "gestion", "adaptation"],
        Behavioral,
        All,
        Some(Medium),
        true,
    ),
    entry(
        "Où vous voyez-vous dans cinq ans ?",
        &["projection", "avenir", "ambition", "objectif"],
        Motivation,
        All,
        Some(Medium),
        true,
    ),
    entry(
        "Parlez-moi d'un défi que vous avez rencontré et comment vous l'avez surmonté.",
        &["défi", "problème", "solution", "résolution"],
        Behavioral,
        All,
        Some(Hard),
        true,
    ),
    entry(
        "Quelles sont vos attentes salariales ?",
        &["salaire", "rémunération", "compensation"],
        General,
        All,
        None,
        true,
    ),
    entry(
        "Avez-vous des questions ?",
        &["question", "curiosité", "éclaircissement"],
        General,
        All,
        None,
        true,
    ),
    entry(
        "Décrivez votre expérience avec JavaScript.",
        &["javascript"],
        Technical,
        All,
        Some(Medium),
        true,
    ),
    entry(
        "Décrivez votre expérience avec React.",
        &["react"],
        Technical,
        All,
        Some(Medium),
        true,
    ),
    entry(
        "Décrivez votre expérience avec Python.",
        &["python"],
        Technical,
        All,
        Some(Medium),
        true,
    ),
    entry(
        "Décrivez votre expérience avec SQL.",
        &["sql"],
        Technical,
        All,
        Some(Medium),
        true,
    ),
    entry(
        "Décrivez votre expérience avec Java.",
        &["java"],
        Technical,
        All,
        Some(Medium),
        true,
    ),
    entry(
        "Comment avez-vous communiqué avec une équipe dans un projet ?",
        &["communication"],
        Behavioral,
        All,
        Some(Hard),
        true,
    ),
    entry(
        "Comment avez-vous géré un projet ?",
        &["gestion de projet"],
        Behavioral,
        All,
        Some(Hard),
        true,
    ),
    entry(
        "Parlez-moi de vos qualités analytiques.",
        &["analyse"],
        Behavioral,
        All,
        Some(Hard),
        true,
    ),
    entry(
        "Parlez-moi de votre expérience en leadership.",
        &["leadership"],
        Behavioral,
        Senior,
        None,
        false,
    ),
    entry(
        "Quelles sont vos principales forces et faiblesses ?",
        &["forces", "faiblesses"],
        General,
        Junior,
        Some(Hard),
        false,
    ),
    entry(
        "Pouvez-vous me donner un exemple ?",
        &["exemple"],
        General,
        All,
        None,
        false,
    ),
    entry(
        "Comment vous améliorerez-vous en communication ?",
        &["communication"],
        General,
        All,
        Some(Hard),
        false,
    ),
    entry(
        "Comment vous améliorerez-vous en gestion de projet ?",
        &["gestion", "projet"],
        General,
        Junior,
        Some(Medium),
        false,
    ),
];

/// Every catalog entry, in catalog order.
pub fn all() -> &'static [QuestionDefinition] {
    &QUESTIONS
}

/// Entries eligible for cold-start selection, in catalog order.
pub fn cold_start() -> impl Iterator<Item = &'static QuestionDefinition> {
    QUESTIONS.iter().filter(|question| question.cold_start)
}

/// Catalog entry with exactly this text.
pub fn find(question: &str) -> Option<&'static QuestionDefinition> {
    QUESTIONS.iter().find(|definition| definition.question == question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cold_start_is_a_prefix_view() {
        let cold: Vec<_> = cold_start().collect();

        assert_eq!(cold.len(), 16);
        assert_eq!(cold[0].question, all()[0].question);
        assert!(all().len() > cold.len());
    }

    #[test]
    fn test_question_texts_are_unique() {
        let texts: HashSet<_> = all().iter().map(|q| q.question).collect();

        assert_eq!(texts.len(), all().len());
    }

    #[test]
    fn test_find() {
        let found = find("Décrivez votre expérience avec SQL.").unwrap();

        assert_eq!(found.question_type, QuestionType::Technical);
        assert_eq!(found.keywords, &["sql"]);
        assert!(find("Question inconnue").is_none());
    }

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(Difficulty::for_average(0.0), Difficulty::Easy);
        assert_eq!(Difficulty::for_average(1.99), Difficulty::Easy);
        assert_eq!(Difficulty::for_average(2.0), Difficulty::Medium);
        assert_eq!(Difficulty::for_average(3.99), Difficulty::Medium);
        assert_eq!(Difficulty::for_average(4.0), Difficulty::Hard);
        assert_eq!(Difficulty::for_average(5.0), Difficulty::Hard);
    }

    #[test]
    fn test_has_keyword_in() {
        let question = find("Comment vous améliorerez-vous en gestion de projet ?").unwrap();

        assert!(question.has_keyword_in(&["projet".to_string()]));
        assert!(question.has_keyword_in(&["leadership", "gestion"]));
        assert!(!question.has_keyword_in::<String>(&[]));
    }
}
