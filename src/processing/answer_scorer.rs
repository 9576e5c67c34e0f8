//! Heuristic answer scoring
//!
//! Two scorers with distinct policies live here. [`analyze_answer`] produces
//! feedback, a note and weak points and is what the interview conductor
//! records. [`rate_answer`] is a standalone 0-5 rating that also weighs the
//! job description.

use crate::processing::job_analyzer::analyze_job_description;
use crate::processing::text_processor::TextProcessor;
use log::debug;
use serde::{Deserialize, Serialize};

pub const FEEDBACK_EXAMPLE_PRAISE: &str =
    "Vous illustrez vos propos avec des exemples concrets, c'est un vrai plus.";
pub const FEEDBACK_OFF_TOPIC: &str =
    "Votre réponse ne répond pas à la question, essayez de la reformuler.";
pub const FEEDBACK_TOO_SHORT: &str =
    "Votre réponse est trop courte, vous pouvez l'améliorer en ajoutant des détails.";
pub const FEEDBACK_LACKS_DETAIL: &str =
    "Votre réponse est un bon début, mais elle manque de détails.";
pub const FEEDBACK_RELEVANT: &str =
    "Votre réponse est pertinente, vous avez bien répondu à la question.";
pub const FEEDBACK_CITE_SKILL: &str =
    "Vous n'avez pas cité de compétence, vous pouvez en citer pour améliorer votre réponse.";

/// Weak point recorded for answers with fewer than five keywords.
pub const WEAK_POINT_LENGTH: &str = "longueur";
/// Weak point recorded for answers without an example.
pub const WEAK_POINT_EXAMPLE: &str = "exemple";

/// Competencies checked in every answer. "analys" is a stem and only
/// matches that literal token.
pub const COMPETENCIES: [&str; 5] = ["communication", "gestion", "projet", "analys", "leadership"];

const IMPORTANT_KEYWORDS: [&str; 7] = [
    "expérience",
    "compétences",
    "motivation",
    "gestion",
    "communication",
    "analyse",
    "leadership",
];

/// Multi-word and hyphenated entries cannot match a single cleaned token.
const HESITATION_MARKERS: [&str; 3] = ["non", "peut-être", "je ne sais pas"];

const EXAMPLE_MARKERS: [&str; 2] = ["exemple", "exemples"];

const DEFAULT_NOTE: u8 = 3;

/// Highest score either scorer hands out.
pub const MAX_NOTE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerAnalysis {
    pub feedbacks: Vec<String>,
    pub note: u8,
    pub weak_points: Vec<String>,
}

/// Number of question keywords found in the answer. Repeated question
/// keywords count once per occurrence.
fn overlap(question_keywords: &[String], answer_keywords: &[String]) -> usize {
    question_keywords
        .iter()
        .filter(|keyword| answer_keywords.contains(keyword))
        .count()
}

fn contains_any(words: &[String], candidates: &[&str]) -> bool {
    candidates.iter().any(|candidate| words.iter().any(|word| word == candidate))
}

/// Score an answer against the question it replies to.
pub fn analyze_answer(answer: &str, question: &str) -> AnswerAnalysis {
    let processor = TextProcessor::shared();
    let answer_keywords = processor.keywords(answer);
    let question_keywords = processor.keywords(question);

    let nb_of_keywords = overlap(&question_keywords, &answer_keywords);
    let length = answer_keywords.len();

    let mut weak_points = Vec::new();
    if length < 5 {
        weak_points.push(WEAK_POINT_LENGTH.to_string());
    }

    let mut feedbacks: Vec<String> = Vec::new();
    let mut note = DEFAULT_NOTE;

    if contains_any(&answer_keywords, &EXAMPLE_MARKERS) {
        feedbacks.push(FEEDBACK_EXAMPLE_PRAISE.to_string());
    } else {
        weak_points.push(WEAK_POINT_EXAMPLE.to_string());
    }

    if nb_of_keywords == 0 {
        feedbacks.push(FEEDBACK_OFF_TOPIC.to_string());
        note = 1;
    }
    if nb_of_keywords == 0 && length < 3 {
        feedbacks.push(FEEDBACK_TOO_SHORT.to_string());
        note = 1;
    }
    if length < 3 && nb_of_keywords > 0 {
        feedbacks.push(FEEDBACK_LACKS_DETAIL.to_string());
        note = 2;
    }
    if nb_of_keywords > 0 && length > 3 {
        feedbacks.push(FEEDBACK_RELEVANT.to_string());
        note = 4;
    }
    if length < 3 {
        feedbacks.push(FEEDBACK_CITE_SKILL.to_string());
    }

    for competency in COMPETENCIES {
        if !answer_keywords.iter().any(|word| word == competency) {
            weak_points.push(competency.to_string());
        }
    }

    if feedbacks.is_empty() {
        feedbacks.push(FEEDBACK_RELEVANT.to_string());
        note = MAX_NOTE;
    }

    debug!(
        "Answer analysis: {} keyword(s), {} matching question keyword(s), note {}",
        length, nb_of_keywords, note
    );

    AnswerAnalysis {
        feedbacks,
        note,
        weak_points,
    }
}

/// Rate an answer from 0 to 5, taking the job description into account.
pub fn rate_answer(answer: &str, question: &str, job_description: &str) -> u8 {
    let processor = TextProcessor::shared();
    let job_info = analyze_job_description(job_description);

    let answer_keywords = processor.keywords(answer);
    let question_keywords = TextProcessor::significant(processor.normal_terms(question));

    let nb_of_keywords = overlap(&question_keywords, &answer_keywords);
    let important_nb_of_keywords = question_keywords
        .iter()
        .filter(|keyword| {
            answer_keywords.contains(keyword) && IMPORTANT_KEYWORDS.contains(&keyword.as_str())
        })
        .count();

    let question_len = question_keywords.len() as f64;
    let important = important_nb_of_keywords as f64;
    let matched = nb_of_keywords as f64;

    let relevance: i32 = if important_nb_of_keywords == 0 && nb_of_keywords == 0 {
        0
    } else if important < question_len / 2.0 || matched < question_len / 2.0 {
        1
    } else if important < question_len || matched < question_len {
        2
    } else {
        3
    };

    let expression: i32 = match answer_keywords.len() {
        0..=4 => 0,
        5..=9 => 1,
        _ => 2,
    };

    let confidence: i32 = if contains_any(&answer_keywords, &HESITATION_MARKERS) { -1 } else { 1 };

    let competencies_found = if job_info.skills.is_empty() {
        contains_any(&answer_keywords, &COMPETENCIES)
    } else {
        job_info.skills.iter().any(|skill| answer_keywords.contains(skill))
    };
    let competency_bonus: i32 = i32::from(competencies_found);
    let example_bonus: i32 = i32::from(contains_any(&answer_keywords, &EXAMPLE_MARKERS));

    let total = relevance + expression + confidence + competency_bonus + example_bonus;
    debug!(
        "Rating: relevance {} expression {} confidence {} competencies {} example {} -> {}",
        relevance, expression, confidence, competency_bonus, example_bonus, total
    );

    total.clamp(0, i32::from(MAX_NOTE)) as u8
}

/// Generic improvement suggestions. The text is not inspected.
pub fn semantic_analysis(_text: &str) -> Vec<String> {
    vec![
        "Améliorer la structure de la phrase.".to_string(),
        "Ajouter des mots clés pertinents pour le poste.".to_string(),
        "Mettre en avant vos expériences les plus significatives.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    const EXPERIENCE_QUESTION: &str = "Pouvez-vous me parler de votre expérience dans ce domaine ?";

    #[test]
    fn test_empty_answer_is_off_topic() {
        let analysis = analyze_answer("", "Quelle est votre expérience ?");

        assert_eq!(analysis.note, 1);
        assert!(analysis.feedbacks.contains(&FEEDBACK_OFF_TOPIC.to_string()));
        assert!(analysis.feedbacks.contains(&FEEDBACK_TOO_SHORT.to_string()));
        assert!(analysis.feedbacks.contains(&FEEDBACK_CITE_SKILL.to_string()));
        assert_eq!(analysis.weak_points[0], WEAK_POINT_LENGTH);
        assert_eq!(analysis.weak_points[1], WEAK_POINT_EXAMPLE);
    }

    #[test]
    fn test_example_and_relevant_answer() {
        let analysis = analyze_answer(
            "Mon expérience dans ce domaine : parler de votre exemple de communication",
            EXPERIENCE_QUESTION,
        );

        assert_eq!(analysis.note, 4);
        assert_eq!(
            analysis.feedbacks,
            vec![FEEDBACK_EXAMPLE_PRAISE.to_string(), FEEDBACK_RELEVANT.to_string()]
        );
        assert!(!analysis.weak_points.contains(&WEAK_POINT_EXAMPLE.to_string()));
        assert!(!analysis.weak_points.contains(&"communication".to_string()));
        assert!(analysis.weak_points.contains(&"leadership".to_string()));
    }

    #[test]
    fn test_short_relevant_answer_lacks_detail() {
        let analysis = analyze_answer("Votre expérience", EXPERIENCE_QUESTION);

        assert_eq!(analysis.note, 2);
        assert_eq!(
            analysis.feedbacks,
            vec![FEEDBACK_LACKS_DETAIL.to_string(), FEEDBACK_CITE_SKILL.to_string()]
        );
    }

    #[test]
    fn test_example_praise_alone_keeps_default_note() {
        // three keywords, one of them "exemple", one overlapping the question
        let analysis = analyze_answer("exemple domaine projet", EXPERIENCE_QUESTION);

        assert_eq!(analysis.note, 3);
        assert_eq!(
            analysis.feedbacks,
            vec![FEEDBACK_EXAMPLE_PRAISE.to_string()]
        );
    }

    #[test]
    fn test_three_keywords_with_overlap_and_no_example() {
        let analysis = analyze_answer("votre grand domaine", EXPERIENCE_QUESTION);

        // no rule adds feedback except the default
        assert_eq!(analysis.note, 5);
        assert_eq!(analysis.feedbacks, vec![FEEDBACK_RELEVANT.to_string()]);
        assert!(analysis.weak_points.contains(&WEAK_POINT_EXAMPLE.to_string()));
    }

    #[test]
    fn test_all_competencies_missing() {
        let analysis = analyze_answer("rien à voir avec le sujet posé ici", EXPERIENCE_QUESTION);

        for competency in COMPETENCIES {
            assert!(analysis.weak_points.contains(&competency.to_string()));
        }
        assert_eq!(analysis.note, 1);
    }

    #[test]
    fn test_rate_answer_empty_is_confident_only() {
        // relevance 0, expression 0, confidence +1
        assert_eq!(rate_answer("", "Quelle est votre expérience ?", ""), 1);
    }

    #[test]
    fn test_rate_answer_hesitation() {
        assert_eq!(rate_answer("non", "Quelle est votre expérience ?", ""), 0);
    }

    #[test]
    fn test_rate_answer_full_marks_are_clamped() {
        let question = "Votre expérience en communication ?";
        let answer = "Votre expérience en communication : un exemple concret avec une équipe \
                      internationale pendant trois années complètes";

        assert_eq!(rate_answer(answer, question, "Poste avec communication"), MAX_NOTE);
    }

    #[test]
    fn test_rate_answer_uses_job_skills() {
        let question = "Parlez-moi de vos projets";
        let answer = "leadership";

        // job skills present but not mentioned: relevance 0, confidence +1
        assert_eq!(rate_answer(answer, question, "Poste demandant une analyse"), 1);
        // no job skills: fallback competency list matches
        assert_eq!(rate_answer(answer, question, "Poste"), 2);
    }

    const FUZZ_WORDS: [&str; 16] = [
        "non", "exemple", "communication", "expérience", "projet", "leadership", "analyse",
        "je", "sais", "pas", "domaine", "motivation", "?", "!", "équipe", "python",
    ];

    const FUZZ_CHARS: &[char] = &[
        'a', 'e', 'é', 'è', 'i', 'o', 'u', 'n', 's', 't', 'r', 'l', 'x', ' ', ' ', '-', '.',
        ',', '\'', '?', '!', '(', ')', '_', '~', '9',
    ];

    fn word_sentence(rng: &mut StdRng, max_len: usize) -> String {
        let len = rng.gen_range(0..max_len);
        (0..len)
            .filter_map(|_| FUZZ_WORDS.choose(rng).copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn random_text(rng: &mut StdRng, max_len: usize) -> String {
        let len = rng.gen_range(0..max_len);
        (0..len).filter_map(|_| FUZZ_CHARS.choose(rng)).collect()
    }

    #[test]
    fn test_rate_answer_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let answer = word_sentence(&mut rng, 20);
            let question = word_sentence(&mut rng, 8);
            let job = word_sentence(&mut rng, 12);

            let note = rate_answer(&answer, &question, &job);
            assert!(note <= MAX_NOTE, "{} for {:?}", note, answer);
        }
    }

    #[test]
    fn test_rate_answer_bounds_on_random_text() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let answer = random_text(&mut rng, 80);
            let question = random_text(&mut rng, 40);
            let job = random_text(&mut rng, 60);

            let note = rate_answer(&answer, &question, &job);
            assert!(note <= MAX_NOTE, "{} for {:?}", note, answer);
        }
    }

    #[test]
    fn test_semantic_analysis_is_constant() {
        assert_eq!(semantic_analysis("a"), semantic_analysis("anything else"));
        assert_eq!(semantic_analysis("").len(), 3);
    }
}
