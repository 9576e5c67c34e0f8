//! Job description classification: role type, seniority, skills and technologies

use crate::processing::text_processor::TextProcessor;
use aho_corasick::AhoCorasick;
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terms that make a role a management role (substring match on cleaned text).
pub const MANAGEMENT_TERMS: [&str; 6] =
    ["manager", "lead", "équipe", "managing", "directeur", "direction"];

/// Terms that make a role a senior role (substring match on cleaned text).
pub const SENIOR_TERMS: [&str; 5] = ["senior", "expert", "confirmé", "expérimenté", "expérimentée"];

/// Skills extracted by exact lemma match. "gestion de projet" spans several
/// tokens and therefore never matches a single lemma.
pub const SKILL_KEYWORDS: [&str; 4] =
    ["communication", "gestion de projet", "analyse", "leadership"];

pub const TECHNOLOGY_KEYWORDS: [&str; 5] = ["javascript", "react", "python", "java", "sql"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    #[default]
    Technical,
    Management,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    #[default]
    Junior,
    Senior,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::Technical => write!(f, "technical"),
            JobType::Management => write!(f, "management"),
        }
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobLevel::Junior => write!(f, "junior"),
            JobLevel::Senior => write!(f, "senior"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptionAnalysis {
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub level: JobLevel,
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
}

static ANALYZER: Lazy<JobAnalyzer> = Lazy::new(JobAnalyzer::new);

/// Rule-based job description analyzer
pub struct JobAnalyzer {
    processor: &'static TextProcessor,
    management_matcher: AhoCorasick,
    senior_matcher: AhoCorasick,
}

impl Default for JobAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl JobAnalyzer {
    pub fn new() -> Self {
        let management_matcher =
            AhoCorasick::new(MANAGEMENT_TERMS).expect("Invalid management terms");
        let senior_matcher = AhoCorasick::new(SENIOR_TERMS).expect("Invalid senior terms");

        Self {
            processor: TextProcessor::shared(),
            management_matcher,
            senior_matcher,
        }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static JobAnalyzer {
        &ANALYZER
    }

    /// Classify a job description. Never fails: unmatched categories keep
    /// their defaults.
    pub fn analyze(&self, job_description: &str) -> JobDescriptionAnalysis {
        let cleaned = self.processor.clean_text(job_description);
        let lemmatized_words = self.processor.normalize(job_description);

        let mut job_type = JobType::Technical;
        if let Some(found) = self.management_matcher.find(&cleaned) {
            debug!("Management term '{}' found", MANAGEMENT_TERMS[found.pattern().as_usize()]);
            job_type = JobType::Management;
        }
        if ["directeur", "direction"].iter().any(|term| cleaned.contains(term)) {
            job_type = JobType::Management;
        }

        let mut level = JobLevel::Junior;
        if let Some(found) = self.senior_matcher.find(&cleaned) {
            debug!("Senior term '{}' found", SENIOR_TERMS[found.pattern().as_usize()]);
            level = JobLevel::Senior;
        }
        if ["expert", "confirmé", "expérimenté", "expérimentée"]
            .iter()
            .any(|term| cleaned.contains(term))
        {
            level = JobLevel::Senior;
        }

        let skills = Self::matching_keywords(&SKILL_KEYWORDS, &lemmatized_words);
        let technologies = Self::matching_keywords(&TECHNOLOGY_KEYWORDS, &lemmatized_words);

        JobDescriptionAnalysis {
            job_type,
            level,
            skills,
            technologies,
        }
    }

    fn matching_keywords(keywords: &[&str], words: &[String]) -> Vec<String> {
        keywords
            .iter()
            .filter(|keyword| words.iter().any(|word| word == *keyword))
            .map(|keyword| keyword.to_string())
            .collect()
    }
}

/// Analyze with the shared analyzer.
pub fn analyze_job_description(job_description: &str) -> JobDescriptionAnalysis {
    JobAnalyzer::shared().analyze(job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_analyzer_is_reused() {
        assert!(std::ptr::eq(JobAnalyzer::shared(), JobAnalyzer::shared()));
        let analysis = JobAnalyzer::shared().analyze("Développeur Python junior");
        assert_eq!(analysis.technologies, vec!["python"]);
    }

    #[test]
    fn test_management_senior_role() {
        let analysis = analyze_job_description(
            "Nous cherchons un lead pour encadrer une équipe de développeurs confirmés",
        );

        assert_eq!(analysis.job_type, JobType::Management);
        assert_eq!(analysis.level, JobLevel::Senior);
        assert!(analysis.skills.is_empty());
        assert!(analysis.technologies.is_empty());
    }

    #[test]
    fn test_junior_technical_role() {
        let analysis = analyze_job_description("Poste de développeur junior Python");

        assert_eq!(analysis.job_type, JobType::Technical);
        assert_eq!(analysis.level, JobLevel::Junior);
        assert_eq!(analysis.technologies, vec!["python"]);
    }

    #[test]
    fn test_direction_is_management() {
        let analysis = analyze_job_description("Rattaché à la direction technique");

        assert_eq!(analysis.job_type, JobType::Management);
    }

    #[test]
    fn test_substring_containment() {
        // "lead" is contained in "leadership"
        let analysis = analyze_job_description("Vous avez du leadership");

        assert_eq!(analysis.job_type, JobType::Management);
        assert_eq!(analysis.skills, vec!["leadership"]);
    }

    #[test]
    fn test_skills_require_exact_tokens() {
        let analysis = analyze_job_description("Communication, analyse et gestion de projet");

        assert_eq!(analysis.skills, vec!["communication", "analyse"]);
    }

    #[test]
    fn test_technologies_are_exact_tokens() {
        let analysis = analyze_job_description("JavaScript et React, bases SQL");

        assert_eq!(analysis.technologies, vec!["javascript", "react", "sql"]);
        assert!(!analysis.technologies.contains(&"java".to_string()));
    }

    #[test]
    fn test_punctuation_fuses_technologies() {
        let analysis = analyze_job_description("Stack Java/SQL");

        assert!(analysis.technologies.is_empty());
    }

    #[test]
    fn test_empty_description_defaults() {
        let analysis = analyze_job_description("");

        assert_eq!(analysis, JobDescriptionAnalysis::default());
    }

    #[test]
    fn test_serializes_type_field() {
        let analysis = analyze_job_description("Manager senior");
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["type"], "management");
        assert_eq!(json["level"], "senior");
    }
}
