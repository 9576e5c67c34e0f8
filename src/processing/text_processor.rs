//! Text normalization and lemmatization

use regex::Regex;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Punctuation and symbols deleted before tokenization. Deletion, not
/// replacement: "full-stack" becomes "fullstack".
const STRIP_PATTERN: &str = r"[.,/#!$%\^&\*;:{}=\-_`~()]";

static PROCESSOR: Lazy<TextProcessor> = Lazy::new(TextProcessor::new);

/// Tokens of this length or shorter are not keywords.
pub const MIN_KEYWORD_CHARS: usize = 2;

pub struct TextProcessor {
    strip_regex: Regex,
    invariable_words: HashSet<&'static str>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let strip_regex = Regex::new(STRIP_PATTERN).expect("Invalid punctuation regex");

        Self {
            strip_regex,
            invariable_words: Self::create_invariable_words(),
        }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static TextProcessor {
        &PROCESSOR
    }

    /// Lowercase and delete the strip set.
    pub fn clean_text(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        self.strip_regex.replace_all(&lower, "").into_owned()
    }

    /// Split cleaned text on whitespace runs.
    pub fn tokenize(&self, cleaned: &str) -> Vec<String> {
        cleaned.split_whitespace().map(str::to_string).collect()
    }

    /// Clean, tokenize and lemmatize each token independently.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        self.tokenize(&self.clean_text(text))
            .iter()
            .map(|token| self.lemmatize(token))
            .collect()
    }

    /// Cleaned surface terms, without lemmatization.
    pub fn normal_terms(&self, text: &str) -> Vec<String> {
        self.tokenize(&self.clean_text(text))
    }

    /// Lemmatized tokens longer than [`MIN_KEYWORD_CHARS`].
    pub fn keywords(&self, text: &str) -> Vec<String> {
        Self::significant(self.normalize(text))
    }

    /// Keep only tokens longer than [`MIN_KEYWORD_CHARS`] characters.
    pub fn significant(tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| token.chars().count() > MIN_KEYWORD_CHARS)
            .collect()
    }

    /// Noun singular form first, then verb infinitive, else the token itself.
    pub fn lemmatize(&self, word: &str) -> String {
        self.singularize(word)
            .or_else(|| self.to_infinitive(word))
            .unwrap_or_else(|| word.to_string())
    }

    fn singularize(&self, word: &str) -> Option<String> {
        if !Self::is_alphabetic_word(word)
            || word.chars().count() <= 3
            || self.invariable_words.contains(word)
        {
            return None;
        }

        if let Some(stem) = word.strip_suffix("eaux") {
            return Some(format!("{}eau", stem));
        }
        if let Some(stem) = word.strip_suffix("aux") {
            return Some(format!("{}al", stem));
        }
        if ["ss", "us", "is", "ès"].iter().any(|suffix| word.ends_with(suffix)) {
            return None;
        }

        word.strip_suffix('s').map(str::to_string)
    }

    fn to_infinitive(&self, word: &str) -> Option<String> {
        if !Self::is_alphabetic_word(word) || word.chars().count() <= 5 {
            return None;
        }

        if let Some(stem) = word.strip_suffix("ied") {
            return Some(format!("{}y", stem));
        }

        let stem = word.strip_suffix("ing")?;
        let mut chars: Vec<char> = stem.chars().collect();
        // planning -> plan, but falling -> fall
        let doubled = matches!(
            chars.as_slice(),
            [.., a, b] if a == b && !matches!(b, 'l' | 's' | 'z')
        );
        if doubled {
            chars.pop();
        }
        Some(chars.into_iter().collect())
    }

    fn is_alphabetic_word(word: &str) -> bool {
        !word.is_empty() && word.chars().all(char::is_alphabetic)
    }

    /// Words ending in a plural marker that are not plurals
    fn create_invariable_words() -> HashSet<&'static str> {
        [
            "dans", "sans", "vers", "alors", "moins", "toujours", "ailleurs", "temps", "pays",
            "faux", "êtes", "sommes", "avons", "pouvons", "devons", "voulons", "lors", "cours",
            "discours", "parcours", "ressources", "news", "always", "perhaps", "towards",
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRIP_SET: &[char] = &[
        '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_',
        '`', '~', '(', ')',
    ];

    #[test]
    fn test_shared_instance_is_reused() {
        assert!(std::ptr::eq(TextProcessor::shared(), TextProcessor::shared()));
        assert_eq!(TextProcessor::shared().normalize("Les projets"), vec!["les", "projet"]);
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("Bonjour, le monde!");

        assert_eq!(tokens, vec!["bonjour", "le", "monde"]);
    }

    #[test]
    fn test_deletion_fuses_words() {
        let processor = TextProcessor::new();

        assert_eq!(processor.normalize("full-stack"), vec!["fullstack"]);
        assert_eq!(processor.normalize("react/redux"), vec!["reactredux"]);
    }

    #[test]
    fn test_empty_input() {
        let processor = TextProcessor::new();

        assert!(processor.normalize("").is_empty());
        assert!(processor.normalize("   \n\t ").is_empty());
    }

    #[test]
    fn test_never_keeps_strip_set() {
        let processor = TextProcessor::new();
        let inputs = [
            "a.b,c/d#e!f$g%h^i&j*k;l:m{n}o=p-q_r`s~t(u)v",
            "(((...)))",
            "Expérience: 5 ans; React & SQL!",
            "~~__--==",
        ];

        for input in inputs {
            for token in processor.normalize(input) {
                assert!(!token.contains(STRIP_SET), "token {:?} from {:?}", token, input);
            }
        }
    }

    #[test]
    fn test_plural_nouns_are_singularized() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("Développeurs confirmés, exemples et bureaux");

        assert_eq!(tokens, vec!["développeur", "confirmé", "exemple", "et", "bureau"]);
    }

    #[test]
    fn test_invariable_and_short_words_kept() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("dans vous très les ans");

        assert_eq!(tokens, vec!["dans", "vous", "très", "les", "ans"]);
    }

    #[test]
    fn test_verb_forms() {
        let processor = TextProcessor::new();

        assert_eq!(processor.lemmatize("leading"), "lead");
        assert_eq!(processor.lemmatize("planning"), "plan");
        assert_eq!(processor.lemmatize("falling"), "fall");
        assert_eq!(processor.lemmatize("studied"), "study");
    }

    #[test]
    fn test_non_alphabetic_tokens_pass_through() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("c++ 2024 l'équipe ?");

        assert_eq!(tokens, vec!["c++", "2024", "l'équipe", "?"]);
    }

    #[test]
    fn test_normal_terms_are_not_lemmatized() {
        let processor = TextProcessor::new();
        let terms = processor.normal_terms("Quelles sont vos compétences ?");

        assert_eq!(terms, vec!["quelles", "sont", "vos", "compétences", "?"]);
    }

    #[test]
    fn test_keywords_drop_short_tokens() {
        let processor = TextProcessor::new();
        let keywords = processor.keywords("Je suis un bon chef de projet");

        assert_eq!(keywords, vec!["suis", "bon", "chef", "projet"]);
    }
}
