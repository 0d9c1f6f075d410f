use regex::{Regex, RegexBuilder, RegexSet, RegexSetBuilder};

/// One row of a keyword table: a group of synonyms sharing an icon code.
///
/// Every synonym is matched case-insensitively on word boundaries, so
/// `egg` matches "Fried Egg" but not "Leggings" or "reggae". Multi-word
/// synonyms tolerate any run of whitespace between their words.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    keywords: Vec<&'static str>,
    pattern: Regex,
    code: &'static str,
}

impl KeywordRule {
    pub fn new(keywords: &[&'static str], code: &'static str) -> Result<Self, RuleError> {
        let source = keyword_pattern(keywords, code)?;
        let pattern = RegexBuilder::new(&source).case_insensitive(true).build()?;

        Ok(Self {
            keywords: keywords.to_vec(),
            pattern,
            code,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn keywords(&self) -> &[&'static str] {
        &self.keywords
    }

    fn source(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Build `\b(?:a|b|c d)\b` from a synonym list
fn keyword_pattern(keywords: &[&str], code: &str) -> Result<String, RuleError> {
    if keywords.is_empty() {
        return Err(RuleError::NoKeywords(code.to_string()));
    }

    let mut alternatives = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let words: Vec<&str> = keyword.split_whitespace().collect();
        let starts_ok = words
            .first()
            .and_then(|w| w.chars().next())
            .is_some_and(char::is_alphanumeric);
        let ends_ok = words
            .last()
            .and_then(|w| w.chars().last())
            .is_some_and(char::is_alphanumeric);

        // \b only anchors next to word characters
        if !starts_ok || !ends_ok {
            return Err(RuleError::InvalidKeyword(keyword.to_string()));
        }

        let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
        alternatives.push(escaped.join(r"\s+"));
    }

    Ok(format!(r"\b(?:{})\b", alternatives.join("|")))
}

/// Ordered keyword table. Earlier rules take priority.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<KeywordRule>,
    set: RegexSet,
}

impl RuleTable {
    pub fn new(rules: Vec<KeywordRule>) -> Result<Self, RuleError> {
        let set = RegexSetBuilder::new(rules.iter().map(KeywordRule::source))
            .case_insensitive(true)
            .build()?;

        Ok(Self { rules, set })
    }

    /// Build from `(synonyms, code)` rows, keeping their order
    pub fn from_entries(entries: &[(&[&'static str], &'static str)]) -> Result<Self, RuleError> {
        let rules = entries
            .iter()
            .map(|&(keywords, code)| KeywordRule::new(keywords, code))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rules)
    }

    /// First rule in table order whose pattern matches `text`
    pub fn first_match(&self, text: &str) -> Option<&KeywordRule> {
        // set indices come back in ascending order
        self.set
            .matches(text)
            .iter()
            .next()
            .map(|index| &self.rules[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Rule for {0} has no keywords")]
    NoKeywords(String),

    #[error("Keyword must start and end with a letter or digit: {0:?}")]
    InvalidKeyword(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
