//! The ordered rule table and per-rule handlers.
//!
//! Each rule is a predicate plus a handler: given normalized (trimmed,
//! lowercased) input it either produces a reply or declines. The
//! dispatcher tries rules in [`Rule::ORDER`] and the first producer
//! wins, so earlier rules shadow later ones on overlapping input.

use super::arithmetic;
use super::Profile;

/// Identifies which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// "hello" / "hi" / "hey"
    Greeting,
    /// "my name is X" and variants; updates the profile
    NameCapture,
    /// First `<int> op <int>` found in the input
    Arithmetic,
    /// "your name" / "who are you"
    Identity,
    /// "what can you do" / "your purpose"
    Capabilities,
    /// "ai" / "machine learning" / "data science"
    SpecializationTopic,
    /// "best language" and variants
    LanguageAdvice,
    /// "thank you" / "thanks"
    Gratitude,
    /// "project" / "task"
    Project,
    /// Always matches
    Fallback,
}

impl Rule {
    /// Dispatch order. First match wins.
    pub(crate) const ORDER: &'static [Rule] = &[
        Rule::Greeting,
        Rule::NameCapture,
        Rule::Arithmetic,
        Rule::Identity,
        Rule::Capabilities,
        Rule::SpecializationTopic,
        Rule::LanguageAdvice,
        Rule::Gratitude,
        Rule::Project,
        Rule::Fallback,
    ];

    /// Apply this rule to normalized input. `None` means "not my input".
    pub(crate) fn apply(self, text: &str, profile: &mut Profile) -> Option<String> {
        match self {
            Rule::Greeting => greeting(text, profile),
            Rule::NameCapture => name_capture(text, profile),
            Rule::Arithmetic => {
                arithmetic::find_expression(text).map(|expr| arithmetic::evaluate(&expr))
            }
            Rule::Identity => identity(text),
            Rule::Capabilities => capabilities(text),
            Rule::SpecializationTopic => specialization_topic(text, profile),
            Rule::LanguageAdvice => language_advice(text),
            Rule::Gratitude => gratitude(text, profile),
            Rule::Project => project(text),
            Rule::Fallback => Some(fallback(profile)),
        }
    }
}

fn greeting(text: &str, profile: &Profile) -> Option<String> {
    if !contains_any_word(text, &["hello", "hi", "hey"]) {
        return None;
    }
    Some(match &profile.name {
        Some(name) => format!("Hello, {name}! How can I assist you further today?"),
        None => "Hello! I am a rule-based assistant. What is your name?".to_string(),
    })
}

fn name_capture(text: &str, profile: &mut Profile) -> Option<String> {
    let name = capture_name(text)?;
    profile.name = Some(name.clone());
    Some(format!(
        "Pleased to meet you, {name}! How can I assist you with your tasks?"
    ))
}

fn identity(text: &str) -> Option<String> {
    if text.contains("your name") || text.contains("who are you") {
        Some(
            "I am a simple rule-based assistant; every reply comes from an ordered list of patterns."
                .to_string(),
        )
    } else {
        None
    }
}

fn capabilities(text: &str) -> Option<String> {
    if text.contains("what can you do") || text.contains("your purpose") {
        Some(
            "I can respond to simple keywords, remember your name, and perform basic arithmetic. Try a calculation like '10 * 5'."
                .to_string(),
        )
    } else {
        None
    }
}

fn specialization_topic(text: &str, profile: &Profile) -> Option<String> {
    let on_topic = contains_word(text, "ai")
        || text.contains("machine learning")
        || text.contains("data science");
    if !on_topic {
        return None;
    }
    Some(match &profile.specialization {
        Some(field) => format!(
            "That's right, your specialization is {field}. Keep working through the fundamentals."
        ),
        None => "I can talk about AI and machine learning, though I am only rule-based myself."
            .to_string(),
    })
}

fn language_advice(text: &str) -> Option<String> {
    if text.contains("best language")
        || text.contains("ai language")
        || text.contains("best programming")
    {
        Some(
            "For artificial intelligence work, Python remains the most common choice thanks to its library ecosystem."
                .to_string(),
        )
    } else {
        None
    }
}

fn gratitude(text: &str, profile: &Profile) -> Option<String> {
    if !text.contains("thank you") && !contains_word(text, "thanks") {
        return None;
    }
    Some(match &profile.name {
        Some(name) => format!("You are most welcome, {name}! I am glad I could help."),
        None => "You are welcome! I am pleased I was able to assist.".to_string(),
    })
}

fn project(text: &str) -> Option<String> {
    if contains_word(text, "project") || contains_word(text, "task") {
        Some("I was built as a rule-based text-matching exercise.".to_string())
    } else {
        None
    }
}

fn fallback(profile: &Profile) -> String {
    match &profile.name {
        Some(name) => format!(
            "Apologies, {name}, I didn't understand that. Try a simple calculation like '10 * 5'."
        ),
        None => "I apologize, I did not understand that. Could you rephrase?".to_string(),
    }
}

/// Word-boundary containment check over alphanumeric tokens.
fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}

fn contains_any_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| contains_word(text, word))
}

/// Extract a name following a marker phrase like "my name is".
///
/// The marker must sit on word boundaries and be followed by a
/// separator and an alphabetic token. Input is already lowercased, so
/// the captured token is recapitalized.
fn capture_name(text: &str) -> Option<String> {
    // Longer markers first so "you can call me" is not eaten by "call me"
    const MARKERS: &[&str] = &["my name is", "you can call me", "call me", "i am"];

    for marker in MARKERS {
        let Some(pos) = text.find(marker) else { continue };

        // Word boundary before the marker ("recall me" must not match)
        let boundary_ok = pos == 0
            || text[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| !c.is_alphanumeric());
        if !boundary_ok {
            continue;
        }

        let remainder = &text[pos + marker.len()..];
        // Marker must end on a word boundary too
        match remainder.chars().next() {
            Some(c) if c.is_alphanumeric() => continue,
            None => continue,
            Some(_) => {}
        }

        let Some(token) = remainder
            .split(|c: char| !c.is_alphanumeric())
            .find(|fragment| !fragment.is_empty())
        else {
            continue;
        };
        if !token.chars().all(char::is_alphabetic) {
            continue;
        }
        return Some(capitalize(token));
    }

    None
}

/// Uppercase the first character.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
