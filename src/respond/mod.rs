//! Rule-based text responder.
//!
//! One line of text in, one reply out. Input is matched against an
//! ordered rule list and the first matching rule produces the reply.
//! Session state lives in a caller-owned [`Profile`] that the
//! name-capture rule updates; nothing is stored globally.
//!
//! # Quick Start
//!
//! ```
//! use sugerir::respond::{Profile, Responder};
//!
//! let responder = Responder::new();
//! let mut profile = Profile::new();
//!
//! let reply = responder.respond("My name is Asha", &mut profile);
//! assert!(reply.text.contains("Asha"));
//! assert_eq!(profile.name.as_deref(), Some("Asha"));
//!
//! let reply = responder.respond("hello", &mut profile);
//! assert!(reply.text.contains("Asha"));
//! ```

mod arithmetic;
mod rules;

pub use rules::Rule;

use serde::{Deserialize, Serialize};

/// Session context consulted and updated by the rules.
///
/// Owned by the caller and passed into every
/// [`respond`](Responder::respond) call, so there is no shared mutable
/// state between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// User's name, captured by the name rule
    pub name: Option<String>,
    /// Field of study used by the specialization rule
    pub specialization: Option<String>,
}

impl Profile {
    /// Create an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the profile with a specialization.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::respond::Profile;
    ///
    /// let profile = Profile::new().with_specialization("AI");
    /// assert_eq!(profile.specialization.as_deref(), Some("AI"));
    /// ```
    #[must_use]
    pub fn with_specialization<S: Into<String>>(mut self, specialization: S) -> Self {
        self.specialization = Some(specialization.into());
        self
    }
}

/// A reply plus the rule that produced it.
///
/// Carrying the rule makes dispatch order observable in tests without
/// string matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The response text
    pub text: String,
    /// Which rule matched
    pub rule: Rule,
}

/// Ordered first-match-wins rule dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Responder;

impl Responder {
    /// Create a responder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Produce a reply for one line of input, updating the profile when
    /// a capture rule matches.
    ///
    /// Never fails: input no rule understands falls through to the
    /// fallback rule.
    pub fn respond(&self, input: &str, profile: &mut Profile) -> Reply {
        let text = input.trim().to_lowercase();

        for &rule in Rule::ORDER {
            if let Some(reply_text) = rule.apply(&text, profile) {
                return Reply {
                    text: reply_text,
                    rule,
                };
            }
        }

        // Rule::Fallback always matches; this is unreachable in practice
        Reply {
            text: "I apologize, I did not understand that.".to_string(),
            rule: Rule::Fallback,
        }
    }

    /// Returns true for the session-ending sentinel phrases.
    ///
    /// # Examples
    ///
    /// ```
    /// use sugerir::respond::Responder;
    ///
    /// assert!(Responder::is_exit("exit"));
    /// assert!(Responder::is_exit("  QUIT  "));
    /// assert!(!Responder::is_exit("exit strategy"));
    /// ```
    #[must_use]
    pub fn is_exit(input: &str) -> bool {
        let trimmed = input.trim();
        trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit")
    }
}
