use rand::Rng;
use serde::Serialize;

use crate::rules::{DEFAULT_REPLIES, TOPIC_RULES, Topic, TopicRule};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub topic: Topic,
    pub reply: &'static str,
}

/// First-match keyword classifier. Falls through to `Topic::Default`.
pub fn detect_topic(msg: &str) -> Topic {
    detect_with(TOPIC_RULES, msg)
}

fn detect_with(rules: &[TopicRule], msg: &str) -> Topic {
    let msg_lower = msg.to_lowercase();

    rules
        .iter()
        .find(|rule| rule.triggers.iter().any(|kw| msg_lower.contains(kw)))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Default)
}

/// Picks a reply for free-text input from a static rule table.
#[derive(Debug, Clone, Copy)]
pub struct ResponseSelector {
    rules: &'static [TopicRule],
    fallback: &'static [&'static str],
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self {
            rules: TOPIC_RULES,
            fallback: DEFAULT_REPLIES,
        }
    }

    /// Returns `None` for blank input; nothing is classified in that case.
    pub fn select<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> Option<Selection> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let topic = detect_with(self.rules, trimmed);
        let replies = self.replies(topic);
        let reply = replies[rng.random_range(0..replies.len())];

        tracing::debug!(topic = %topic, "classified chat input");
        Some(Selection { topic, reply })
    }

    /// Opening message for a fresh session.
    pub fn welcome(&self) -> &'static str {
        self.replies(Topic::Greeting)[0]
    }

    pub fn replies(&self, topic: Topic) -> &'static [&'static str] {
        match topic {
            Topic::Default => self.fallback,
            other => self
                .rules
                .iter()
                .find(|rule| rule.topic == other)
                .map(|rule| rule.replies)
                .unwrap_or(self.fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn blank_input_is_ignored() {
        let selector = ResponseSelector::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(selector.select("", &mut rng), None);
        assert_eq!(selector.select("   \t\n", &mut rng), None);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(detect_topic("WHERE ARE YOU"), Topic::Location);
        assert_eq!(detect_topic("Certification"), Topic::Exams);
    }

    #[test]
    fn welcome_is_first_greeting() {
        let selector = ResponseSelector::new();
        assert!(selector.welcome().starts_with("Hello!"));
    }
}
