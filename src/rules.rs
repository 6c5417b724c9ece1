// src/rules.rs
//! Keyword table for the chat assistant.
//!
//! Rules are evaluated top to bottom and the first rule with a matching
//! trigger wins. Triggers are lowercase substrings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Greeting,
    Exams,
    Schedule,
    Classes,
    Pricing,
    Location,
    Hours,
    Contact,
    Default,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Exams => "exams",
            Topic::Schedule => "schedule",
            Topic::Classes => "classes",
            Topic::Pricing => "pricing",
            Topic::Location => "location",
            Topic::Hours => "hours",
            Topic::Contact => "contact",
            Topic::Default => "default",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct TopicRule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    pub replies: &'static [&'static str],
}

pub static TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Greeting,
        triggers: &["hello", "hi", "hey"],
        replies: &[
            "Hello! I'm here to help you with exam scheduling and questions about The Prosper Center. How can I assist you today?",
            "Hi there! Welcome to The Prosper Center. I can help you schedule exams, learn about our classes, or answer any questions you have.",
            "Greetings! I'm your virtual assistant. I'm here to help with exam bookings, class information, and general inquiries.",
        ],
    },
    TopicRule {
        topic: Topic::Exams,
        triggers: &["exam", "test", "certification"],
        replies: &[
            "We offer a wide range of professional certification exams including FINRA Series, MCAT, CPA, and IT certifications. Which exam are you interested in?",
            "Our testing center is authorized for major professional exams. Popular choices include Series 7, MCAT, CPA sections, and CompTIA certifications. What field are you looking to get certified in?",
        ],
    },
    TopicRule {
        topic: Topic::Schedule,
        triggers: &["schedule", "book", "appointment"],
        replies: &[
            "I'd be happy to help you schedule an exam! We're open Monday-Friday 8AM-8PM and Saturday 9AM-5PM. What exam would you like to schedule?",
            "To schedule your exam, I'll need to know which certification you're taking and your preferred date/time. Our calendar is quite flexible!",
        ],
    },
    TopicRule {
        topic: Topic::Classes,
        triggers: &["class", "course", "training"],
        replies: &[
            "We offer expert-led preparation courses for most of our exams. Our classes have small sizes and high success rates. Which exam are you preparing for?",
            "Our learning programs include test prep courses, continuing education, and professional development workshops. What type of training interests you?",
        ],
    },
    TopicRule {
        topic: Topic::Pricing,
        triggers: &["price", "cost", "fee"],
        replies: &[
            "Exam fees vary by certification type. For example, Series 7 is $300, MCAT is $320, and CPA sections are $208 each. Would you like specific pricing for any exam?",
            "Our pricing is competitive and transparent. We also offer package deals that include prep courses. What exams are you considering?",
        ],
    },
    TopicRule {
        topic: Topic::Location,
        triggers: &["location", "address", "where"],
        replies: &[
            "We're located at 123 Professional Drive, Education City, EC 12345. We have free parking and are fully accessible. Need directions?",
            "Our facility is conveniently located with easy access and ample parking. We're also accessible by public transportation with bus routes 15, 22, and 45.",
        ],
    },
    TopicRule {
        topic: Topic::Hours,
        triggers: &["hours", "open", "time"],
        replies: &[
            "We're open Monday-Friday 8AM-8PM and Saturday 9AM-5PM. Sunday we're closed. You can schedule exams during any of these hours!",
        ],
    },
    TopicRule {
        topic: Topic::Contact,
        triggers: &["contact", "phone", "email"],
        replies: &[
            "You can reach us at (555) 123-EXAM or email info@theprospercenter.com. We typically respond within a few hours during business hours.",
        ],
    },
];

pub static DEFAULT_REPLIES: &[&str] = &[
    "I'd be happy to help! Could you tell me more about what you're looking for? I can assist with exam scheduling, class information, pricing, or general questions.",
    "That's a great question! For detailed information, I recommend contacting our team at (555) 123-EXAM or visiting our contact page. Is there anything specific I can help you with right now?",
    "I want to make sure I give you the most accurate information. Could you clarify what you're looking for? I'm here to help with exams, classes, scheduling, and more!",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_replies() {
        assert!(!DEFAULT_REPLIES.is_empty());
        for rule in TOPIC_RULES {
            assert!(!rule.replies.is_empty(), "{} has no replies", rule.topic);
            assert!(!rule.triggers.is_empty(), "{} has no triggers", rule.topic);
            assert!(rule.replies.iter().all(|r| !r.is_empty()));
            assert!(rule.triggers.iter().all(|t| *t == t.to_lowercase()));
        }
    }

    #[test]
    fn default_is_not_a_keyword_rule() {
        assert!(TOPIC_RULES.iter().all(|r| r.topic != Topic::Default));
    }
}
