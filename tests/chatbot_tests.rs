use prosper_center::rules::{DEFAULT_REPLIES, TOPIC_RULES, Topic};
use prosper_center::services::chatbot::{ResponseSelector, detect_topic};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn replies(topic: Topic) -> &'static [&'static str] {
    ResponseSelector::new().replies(topic)
}

#[test]
fn test_detect_topic() {
    assert_eq!(detect_topic("Hello there"), Topic::Greeting);
    assert_eq!(detect_topic("Do you offer certification?"), Topic::Exams);
    assert_eq!(detect_topic("I need an appointment"), Topic::Schedule);
    assert_eq!(detect_topic("Any prep course?"), Topic::Classes);
    assert_eq!(detect_topic("What does it cost?"), Topic::Pricing);
    assert_eq!(detect_topic("Where are you?"), Topic::Location);
    assert_eq!(detect_topic("When do you open?"), Topic::Hours);
    assert_eq!(detect_topic("Your phone number please"), Topic::Contact);
    assert_eq!(detect_topic("random words"), Topic::Default);
}

#[test]
fn test_scenario_exams_question() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(7);
    let selection = selector.select("What exams do you offer?", &mut rng).unwrap();

    assert_eq!(selection.topic, Topic::Exams);
    assert_eq!(replies(Topic::Exams).len(), 2);
    assert!(replies(Topic::Exams).contains(&selection.reply));
}

#[test]
fn test_single_topic_replies_come_from_that_topic() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(99);
    let cases = [
        ("hey", Topic::Greeting),
        ("certification", Topic::Exams),
        ("book", Topic::Schedule),
        ("training", Topic::Classes),
        ("fee", Topic::Pricing),
        ("address", Topic::Location),
        ("open", Topic::Hours),
        ("email", Topic::Contact),
    ];
    for (input, topic) in cases {
        for _ in 0..20 {
            let selection = selector.select(input, &mut rng).unwrap();
            assert_eq!(selection.topic, topic, "input {input:?}");
            assert!(replies(topic).contains(&selection.reply));
            assert!(!selection.reply.is_empty());
        }
    }
}

#[test]
fn test_first_match_wins() {
    // greeting beats exams
    assert_eq!(detect_topic("hello, what exams are there"), Topic::Greeting);
    // exams beats schedule
    assert_eq!(detect_topic("schedule my exam"), Topic::Exams);
    // schedule beats classes
    assert_eq!(detect_topic("book a class"), Topic::Schedule);
    // classes beats pricing
    assert_eq!(detect_topic("course price"), Topic::Classes);
    // pricing beats location
    assert_eq!(detect_topic("cost of parking, address?"), Topic::Pricing);
    // location beats hours
    assert_eq!(detect_topic("where and what hours"), Topic::Location);
    // hours beats contact
    assert_eq!(detect_topic("open late? email me"), Topic::Hours);
}

#[test]
fn test_substring_matching_is_literal() {
    // "this" contains "hi"
    assert_eq!(detect_topic("Is this thing on"), Topic::Greeting);
    assert_eq!(detect_topic("LOCATION"), Topic::Location);
}

#[test]
fn test_unmatched_input_falls_back_to_default() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(3);
    for input in ["blah", "42", "¿qué?", "Tell me a joke"] {
        let selection = selector.select(input, &mut rng).unwrap();
        assert_eq!(selection.topic, Topic::Default, "input {input:?}");
        assert!(DEFAULT_REPLIES.contains(&selection.reply));
    }
}

#[test]
fn test_seeded_selection_is_reproducible() {
    let selector = ResponseSelector::new();
    let inputs = ["hi", "exam", "random", "class", "where", "nothing here"];

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        inputs
            .iter()
            .map(|i| selector.select(i, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(2024), run(2024));
}

#[test]
fn test_all_replies_eventually_chosen() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(selector.select("hello", &mut rng).unwrap().reply);
    }
    let greeting = TOPIC_RULES.iter().find(|r| r.topic == Topic::Greeting).unwrap();
    assert_eq!(seen.len(), greeting.replies.len());
}

#[test]
fn test_blank_input_is_a_no_op() {
    let selector = ResponseSelector::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(selector.select("", &mut rng).is_none());
    assert!(selector.select("    ", &mut rng).is_none());
}
