pub mod chatbot;
pub mod exam_finder;
pub mod metrics_manager;
pub mod money;
pub mod notifications;
pub mod pricing;
pub mod session_manager;
