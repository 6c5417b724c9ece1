use crate::catalog::{EXAMS, ExamListing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareerGoal {
    Finance,
    Medical,
    Accounting,
    Technology,
}

impl CareerGoal {
    fn category(&self) -> &'static str {
        match self {
            CareerGoal::Finance => "Finance",
            CareerGoal::Medical => "Medical",
            CareerGoal::Accounting => "Accounting",
            CareerGoal::Technology => "IT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "finance" => Some(CareerGoal::Finance),
            "medical" => Some(CareerGoal::Medical),
            "accounting" => Some(CareerGoal::Accounting),
            "technology" => Some(CareerGoal::Technology),
            _ => None,
        }
    }
}

/// Case-insensitive search over name, full name and tags.
/// A missing or `all` category matches every listing.
pub fn search(term: Option<&str>, category: Option<&str>) -> Vec<&'static ExamListing> {
    let term = term.unwrap_or("").trim().to_lowercase();
    let category = category
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty() && c != "all");

    EXAMS
        .iter()
        .filter(|exam| {
            exam.name.to_lowercase().contains(&term)
                || exam.full_name.to_lowercase().contains(&term)
                || exam.tags.iter().any(|t| t.to_lowercase().contains(&term))
        })
        .filter(|exam| match &category {
            Some(c) => exam.category.to_lowercase() == *c,
            None => true,
        })
        .collect()
}

/// Listings for the goal's category, most popular first.
pub fn recommend(goal: CareerGoal) -> Vec<&'static ExamListing> {
    let mut picks: Vec<_> = EXAMS
        .iter()
        .filter(|exam| exam.category == goal.category())
        .collect();
    picks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    picks
}
