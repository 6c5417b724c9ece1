use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::{
    catalog::{ExamListing, Package, PricedItem},
    error::AppError,
    message::{ExamSearchQuery, RecommendationQuery},
    services::{
        exam_finder::{self, CareerGoal},
        pricing::{Quote, QuoteSelection},
    },
    state::SharedState,
};

#[derive(Serialize)]
pub struct CatalogResponse {
    pub packages: &'static [Package],
    pub exams: &'static [PricedItem],
    pub classes: &'static [PricedItem],
}

pub async fn catalog_handler(State(state): State<SharedState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        packages: state.catalog.packages(),
        exams: state.catalog.exams(),
        classes: state.catalog.classes(),
    })
}

pub async fn quote_handler(
    State(state): State<SharedState>,
    Json(selection): Json<QuoteSelection>,
) -> Result<Json<Quote>, AppError> {
    let result = state.catalog.quote(&selection);
    state.metrics.record_quote(result.is_ok()).await;
    Ok(Json(result?))
}

pub async fn exam_search_handler(
    Query(query): Query<ExamSearchQuery>,
) -> Json<Vec<&'static ExamListing>> {
    Json(exam_finder::search(
        query.search.as_deref(),
        query.category.as_deref(),
    ))
}

/// Unknown goals match no category and give an empty list.
pub async fn recommendation_handler(
    Query(query): Query<RecommendationQuery>,
) -> Json<Vec<&'static ExamListing>> {
    match CareerGoal::parse(&query.goal) {
        Some(goal) => Json(exam_finder::recommend(goal)),
        None => {
            tracing::debug!(goal = %query.goal, "unknown career goal");
            Json(Vec::new())
        }
    }
}
