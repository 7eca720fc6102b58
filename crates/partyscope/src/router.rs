use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::{filter_parties, interpolate, normalize, BrowseState, Catalog, RatingAxis, Segment};
use crate::comparison::views::{ComparisonView, PositionLookupView};
use crate::comparison::{categories, filter_issues, resolve_position, IssueQuery};
use crate::error::AppError;
use crate::render;
use crate::report::{PartyCardView, ReportLookup};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NormalizeParams {
    #[serde(default)]
    label: String,
}

#[derive(Debug, Serialize)]
struct NarrativeView<'a> {
    party_id: &'a str,
    axis: RatingAxis,
    axis_label: &'static str,
    segments: Vec<Segment<'a>>,
}

/// Pages and the read-only JSON API over one catalog.
pub fn catalog_router(catalog: Arc<Catalog>) -> Router {
    let router = Router::new()
        .route("/", get(home_page))
        .route("/reports", get(reports_index_page))
        .route("/reports/:party_id", get(party_report_page))
        .route("/compare", get(comparison_page))
        .route("/api/v1/parties", get(list_parties))
        .route("/api/v1/parties/:party_id", get(party_report))
        .route("/api/v1/parties/:party_id/narratives/:axis", get(party_narrative))
        .route("/api/v1/issues", get(list_issues))
        .route("/api/v1/issues/categories", get(issue_categories))
        .route("/api/v1/positions/:party_id/:issue_id", get(position_lookup))
        .route("/api/v1/compare", get(comparison))
        .route("/api/v1/ratings/normalize", get(normalize_rating));

    #[cfg(feature = "design-preview")]
    let router = router.route("/design-preview", get(design_preview_page));

    router.with_state(catalog)
}

pub(crate) async fn home_page(
    State(catalog): State<Arc<Catalog>>,
    Query(state): Query<BrowseState>,
) -> Response {
    let status = match state.selected() {
        Some(party_id) if catalog.party(party_id).is_none() => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Html(render::home_page(&catalog, &state))).into_response()
}

pub(crate) async fn reports_index_page(State(catalog): State<Arc<Catalog>>) -> Html<String> {
    Html(render::reports_index_page(&catalog))
}

pub(crate) async fn party_report_page(
    State(catalog): State<Arc<Catalog>>,
    Path(party_id): Path<String>,
) -> Response {
    match ReportLookup::find(&catalog, &party_id) {
        ReportLookup::Found(report) => Html(render::party_report_page(&report)).into_response(),
        ReportLookup::NotFound { party_id } => (
            StatusCode::NOT_FOUND,
            Html(render::not_found_page(&party_id)),
        )
            .into_response(),
    }
}

pub(crate) async fn comparison_page(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<IssueQuery>,
) -> Html<String> {
    Html(render::comparison_page(&ComparisonView::build(&catalog, &query)))
}

#[cfg(feature = "design-preview")]
pub(crate) async fn design_preview_page() -> Html<String> {
    Html(render::design_preview_page())
}

pub(crate) async fn list_parties(
    State(catalog): State<Arc<Catalog>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let cards: Vec<PartyCardView<'_>> = filter_parties(catalog.parties(), &params.q)
        .into_iter()
        .map(PartyCardView::new)
        .collect();
    Json(cards).into_response()
}

pub(crate) async fn party_report(
    State(catalog): State<Arc<Catalog>>,
    Path(party_id): Path<String>,
) -> Result<Response, AppError> {
    match ReportLookup::find(&catalog, &party_id) {
        ReportLookup::Found(report) => Ok(Json(report).into_response()),
        ReportLookup::NotFound { party_id } => Err(AppError::PartyNotFound(party_id)),
    }
}

pub(crate) async fn party_narrative(
    State(catalog): State<Arc<Catalog>>,
    Path((party_id, axis)): Path<(String, RatingAxis)>,
) -> Result<Response, AppError> {
    let party = catalog
        .party(&party_id)
        .ok_or_else(|| AppError::PartyNotFound(party_id.clone()))?;
    Ok(Json(NarrativeView {
        party_id: &party.id,
        axis,
        axis_label: axis.label(),
        segments: interpolate(party.details(axis), &party.citations),
    })
    .into_response())
}

pub(crate) async fn list_issues(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<IssueQuery>,
) -> Response {
    Json(filter_issues(catalog.issues(), &query)).into_response()
}

pub(crate) async fn issue_categories(State(catalog): State<Arc<Catalog>>) -> Response {
    Json(categories(catalog.issues())).into_response()
}

pub(crate) async fn position_lookup(
    State(catalog): State<Arc<Catalog>>,
    Path((party_id, issue_id)): Path<(String, String)>,
) -> Response {
    let position = resolve_position(catalog.positions(), &party_id, &issue_id);
    Json(PositionLookupView::new(&party_id, &issue_id, position)).into_response()
}

pub(crate) async fn comparison(
    State(catalog): State<Arc<Catalog>>,
    Query(query): Query<IssueQuery>,
) -> Response {
    Json(ComparisonView::build(&catalog, &query)).into_response()
}

pub(crate) async fn normalize_rating(Query(params): Query<NormalizeParams>) -> Response {
    let normalized = normalize(&params.label);
    Json(json!({
        "label": params.label,
        "score": normalized.score,
        "tier": normalized.tier,
    }))
    .into_response()
}
