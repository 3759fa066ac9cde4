use crate::calendar;
use crate::errors::AppError;
use crate::models::{Action, RunReport};
use crate::runner;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Local;
use serde::Deserialize;

pub async fn index() -> Html<String> {
    let date = Local::now().format("%Y-%m-%d %A").to_string();
    Html(render_index(&date))
}

#[derive(Debug, Deserialize)]
pub struct SignQuery {
    action: Option<String>,
}

/// Entry point for check / sign / bark runs. `action` defaults to the
/// side-effect-free `check` when omitted.
pub async fn sign(
    State(state): State<AppState>,
    Query(query): Query<SignQuery>,
) -> Result<Json<RunReport>, AppError> {
    let action = match query.action.as_deref() {
        None | Some("check") => Action::Check,
        Some("sign") => Action::Sign,
        Some("bark") => Action::Bark,
        Some(_) => {
            return Err(AppError::bad_request(
                "action must be 'check', 'sign' or 'bark'",
            ))
        }
    };

    let report = runner::run(&state, action).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarQuery {
    #[serde(default)]
    consecutive_days: u32,
    #[serde(default)]
    signed_today: bool,
}

pub async fn get_calendar(Query(query): Query<CalendarQuery>) -> Json<calendar::MonthView> {
    Json(calendar::month_view(query.consecutive_days, query.signed_today))
}
