use crate::checkin::{self, Mode};
use crate::client::SignClient;
use crate::errors::AppError;
use crate::models::{AccountReport, Action, CheckinResult, CheckinStatus, RunReport};
use crate::notify;
use crate::state::AppState;
use chrono::Local;
use tracing::error;

/// Fan out the check-in evaluation over every configured account, join in
/// configured order, and push a notification when the action asks for one.
pub async fn run(state: &AppState, action: Action) -> Result<RunReport, AppError> {
    let accounts = &state.config.accounts;
    if accounts.is_empty() {
        return Err(AppError::no_accounts());
    }

    let mode = match action {
        Action::Sign => Mode::SignIfNeeded,
        Action::Check | Action::Bark => Mode::CheckOnly,
    };

    let mut handles = Vec::with_capacity(accounts.len());
    for account in accounts.iter().cloned() {
        let client = SignClient::new(
            state.http.clone(),
            state.headers.clone(),
            &state.config.api_base,
            &account,
        );
        handles.push((
            account.name.clone(),
            tokio::spawn(async move { checkin::evaluate(&account.name, &client, mode).await }),
        ));
    }

    // Join in input order; a panicked task only poisons its own slot.
    let mut results = Vec::with_capacity(handles.len());
    for (name, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(err) => {
                error!("[{name}] evaluation task failed: {err}");
                CheckinResult {
                    status: CheckinStatus::Error,
                    summary: "internal failure".to_string(),
                    logs: Vec::new(),
                    consecutive_days: 0,
                }
            }
        };
        results.push(AccountReport { name, result });
    }

    let report = RunReport {
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        action,
        results,
    };

    if matches!(action, Action::Sign | Action::Bark) {
        if let Some(bark) = &state.config.bark {
            let quote = notify::fetch_quote(&state.http, &state.config.quote_url).await;
            let notification = notify::format_report(&report, &quote);
            notify::push(&state.http, bark, &notification).await;
        }
    }

    Ok(report)
}
