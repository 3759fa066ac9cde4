use crate::client::SignClient;
use crate::models::{CheckinResult, CheckinStatus, LogEntry, SignStatus};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sign in when today is still open.
    SignIfNeeded,
    /// Report status only; never touch the sign endpoint.
    CheckOnly,
}

/// Per-account diagnostic trail, mirrored to the process log.
struct Logbook {
    account: String,
    entries: Vec<LogEntry>,
}

impl Logbook {
    fn new(account: &str) -> Self {
        Self {
            account: account.to_string(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        info!("[{}] {name}: {value}", self.account);
        self.entries.push(LogEntry {
            name: name.to_string(),
            value,
        });
    }

    fn finish(
        self,
        status: CheckinStatus,
        summary: impl Into<String>,
        consecutive_days: u32,
    ) -> CheckinResult {
        CheckinResult {
            status,
            summary: summary.into(),
            logs: self.entries,
            consecutive_days,
        }
    }
}

/// Run the check-in decision for one account: skip when already signed,
/// sign when allowed to, otherwise report what is pending. Remote failures
/// land in the result, never in a returned error.
pub async fn evaluate(name: &str, client: &SignClient, mode: Mode) -> CheckinResult {
    let mut logs = Logbook::new(name);

    let status = match client.status().await {
        Ok(response) => response,
        Err(err) => {
            logs.push("status request failed", err.detail());
            return logs.finish(CheckinStatus::Error, "interface request failed", 0);
        }
    };

    if status.code != 0 {
        logs.push(
            "status rejected",
            format!("code={}, msg={}", status.code, status.msg),
        );
        return logs.finish(
            CheckinStatus::Error,
            format!("token invalid: {}", status.msg),
            0,
        );
    }

    let sign_status: SignStatus = serde_json::from_value(status.data).unwrap_or_default();
    let consecutive_days = sign_status.consecutive_days;
    logs.push("streak", format!("{consecutive_days} days"));

    if sign_status.completed() {
        logs.push("status", "already signed today");
        return logs.finish(CheckinStatus::Skipped, "already signed today", consecutive_days);
    }

    if mode == Mode::CheckOnly {
        logs.push("status", "not signed yet");
        return logs.finish(CheckinStatus::Waiting, "awaiting sign-in", consecutive_days);
    }

    logs.push("action", "signing in");
    match client.sign().await {
        Ok(response) if response.code == 0 => {
            logs.push("result", "sign-in succeeded");
            // Optimistic display increment; the server is not re-queried,
            // so a diverging remote counter shows up on the next run.
            logs.finish(CheckinStatus::Success, "signed successfully", consecutive_days + 1)
        }
        Ok(response) => {
            logs.push("result", format!("rejected: {}", response.msg));
            let summary = if response.msg.is_empty() {
                "sign failed".to_string()
            } else {
                response.msg
            };
            logs.finish(CheckinStatus::Error, summary, consecutive_days)
        }
        Err(err) => {
            // A sign call that dies in transit is indistinguishable from a
            // crashed run; report it like one instead of a service rejection.
            logs.push("sign request failed", err.detail());
            logs.finish(CheckinStatus::Error, "internal failure", 0)
        }
    }
}
