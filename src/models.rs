use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One check-in account as supplied by configuration. Fields are trimmed
/// during resolution and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "deviceId", default)]
    pub device_id: String,
    #[serde(default)]
    pub authorization: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Check,
    Sign,
    Bark,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Check => "check",
            Action::Sign => "sign",
            Action::Bark => "bark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckinStatus {
    Success,
    Skipped,
    Waiting,
    Error,
}

impl CheckinStatus {
    pub fn icon(self) -> &'static str {
        match self {
            CheckinStatus::Success => "✅",
            CheckinStatus::Skipped => "👌",
            CheckinStatus::Waiting => "⏳",
            CheckinStatus::Error => "❌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckinStatus::Success => "signed",
            CheckinStatus::Skipped => "already signed",
            CheckinStatus::Waiting => "pending",
            CheckinStatus::Error => "failed",
        }
    }
}

/// Diagnostic step recorded while evaluating one account. Surfacing only,
/// never control flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinResult {
    pub status: CheckinStatus,
    pub summary: String,
    pub logs: Vec<LogEntry>,
    pub consecutive_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountReport {
    pub name: String,
    #[serde(flatten)]
    pub result: CheckinResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub timestamp: String,
    pub action: Action,
    pub results: Vec<AccountReport>,
}

impl RunReport {
    /// True when every account landed in a harmless state.
    pub fn all_ok(&self) -> bool {
        self.results.iter().all(|entry| {
            matches!(
                entry.result.status,
                CheckinStatus::Success | CheckinStatus::Skipped
            )
        })
    }
}

/// Envelope the check-in service wraps every response in.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Value,
}

/// Payload of a successful status response.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignStatus {
    #[serde(default)]
    pub consecutive_days: u32,
    #[serde(default)]
    pub current_sign_status: i64,
}

impl SignStatus {
    pub fn completed(self) -> bool {
        self.current_sign_status == 1
    }
}
