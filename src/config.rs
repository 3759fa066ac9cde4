use crate::models::Account;
use std::env;
use std::time::Duration;
use tracing::error;

pub const DEFAULT_API_BASE: &str = "https://cn-cbu-gateway.ninebot.com";
pub const DEFAULT_BARK_BASE: &str = "https://api.day.app";
pub const DEFAULT_QUOTE_URL: &str = "https://v1.hitokoto.cn";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const PUSH_TIMEOUT: Duration = Duration::from_secs(5);
pub const QUOTE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct BarkConfig {
    pub key: String,
    pub base_url: String,
}

/// Immutable process configuration, read from the environment once at
/// startup and shared behind the application state.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub accounts: Vec<Account>,
    pub api_base: String,
    pub bark: Option<BarkConfig>,
    pub quote_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let accounts = resolve_accounts(
            env::var("NINEBOT_ACCOUNTS").ok().as_deref(),
            env::var("NINEBOT_NAME").ok().as_deref(),
            env::var("NINEBOT_DEVICE_ID").ok().as_deref(),
            env::var("NINEBOT_AUTHORIZATION").ok().as_deref(),
        );

        let bark = env::var("BARK_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(|key| BarkConfig {
                key,
                base_url: env::var("BARK_URL")
                    .unwrap_or_else(|_| DEFAULT_BARK_BASE.to_string())
                    .trim_end_matches('/')
                    .to_string(),
            });

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(8080),
            accounts,
            api_base: env::var("NINEBOT_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            bark,
            quote_url: env::var("QUOTE_URL").unwrap_or_else(|_| DEFAULT_QUOTE_URL.to_string()),
        }
    }
}

/// Resolve the account list: a JSON list wins over the single-account
/// triple; a malformed list counts as zero accounts, not a partial one.
pub fn resolve_accounts(
    accounts_json: Option<&str>,
    name: Option<&str>,
    device_id: Option<&str>,
    authorization: Option<&str>,
) -> Vec<Account> {
    if let Some(raw) = accounts_json.filter(|raw| !raw.trim().is_empty()) {
        return match serde_json::from_str::<Vec<Account>>(raw) {
            Ok(accounts) => accounts.into_iter().map(normalize).collect(),
            Err(err) => {
                error!("failed to parse NINEBOT_ACCOUNTS: {err}");
                Vec::new()
            }
        };
    }

    if let Some(device_id) = device_id.filter(|id| !id.trim().is_empty()) {
        return vec![normalize(Account {
            name: name.unwrap_or("default account").to_string(),
            device_id: device_id.to_string(),
            authorization: authorization.unwrap_or_default().to_string(),
        })];
    }

    Vec::new()
}

// .env copy-paste likes to smuggle in stray whitespace and newlines.
fn normalize(account: Account) -> Account {
    Account {
        name: account.name.trim().to_string(),
        device_id: account.device_id.trim().to_string(),
        authorization: account.authorization.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_account_list_from_json() {
        let raw = r#"[
            {"name": "alice", "deviceId": " dev-1 ", "authorization": "Bearer aaa\n"},
            {"name": "bob", "deviceId": "dev-2", "authorization": "Bearer bbb"}
        ]"#;
        let accounts = resolve_accounts(Some(raw), None, None, None);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name, "alice");
        assert_eq!(accounts[0].device_id, "dev-1");
        assert_eq!(accounts[0].authorization, "Bearer aaa");
        assert_eq!(accounts[1].name, "bob");
    }

    #[test]
    fn json_list_wins_over_single_account() {
        let raw = r#"[{"name": "alice", "deviceId": "dev-1", "authorization": "a"}]"#;
        let accounts = resolve_accounts(Some(raw), Some("bob"), Some("dev-2"), Some("b"));
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "alice");
    }

    #[test]
    fn resolves_single_account_from_triple() {
        let accounts = resolve_accounts(None, Some("bob"), Some(" dev-9 "), Some(" token "));
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].name, "bob");
        assert_eq!(accounts[0].device_id, "dev-9");
        assert_eq!(accounts[0].authorization, "token");
    }

    #[test]
    fn single_account_gets_default_name() {
        let accounts = resolve_accounts(None, None, Some("dev-9"), Some("token"));
        assert_eq!(accounts[0].name, "default account");
    }

    #[test]
    fn malformed_json_yields_no_accounts() {
        let accounts = resolve_accounts(Some("{not json"), None, None, None);
        assert!(accounts.is_empty());
    }

    #[test]
    fn nothing_configured_yields_no_accounts() {
        assert!(resolve_accounts(None, None, None, None).is_empty());
        assert!(resolve_accounts(None, Some("bob"), None, None).is_empty());
    }
}
