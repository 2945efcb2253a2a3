use std::time::Instant;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, trace, warn};
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Agent;

use crate::config::{DirectLoginSettings, ObpConfig};
use crate::models::{Account, Bank};
use crate::source::{IdentitySource, SourceError};
use crate::types::BankId;

/// Banks beyond this many are ignored.
const BANK_LIMIT: usize = 10;
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
struct DirectLoginToken {
    token: String
}

#[derive(Debug, Deserialize)]
struct BanksPayload {
    banks: Vec<ObpBank>
}

#[derive(Debug, Deserialize)]
struct ObpBank {
    id: String,
    full_name: Option<String>,
    short_name: Option<String>
}

/// Account fields are kept as raw JSON so a number or other scalar in one item
/// does not reject the whole payload.
#[derive(Debug, Deserialize)]
struct ObpAccount {
    id: Option<Value>,
    label: Option<Value>,
    account_label: Option<Value>,
    account_type: Option<Value>
}

fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string())
    }
}

pub(super) fn parse_banks(body: &str) -> Result<Vec<Bank>, SourceError> {
    let payload: BanksPayload = serde_json::from_str(body)?;

    Ok(payload.banks.into_iter()
        .take(BANK_LIMIT)
        .map(|bank| Bank {
            bank_name: bank.full_name.or(bank.short_name).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            bank_id: bank.id
        })
        .collect())
}

/// The public accounts endpoint answers with either a bare list or an object wrapping one.
/// Items that are not JSON objects are skipped with a warning.
pub(super) fn parse_accounts(body: &str, bank_id: &str) -> Result<Vec<Account>, SourceError> {
    let items = match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => items,
        Value::Object(mut payload) => match payload.remove("accounts") {
            Some(Value::Array(items)) => items,
            None => Vec::new(),
            Some(other) => {
                warn!("Ignoring non-list accounts field for bank [{bank_id}]: {other}");
                Vec::new()
            }
        },
        other => {
            warn!("Ignoring unexpected accounts payload for bank [{bank_id}]: {other}");
            Vec::new()
        }
    };

    Ok(items.into_iter()
        .filter_map(|item| parse_account(item, bank_id))
        .collect())
}

fn parse_account(item: Value, bank_id: &str) -> Option<Account> {
    let account: ObpAccount = match serde_json::from_value(item) {
        Ok(account) => account,
        Err(error) => {
            warn!("Skipping malformed account for bank [{bank_id}]: {error}");
            return None;
        }
    };

    let account_id = text(account.id).unwrap_or_else(|| {
        warn!("Account without an id at bank [{bank_id}], falling back to [{NOT_AVAILABLE}]");
        NOT_AVAILABLE.to_string()
    });

    Some(Account {
        account_id,
        bank_id: bank_id.to_string(),
        account_label: text(account.label).or_else(|| text(account.account_label)).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        account_type: text(account.account_type).unwrap_or_else(|| NOT_AVAILABLE.to_string())
    })
}

pub(super) fn direct_login_header(settings: &DirectLoginSettings) -> String {
    format!(
        "DirectLogin username=\"{}\", password=\"{}\", consumer_key=\"{}\"",
        settings.username, settings.password, settings.consumer_key
    )
}

/// Open Bank Project client authenticated through DirectLogin.
pub struct ObpClient {
    agent: Agent,
    settings: DirectLoginSettings,
    token: String
}

impl ObpClient {
    /// Validates the credentials and performs the DirectLogin handshake.
    ///
    /// # Errors
    /// Returns `SourceError` if credentials are missing, the endpoint is unreachable,
    /// or the login does not answer `201 Created`.
    pub fn connect(config: &ObpConfig) -> Result<Self, SourceError> {
        let settings = config.require_direct_login()?;

        let tls_config = TlsConfig::builder()
            .provider(TlsProvider::NativeTls)
            .build();

        let agent = Agent::from(Agent::config_builder()
            .timeout_global(Some(settings.timeout))
            .tls_config(tls_config)
            .build());

        let token = authenticate(&agent, &settings)?;

        Ok(Self { agent, settings, token })
    }

    fn get(&self, path: &str) -> Result<String, SourceError> {
        let url = self.settings.api_url(path);
        let start = Instant::now();

        let mut response = self.agent.get(&url)
            .header("Authorization", format!("DirectLogin token=\"{}\"", self.token))
            .header("Accept", "application/json")
            .call()
            .map_err(|error| match error {
                ureq::Error::StatusCode(status) => SourceError::UnexpectedStatus { url: url.clone(), status },
                other => SourceError::Http(other)
            })?;

        let status = response.status().as_u16();

        if status != 200 {
            return Err(SourceError::UnexpectedStatus { url, status });
        }

        let body = response.body_mut().read_to_string()?;

        debug!("[{url}] answered in {:?}", start.elapsed());
        trace!("{body}");

        Ok(body)
    }
}

fn authenticate(agent: &Agent, settings: &DirectLoginSettings) -> Result<String, SourceError> {
    info!("Authenticating against [{}]", settings.direct_login_endpoint);

    let mut response = agent.post(&settings.direct_login_endpoint)
        .header("Authorization", direct_login_header(settings))
        .header("Accept", "application/json")
        .send_empty()
        .map_err(|error| match error {
            ureq::Error::StatusCode(status) => SourceError::AuthenticationFailed { status },
            other => SourceError::Http(other)
        })?;

    let status = response.status().as_u16();

    if status != 201 {
        return Err(SourceError::AuthenticationFailed { status });
    }

    let login: DirectLoginToken = response.body_mut().read_json()?;

    info!("Authentication successful");

    Ok(login.token)
}

impl IdentitySource for ObpClient {
    fn fetch_banks(&self) -> Result<Vec<Bank>, SourceError> {
        parse_banks(&self.get("banks")?)
    }

    fn fetch_accounts(&self, bank_ids: &[BankId]) -> Result<Vec<Account>, SourceError> {
        let mut accounts = Vec::new();

        for bank_id in bank_ids {
            let body = match self.get(&format!("banks/{bank_id}/accounts/public")) {
                Ok(body) => body,
                Err(error) => {
                    warn!("Skipping bank [{bank_id}]: {error}");
                    continue;
                }
            };

            let found = parse_accounts(&body, bank_id)?;
            info!("Bank [{bank_id}]: found [{}] accounts", found.len());
            accounts.extend(found);
        }

        Ok(accounts)
    }
}
