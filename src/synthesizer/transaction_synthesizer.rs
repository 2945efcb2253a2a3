use chrono::{DateTime, Datelike, TimeDelta, Timelike, Utc, Weekday};
use rand::Rng;
use rust_decimal::Decimal;
use std::ops::Range;
use tracing::debug;

use crate::config::GenerationPlan;
use crate::models::{AccountReference, TransactionRecord, TransactionType};
use crate::synthesizer::names;
use crate::types::{from_cents, Currency, DataSource, TransactionId};

const CREDIT_CENTS: Range<i64> = 50_000..500_000;
const DEBIT_CENTS: Range<i64> = 500..50_000;

/// Formats the deterministic identifier of the `sequence`-th transaction of an account.
pub fn transaction_id(account_id: &str, sequence: usize) -> TransactionId {
    format!("synth_{account_id}_{sequence:04}")
}

/// The generated sequence for one account, together with the opening balance it
/// was replayed from. The opening balance is working state and is never written out.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountHistory {
    pub account: AccountReference,
    pub opening_balance: Decimal,
    pub transactions: Vec<TransactionRecord>
}

impl AccountHistory {
    pub fn closing_balance(&self) -> Decimal {
        self.transactions.last()
            .map(|transaction| transaction.balance_after)
            .unwrap_or(self.opening_balance)
    }
}

/// Balance state owned by a single account's generation run.
struct RunningBalance(Decimal);

impl RunningBalance {
    /// Applies a magnitude with the polarity of `transaction_type` and returns the signed amount.
    fn apply(&mut self, transaction_type: TransactionType, magnitude: Decimal) -> Decimal {
        let amount = if transaction_type.is_debit() { -magnitude } else { magnitude };
        self.0 += amount;
        amount
    }

    fn current(&self) -> Decimal {
        self.0.round_dp(2)
    }
}

struct Narrative {
    description: String,
    merchant: Option<String>,
    counterparty_name: Option<String>
}

impl Narrative {
    fn for_type<R: Rng>(transaction_type: TransactionType, rng: &mut R) -> Self {
        match transaction_type {
            TransactionType::PosPurchase => {
                let merchant = names::merchant(rng);
                Self {
                    description: format!("{transaction_type} at {merchant}"),
                    merchant: Some(merchant.to_string()),
                    counterparty_name: None
                }
            }
            TransactionType::OnlineTransfer => {
                let counterparty = names::person_name(rng);
                Self {
                    description: format!("{transaction_type} to {counterparty}"),
                    merchant: None,
                    counterparty_name: Some(counterparty)
                }
            }
            TransactionType::SalaryDeposit => Self {
                description: format!("{transaction_type} from {}", names::company_name(rng)),
                merchant: None,
                counterparty_name: None
            },
            _ => Self {
                description: transaction_type.label().to_string(),
                merchant: None,
                counterparty_name: None
            }
        }
    }
}

/// Produces balance-consistent synthetic transaction sequences.
///
/// The synthesizer itself is stateless; every call to [`TransactionSynthesizer::synthesize`]
/// owns its own running balance and draws only from the RNG it is handed.
#[derive(Debug, Clone)]
pub struct TransactionSynthesizer {
    plan: GenerationPlan
}

impl TransactionSynthesizer {
    pub fn new(plan: GenerationPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &GenerationPlan {
        &self.plan
    }

    /// Generates exactly `transactions_per_account` records for `account`.
    ///
    /// Dates fall within the lookback window ending at `now`, and `now` is also
    /// stamped as `generated_at` on every record.
    pub fn synthesize<R: Rng>(&self, account: &AccountReference, now: DateTime<Utc>, rng: &mut R) -> AccountHistory {
        let opening_balance = self.plan.opening_balance.sample(rng);
        let mut balance = RunningBalance(opening_balance);

        let transactions: Vec<_> = (0..self.plan.transactions_per_account)
            .map(|sequence| self.next_transaction(account, sequence, now, &mut balance, rng))
            .collect();

        debug!("Generated [{}] transactions for account [{}] at bank [{}]", transactions.len(), account.account_id, account.bank_id);

        AccountHistory {
            account: account.clone(),
            opening_balance,
            transactions
        }
    }

    fn next_transaction<R: Rng>(&self, account: &AccountReference, sequence: usize, now: DateTime<Utc>, balance: &mut RunningBalance, rng: &mut R) -> TransactionRecord {
        let offset_days = rng.gen_range(0..=self.plan.lookback_days);
        let transaction_date = now - TimeDelta::days(offset_days);

        let transaction_type = TransactionType::ALL[rng.gen_range(0..TransactionType::ALL.len())];
        let cents = if transaction_type.is_credit() { CREDIT_CENTS } else { DEBIT_CENTS };
        let amount = balance.apply(transaction_type, from_cents(rng.gen_range(cents)));

        let narrative = Narrative::for_type(transaction_type, rng);
        let currency = Currency::ALL[rng.gen_range(0..Currency::ALL.len())];

        TransactionRecord {
            transaction_id: transaction_id(&account.account_id, sequence),
            bank_id: account.bank_id.clone(),
            account_id: account.account_id.clone(),
            amount,
            currency,
            transaction_type,
            description: narrative.description,
            merchant: narrative.merchant,
            transaction_date,
            transaction_hour: transaction_date.hour(),
            day_of_week: transaction_date.format("%A").to_string(),
            is_weekend: matches!(transaction_date.weekday(), Weekday::Sat | Weekday::Sun),
            balance_after: balance.current(),
            counterparty_name: narrative.counterparty_name,
            data_source: DataSource::Synthetic,
            generated_at: now
        }
    }
}
