mod account;
mod bank;
mod dataset;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use account::{Account, AccountRecord, AccountReference};
pub use bank::{Bank, BankRecord};
pub use dataset::{Dataset, ACCOUNTS, BANKS, TRANSACTIONS};
pub use transaction::TransactionRecord;

/// A flat record that maps onto one CSV row.
///
/// `COLUMNS` lists the serialized field names in declaration order, so a header can
/// be written even when there are no rows.
pub trait TabularRecord: Serialize {
    const COLUMNS: &'static [&'static str];
}

/// Category of a synthetic transaction.
///
/// The category alone decides whether a transaction credits or debits the account.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "ATM Withdrawal")]
    AtmWithdrawal,
    #[serde(rename = "POS Purchase")]
    PosPurchase,
    #[serde(rename = "Online Transfer")]
    OnlineTransfer,
    #[serde(rename = "Direct Debit")]
    DirectDebit,
    #[serde(rename = "Salary Deposit")]
    SalaryDeposit,
    #[serde(rename = "Refund")]
    Refund,
    #[serde(rename = "Bill Payment")]
    BillPayment,
    #[serde(rename = "Cash Deposit")]
    CashDeposit
}

impl TransactionType {
    pub const ALL: [TransactionType; 8] = [
        TransactionType::AtmWithdrawal,
        TransactionType::PosPurchase,
        TransactionType::OnlineTransfer,
        TransactionType::DirectDebit,
        TransactionType::SalaryDeposit,
        TransactionType::Refund,
        TransactionType::BillPayment,
        TransactionType::CashDeposit
    ];

    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionType::SalaryDeposit | TransactionType::Refund | TransactionType::CashDeposit)
    }

    pub fn is_debit(&self) -> bool {
        !self.is_credit()
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::AtmWithdrawal => "ATM Withdrawal",
            TransactionType::PosPurchase => "POS Purchase",
            TransactionType::OnlineTransfer => "Online Transfer",
            TransactionType::DirectDebit => "Direct Debit",
            TransactionType::SalaryDeposit => "Salary Deposit",
            TransactionType::Refund => "Refund",
            TransactionType::BillPayment => "Bill Payment",
            TransactionType::CashDeposit => "Cash Deposit"
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}
