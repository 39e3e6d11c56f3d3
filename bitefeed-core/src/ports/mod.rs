//! Port definitions - trait seams for external collaborators

mod bank_provider;
mod repository;

pub use bank_provider::{
    BankDataProvider, FetchAccountsResult, FetchTransactionsResult, RawAccount, RawTransaction,
};
pub use repository::{DateRange, Integration, Repository};
