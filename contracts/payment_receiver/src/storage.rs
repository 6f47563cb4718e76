use soroban_sdk::{contracttype, Address};

/// One inbound payment. Records are append-only; once written they are
/// never edited or deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRecord {
    pub id: u64,
    pub payer: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
pub enum StorageKey {
    Owner,
    // Token accepted by this receiver
    Token,
    // Count of records so far; also the next id to assign
    TotalPayments,
    // id -> PaymentRecord
    Payment(u64),
}
