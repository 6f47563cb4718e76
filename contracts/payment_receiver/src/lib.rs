#![no_std]

mod events;
mod storage;

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};

use events::{
    emit_balance_withdrawn, emit_emergency_withdrawal, emit_ownership_transferred,
    emit_payment_received, BalanceWithdrawn, EmergencyWithdrawal, OwnershipTransferred,
    PaymentReceived,
};
use storage::StorageKey;

pub use events::PaymentReceived as PaymentReceivedEvent;
pub use storage::PaymentRecord;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ReceiverError {
    /// Raised when initialize is called a second time
    AlreadyInitialized = 1,
    /// Raised when the contract has no owner yet
    NotInitialized = 2,
    /// Raised when the caller is not the contract owner
    Unauthorized = 3,
    /// Raised on a non-positive payment amount
    InvalidAmount = 4,
    /// Raised when a payment id has not been assigned yet
    PaymentOutOfRange = 5,
    /// Raised when sweeping a zero balance
    NothingToWithdraw = 6,
    /// Raised when ownership would be transferred to the contract itself
    InvalidNewOwner = 7,
}

/// Append-only ledger of inbound payments.
///
/// Anyone can pay in; every nonzero payment gets a dense id starting at
/// 0 and an immutable record. Only the owner can move funds out. The
/// same contract is deployed per chain and the ledgers are aggregated
/// off-chain, so nothing here may depend on which chain it runs on.
#[contract]
pub struct PaymentReceiverContract;

#[contractimpl]
impl PaymentReceiverContract {
    /// Initialize with the owner and the accepted token. Callable once.
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), ReceiverError> {
        owner.require_auth();

        if env.storage().persistent().has(&StorageKey::Owner) {
            return Err(ReceiverError::AlreadyInitialized);
        }

        env.storage().persistent().set(&StorageKey::Owner, &owner);
        env.storage().persistent().set(&StorageKey::Token, &token);
        env.storage()
            .persistent()
            .set(&StorageKey::TotalPayments, &0u64);

        Ok(())
    }

    /// Records an inbound payment and returns its id.
    ///
    /// The tokens are pulled from the payer under their authorization.
    /// Zero and negative amounts are rejected outright; a record always
    /// stands for funds that actually arrived.
    pub fn pay(env: Env, payer: Address, amount: i128) -> Result<u64, ReceiverError> {
        payer.require_auth();

        if amount <= 0 {
            return Err(ReceiverError::InvalidAmount);
        }

        let token = get_token(&env)?;
        let client = token::Client::new(&env, &token);
        client.transfer(&payer, &env.current_contract_address(), &amount);

        let id = total(&env);
        let timestamp = env.ledger().timestamp();
        let record = PaymentRecord {
            id,
            payer: payer.clone(),
            amount,
            timestamp,
        };
        env.storage()
            .persistent()
            .set(&StorageKey::Payment(id), &record);
        env.storage()
            .persistent()
            .set(&StorageKey::TotalPayments, &(id + 1));

        emit_payment_received(
            &env,
            PaymentReceived {
                payment_id: id,
                payer,
                amount,
                timestamp,
            },
        );

        Ok(id)
    }

    /// Current token balance held by the receiver.
    pub fn get_balance(env: Env) -> Result<i128, ReceiverError> {
        let token = get_token(&env)?;
        Ok(token::Client::new(&env, &token).balance(&env.current_contract_address()))
    }

    /// Number of records so far; ids run from 0 to this minus one.
    pub fn total_payments(env: Env) -> u64 {
        total(&env)
    }

    /// Fetch one record by id.
    pub fn get_payment(env: Env, payment_id: u64) -> Result<PaymentRecord, ReceiverError> {
        if payment_id >= total(&env) {
            return Err(ReceiverError::PaymentOutOfRange);
        }
        env.storage()
            .persistent()
            .get(&StorageKey::Payment(payment_id))
            .ok_or(ReceiverError::PaymentOutOfRange)
    }

    /// The newest `count` records in ascending id order. An oversized
    /// `count` is clamped to the record count rather than rejected.
    pub fn get_recent_payments(env: Env, count: u32) -> Vec<PaymentRecord> {
        let total = total(&env);
        let take = core::cmp::min(count as u64, total);
        let mut result = Vec::new(&env);

        for id in (total - take)..total {
            if let Some(record) = env
                .storage()
                .persistent()
                .get(&StorageKey::Payment(id))
            {
                result.push_back(record);
            }
        }
        result
    }

    /// Sweeps the entire balance to the owner.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), ReceiverError> {
        require_owner(&env, &caller)?;

        let amount = sweep(&env, &caller)?;
        emit_balance_withdrawn(
            &env,
            BalanceWithdrawn {
                to: caller,
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Operational escape hatch with the same effect as `withdraw`.
    /// Kept as a separate entry point so it stays usable if guard logic
    /// is ever layered onto the normal path.
    pub fn emergency_withdraw(env: Env, caller: Address) -> Result<(), ReceiverError> {
        require_owner(&env, &caller)?;

        let amount = sweep(&env, &caller)?;
        emit_emergency_withdrawal(
            &env,
            EmergencyWithdrawal {
                to: caller,
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Hands the receiver to a new owner. Transferring to the receiver
    /// itself would orphan the balance and is rejected.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ReceiverError> {
        require_owner(&env, &caller)?;

        if new_owner == env.current_contract_address() {
            return Err(ReceiverError::InvalidNewOwner);
        }

        env.storage()
            .persistent()
            .set(&StorageKey::Owner, &new_owner);
        emit_ownership_transferred(
            &env,
            OwnershipTransferred {
                previous_owner: caller,
                new_owner,
            },
        );

        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, ReceiverError> {
        env.storage()
            .persistent()
            .get(&StorageKey::Owner)
            .ok_or(ReceiverError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, ReceiverError> {
        get_token(&env)
    }
}

fn get_token(env: &Env) -> Result<Address, ReceiverError> {
    env.storage()
        .persistent()
        .get(&StorageKey::Token)
        .ok_or(ReceiverError::NotInitialized)
}

fn total(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&StorageKey::TotalPayments)
        .unwrap_or(0)
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), ReceiverError> {
    caller.require_auth();
    let owner: Address = env
        .storage()
        .persistent()
        .get(&StorageKey::Owner)
        .ok_or(ReceiverError::NotInitialized)?;
    if *caller != owner {
        return Err(ReceiverError::Unauthorized);
    }
    Ok(())
}

/// Moves the full balance to `to`; the amount moved is returned for the
/// caller's event.
fn sweep(env: &Env, to: &Address) -> Result<i128, ReceiverError> {
    let token = get_token(env)?;
    let client = token::Client::new(env, &token);
    let balance = client.balance(&env.current_contract_address());

    if balance <= 0 {
        return Err(ReceiverError::NothingToWithdraw);
    }

    client.transfer(&env.current_contract_address(), to, &balance);
    Ok(balance)
}
