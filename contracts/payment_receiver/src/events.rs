use soroban_sdk::{contractevent, Address, Env};

/// Event: payment received and recorded
#[contractevent]
#[derive(Clone, Debug)]
pub struct PaymentReceived {
    pub payment_id: u64,
    pub payer: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event: owner swept the balance
#[contractevent]
#[derive(Clone, Debug)]
pub struct BalanceWithdrawn {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event: owner swept the balance through the escape hatch
#[contractevent]
#[derive(Clone, Debug)]
pub struct EmergencyWithdrawal {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event: ownership handed over
#[contractevent]
#[derive(Clone, Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_payment_received(e: &Env, event: PaymentReceived) {
    event.publish(e);
}

pub fn emit_balance_withdrawn(e: &Env, event: BalanceWithdrawn) {
    event.publish(e);
}

pub fn emit_emergency_withdrawal(e: &Env, event: EmergencyWithdrawal) {
    event.publish(e);
}

pub fn emit_ownership_transferred(e: &Env, event: OwnershipTransferred) {
    event.publish(e);
}
