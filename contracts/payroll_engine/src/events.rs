//-----------------------------------------------------------------------------
// Events
//-----------------------------------------------------------------------------

use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeAdded {
    pub employee: Address,
    pub token: Address,
    pub payment_amount: i128,
    pub interval_days: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeRemoved {
    pub employee: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeUpdated {
    pub employee: Address,
    pub payment_amount: i128,
    pub interval_days: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeePaused {
    pub employee: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmployeeResumed {
    pub employee: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentsPaused {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentsResumed {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDeposited {
    pub token: Address,
    pub from: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
}

/// Emitted once per employee actually paid, both for single executions
/// and for each item of a sweep.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentExecuted {
    pub employee: Address,
    pub token: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Emitted when a sweep finds a due employee the contract cannot cover.
/// The sweep itself carries on with the remaining employees.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentSkipped {
    pub employee: Address,
    pub token: Address,
    pub required: i128,
    pub available: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_employee_added(
    e: &Env,
    employee: Address,
    token: Address,
    payment_amount: i128,
    interval_days: u32,
    timestamp: u64,
) {
    let topics = (Symbol::new(e, "EmployeeAdded"),);
    let event_data = EmployeeAdded {
        employee,
        token,
        payment_amount,
        interval_days,
        timestamp,
    };
    e.events().publish(topics, event_data);
}

pub fn emit_employee_removed(e: &Env, employee: Address, timestamp: u64) {
    let topics = (Symbol::new(e, "EmployeeRemoved"),);
    let event_data = EmployeeRemoved {
        employee,
        timestamp,
    };
    e.events().publish(topics, event_data);
}

pub fn emit_employee_updated(
    e: &Env,
    employee: Address,
    payment_amount: i128,
    interval_days: u32,
) {
    let topics = (Symbol::new(e, "EmployeeUpdated"),);
    let event_data = EmployeeUpdated {
        employee,
        payment_amount,
        interval_days,
    };
    e.events().publish(topics, event_data);
}

pub fn emit_employee_paused(e: &Env, employee: Address) {
    let topics = (Symbol::new(e, "EmployeePaused"),);
    e.events().publish(topics, EmployeePaused { employee });
}

pub fn emit_employee_resumed(e: &Env, employee: Address) {
    let topics = (Symbol::new(e, "EmployeeResumed"),);
    e.events().publish(topics, EmployeeResumed { employee });
}

pub fn emit_payments_paused(e: &Env, owner: Address) {
    let topics = (Symbol::new(e, "PaymentsPaused"),);
    e.events().publish(topics, PaymentsPaused { owner });
}

pub fn emit_payments_resumed(e: &Env, owner: Address) {
    let topics = (Symbol::new(e, "PaymentsResumed"),);
    e.events().publish(topics, PaymentsResumed { owner });
}

pub fn emit_funds_deposited(e: &Env, token: Address, from: Address, amount: i128) {
    let topics = (Symbol::new(e, "FundsDeposited"),);
    let event_data = FundsDeposited {
        token,
        from,
        amount,
    };
    e.events().publish(topics, event_data);
}

pub fn emit_funds_withdrawn(e: &Env, token: Address, to: Address, amount: i128) {
    let topics = (Symbol::new(e, "FundsWithdrawn"),);
    let event_data = FundsWithdrawn { token, to, amount };
    e.events().publish(topics, event_data);
}

pub fn emit_payment_executed(
    e: &Env,
    employee: Address,
    token: Address,
    amount: i128,
    timestamp: u64,
) {
    let topics = (Symbol::new(e, "PaymentExecuted"),);
    let event_data = PaymentExecuted {
        employee,
        token,
        amount,
        timestamp,
    };
    e.events().publish(topics, event_data);
}

pub fn emit_payment_skipped(
    e: &Env,
    employee: Address,
    token: Address,
    required: i128,
    available: i128,
) {
    let topics = (Symbol::new(e, "PaymentSkipped"),);
    let event_data = PaymentSkipped {
        employee,
        token,
        required,
        available,
    };
    e.events().publish(topics, event_data);
}

pub fn emit_ownership_transferred(e: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (Symbol::new(e, "OwnershipTransferred"),);
    let event_data = OwnershipTransferred {
        previous_owner,
        new_owner,
    };
    e.events().publish(topics, event_data);
}
