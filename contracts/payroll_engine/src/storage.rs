use soroban_sdk::{contracttype, Address, Env, Vec};

/// Recurring payment record for a single employee.
///
/// An address with no stored `Employee` entry is not on the payroll at
/// all; presence of the entry is what the registry enumerates.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    /// Amount paid per interval, in the token's smallest unit.
    pub payment_amount: i128,
    /// Token the employee is paid in. Either the configured native
    /// asset contract or any other token contract.
    pub token: Address,
    /// Days between payments, within [1, 365].
    pub interval_days: u32,
    /// Ledger time of the last successful payment. Set to the time of
    /// registration on creation, so the first payment falls due one
    /// full interval later.
    pub last_payment_time: u64,
    /// Paused employees stay registered but are never due.
    pub is_active: bool,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract owner
    Owner,
    /// Native asset contract address, set at initialization
    NativeToken,
    /// Global pause switch
    Paused,
    /// Employee record, keyed by employee address
    Employee(Address),
    /// Registry of employee addresses in insertion order
    EmployeeList,
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

pub fn get_native_token(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::NativeToken)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().persistent().set(&DataKey::NativeToken, token);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().persistent().set(&DataKey::Paused, &paused);
}

pub fn get_employee(env: &Env, employee: &Address) -> Option<Employee> {
    env.storage()
        .persistent()
        .get(&DataKey::Employee(employee.clone()))
}

pub fn set_employee(env: &Env, employee: &Address, record: &Employee) {
    env.storage()
        .persistent()
        .set(&DataKey::Employee(employee.clone()), record);
}

pub fn remove_employee(env: &Env, employee: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Employee(employee.clone()));
}

pub fn get_employee_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::EmployeeList)
        .unwrap_or(Vec::new(env))
}

pub fn set_employee_list(env: &Env, list: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::EmployeeList, list);
}
