use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};

use crate::events::{
    emit_employee_added, emit_employee_paused, emit_employee_removed, emit_employee_resumed,
    emit_employee_updated, emit_funds_deposited, emit_funds_withdrawn, emit_ownership_transferred,
    emit_payment_executed, emit_payment_skipped, emit_payments_paused, emit_payments_resumed,
};
use crate::storage::{self, Employee};

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MIN_INTERVAL_DAYS: u32 = 1;
pub const MAX_INTERVAL_DAYS: u32 = 365;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum PayrollError {
    /// Raised when initialize is called a second time
    AlreadyInitialized = 1,
    /// Raised when the contract has no owner yet
    NotInitialized = 2,
    /// Raised when the caller is not the contract owner
    Unauthorized = 3,
    /// Raised when adding an address that is already registered
    EmployeeAlreadyExists = 4,
    /// Raised when the address has no payroll record
    EmployeeNotFound = 5,
    /// Raised on a non-positive amount
    InvalidAmount = 6,
    /// Raised when the payment interval is outside [1, 365] days
    InvalidInterval = 7,
    /// Raised when ownership would be transferred to the contract itself
    InvalidNewOwner = 8,
    /// Raised when executing a payment that is not due yet
    PaymentNotDue = 9,
    /// Raised when the contract balance cannot cover the operation
    InsufficientFunds = 10,
}

/// Recurring payroll engine.
///
/// The owner maintains a registry of employees, each with a payment
/// amount, token, and interval in days. Payment execution is
/// permissionless so an off-chain scheduler, the employee, or anyone
/// else can trigger a payment the moment it falls due; the schedule
/// bookkeeping guarantees each interval pays out at most once.
///
/// # Funds Model
///
/// The contract holds one shared pool per token. Owner withdrawals and
/// payment executions draw from the same pool, so draining it leaves
/// later executions failing with `InsufficientFunds` until it is topped
/// up again.
#[contract]
pub struct PayrollEngineContract;

#[contractimpl]
impl PayrollEngineContract {
    /// Initializes the engine with its owner and the native asset
    /// contract address. Callable once.
    pub fn initialize(env: Env, owner: Address, native_token: Address) -> Result<(), PayrollError> {
        owner.require_auth();

        if storage::has_owner(&env) {
            return Err(PayrollError::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::set_native_token(&env, &native_token);
        storage::set_paused(&env, false);
        storage::set_employee_list(&env, &Vec::new(&env));

        Ok(())
    }

    //---------------------------------------------------------------------
    // Registry management (owner only)
    //---------------------------------------------------------------------

    /// Registers a new employee.
    ///
    /// The schedule anchor is the current ledger time, so the first
    /// payment falls due exactly one interval after registration and an
    /// employee can never be paid at the moment they are added.
    ///
    /// # Errors
    ///
    /// * `InvalidAmount` - `payment_amount` is not positive
    /// * `InvalidInterval` - `interval_days` outside [1, 365]
    /// * `EmployeeAlreadyExists` - the address is already registered
    ///
    /// # Access Control
    ///
    /// Caller must authenticate and be the contract owner.
    pub fn add_employee(
        env: Env,
        caller: Address,
        employee: Address,
        payment_amount: i128,
        token: Address,
        interval_days: u32,
    ) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        if payment_amount <= 0 {
            return Err(PayrollError::InvalidAmount);
        }
        if !(MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&interval_days) {
            return Err(PayrollError::InvalidInterval);
        }
        if storage::get_employee(&env, &employee).is_some() {
            return Err(PayrollError::EmployeeAlreadyExists);
        }

        let now = env.ledger().timestamp();
        let record = Employee {
            payment_amount,
            token: token.clone(),
            interval_days,
            last_payment_time: now,
            is_active: true,
        };
        storage::set_employee(&env, &employee, &record);

        let mut list = storage::get_employee_list(&env);
        list.push_back(employee.clone());
        storage::set_employee_list(&env, &list);

        emit_employee_added(&env, employee, token, payment_amount, interval_days, now);

        Ok(())
    }

    /// Removes an employee from the registry.
    ///
    /// Clears both the record and the enumeration entry; the remaining
    /// addresses keep their insertion order. A removed address can be
    /// re-added later as a fresh entry.
    ///
    /// # Access Control
    ///
    /// Caller must authenticate and be the contract owner.
    pub fn remove_employee(env: Env, caller: Address, employee: Address) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        if storage::get_employee(&env, &employee).is_none() {
            return Err(PayrollError::EmployeeNotFound);
        }

        storage::remove_employee(&env, &employee);

        let mut list = storage::get_employee_list(&env);
        let mut index: Option<u32> = None;
        for (i, addr) in list.iter().enumerate() {
            if addr == employee {
                index = Some(i as u32);
                break;
            }
        }
        if let Some(i) = index {
            let _ = list.remove(i);
            storage::set_employee_list(&env, &list);
        }

        emit_employee_removed(&env, employee, env.ledger().timestamp());

        Ok(())
    }

    /// Changes an employee's payment amount and interval.
    ///
    /// The schedule anchor (`last_payment_time`) is kept, so a payment
    /// that was already due stays due and a rate change never delays or
    /// fast-forwards the next payout on its own.
    ///
    /// # Access Control
    ///
    /// Caller must authenticate and be the contract owner.
    pub fn update_employee(
        env: Env,
        caller: Address,
        employee: Address,
        payment_amount: i128,
        interval_days: u32,
    ) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        if payment_amount <= 0 {
            return Err(PayrollError::InvalidAmount);
        }
        if !(MIN_INTERVAL_DAYS..=MAX_INTERVAL_DAYS).contains(&interval_days) {
            return Err(PayrollError::InvalidInterval);
        }

        let mut record =
            storage::get_employee(&env, &employee).ok_or(PayrollError::EmployeeNotFound)?;
        record.payment_amount = payment_amount;
        record.interval_days = interval_days;
        storage::set_employee(&env, &employee, &record);

        emit_employee_updated(&env, employee, payment_amount, interval_days);

        Ok(())
    }

    /// Excludes an employee from eligibility without unregistering them.
    /// The interval clock keeps running on wall time while paused.
    pub fn pause_employee(env: Env, caller: Address, employee: Address) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        let mut record =
            storage::get_employee(&env, &employee).ok_or(PayrollError::EmployeeNotFound)?;
        record.is_active = false;
        storage::set_employee(&env, &employee, &record);

        emit_employee_paused(&env, employee);

        Ok(())
    }

    /// Makes a paused employee eligible again. If their interval has
    /// already elapsed they become due immediately.
    pub fn resume_employee(env: Env, caller: Address, employee: Address) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        let mut record =
            storage::get_employee(&env, &employee).ok_or(PayrollError::EmployeeNotFound)?;
        record.is_active = true;
        storage::set_employee(&env, &employee, &record);

        emit_employee_resumed(&env, employee);

        Ok(())
    }

    /// Global pause switch. While set, no employee is due and no payment
    /// executes regardless of per-employee state.
    pub fn pause_all_payments(env: Env, caller: Address) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        storage::set_paused(&env, true);
        emit_payments_paused(&env, caller);
        Ok(())
    }

    pub fn resume_all_payments(env: Env, caller: Address) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;
        storage::set_paused(&env, false);
        emit_payments_resumed(&env, caller);
        Ok(())
    }

    /// Hands the contract to a new owner.
    ///
    /// # Errors
    ///
    /// * `InvalidNewOwner` - `new_owner` is the engine contract itself,
    ///   which would leave the registry without an operable owner
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        if new_owner == env.current_contract_address() {
            return Err(PayrollError::InvalidNewOwner);
        }

        storage::set_owner(&env, &new_owner);
        emit_ownership_transferred(&env, caller, new_owner);

        Ok(())
    }

    //---------------------------------------------------------------------
    // Fund management (owner only)
    //---------------------------------------------------------------------

    /// Deposits the native asset into the payroll pool.
    pub fn deposit_native(env: Env, caller: Address, amount: i128) -> Result<(), PayrollError> {
        let native = Self::get_native_token(env.clone())?;
        Self::deposit_tokens(env, caller, native, amount)
    }

    /// Deposits an arbitrary token into the payroll pool. The tokens are
    /// pulled from the caller under their authorization.
    pub fn deposit_tokens(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(PayrollError::InvalidAmount);
        }

        let client = token::Client::new(&env, &token);
        client.transfer(&caller, &env.current_contract_address(), &amount);

        emit_funds_deposited(&env, token, caller, amount);

        Ok(())
    }

    /// Withdraws the native asset from the payroll pool to the owner.
    pub fn withdraw_native(env: Env, caller: Address, amount: i128) -> Result<(), PayrollError> {
        let native = Self::get_native_token(env.clone())?;
        Self::withdraw_tokens(env, caller, native, amount)
    }

    /// Withdraws tokens from the payroll pool to the owner.
    ///
    /// Withdrawing aggressively can starve employees whose payments fall
    /// due afterwards; those executions fail with `InsufficientFunds`
    /// until the pool is funded again.
    pub fn withdraw_tokens(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), PayrollError> {
        require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(PayrollError::InvalidAmount);
        }

        let client = token::Client::new(&env, &token);
        let balance = client.balance(&env.current_contract_address());
        if balance < amount {
            return Err(PayrollError::InsufficientFunds);
        }

        client.transfer(&env.current_contract_address(), &caller, &amount);

        emit_funds_withdrawn(&env, token, caller, amount);

        Ok(())
    }

    //---------------------------------------------------------------------
    // Payment execution (permissionless)
    //---------------------------------------------------------------------

    /// Pays one employee whose interval has elapsed.
    ///
    /// Anyone may call this; eligibility and funding are the only gates.
    /// The schedule anchor is advanced before the token transfer, so two
    /// racing calls for the same period settle exactly one payment and
    /// the loser observes `PaymentNotDue`.
    ///
    /// # Errors
    ///
    /// * `EmployeeNotFound` - the address is not registered
    /// * `PaymentNotDue` - interval not elapsed, employee paused, or all
    ///   payments paused
    /// * `InsufficientFunds` - pool balance below the payment amount
    pub fn execute_payment(env: Env, employee: Address) -> Result<(), PayrollError> {
        let record = storage::get_employee(&env, &employee).ok_or(PayrollError::EmployeeNotFound)?;

        if !record_is_due(&env, &record) {
            return Err(PayrollError::PaymentNotDue);
        }

        let client = token::Client::new(&env, &record.token);
        let balance = client.balance(&env.current_contract_address());
        if balance < record.payment_amount {
            return Err(PayrollError::InsufficientFunds);
        }

        settle(&env, &employee, record);

        Ok(())
    }

    /// Pays every due employee the pool can cover, in registry order.
    ///
    /// A due employee the pool cannot cover is skipped with a
    /// `PaymentSkipped` event and does not stop the sweep; their state
    /// is untouched so a later sweep can pay them. Returns the number of
    /// employees paid.
    pub fn execute_all_payments(env: Env) -> u32 {
        let list = storage::get_employee_list(&env);
        let mut paid: u32 = 0;
        for employee in list.iter() {
            if try_settle(&env, &employee) {
                paid += 1;
            }
        }
        paid
    }

    /// Same as `execute_all_payments` over a caller-supplied subset.
    /// Unknown or not-due addresses are skipped. Returns the number of
    /// employees paid.
    pub fn execute_batch_payments(env: Env, employees: Vec<Address>) -> u32 {
        let mut paid: u32 = 0;
        for employee in employees.iter() {
            if try_settle(&env, &employee) {
                paid += 1;
            }
        }
        paid
    }

    //---------------------------------------------------------------------
    // Views
    //---------------------------------------------------------------------

    pub fn owner(env: Env) -> Result<Address, PayrollError> {
        storage::get_owner(&env).ok_or(PayrollError::NotInitialized)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn get_native_token(env: Env) -> Result<Address, PayrollError> {
        storage::get_native_token(&env).ok_or(PayrollError::NotInitialized)
    }

    /// Registry addresses in insertion order.
    pub fn get_all_employees(env: Env) -> Vec<Address> {
        storage::get_employee_list(&env)
    }

    pub fn get_employee_count(env: Env) -> u32 {
        storage::get_employee_list(&env).len()
    }

    pub fn get_employee(env: Env, employee: Address) -> Option<Employee> {
        storage::get_employee(&env, &employee)
    }

    /// True when the employee exists, is active, the global switch is
    /// off, and a full interval has elapsed since their last payment.
    pub fn is_payment_due(env: Env, employee: Address) -> bool {
        match storage::get_employee(&env, &employee) {
            Some(record) => record_is_due(&env, &record),
            None => false,
        }
    }

    /// Ledger time at which the employee's next payment falls due.
    pub fn get_next_payment_date(env: Env, employee: Address) -> Result<u64, PayrollError> {
        let record = storage::get_employee(&env, &employee).ok_or(PayrollError::EmployeeNotFound)?;
        Ok(next_due_time(&record))
    }

    /// Addresses currently due, in registry order.
    pub fn get_eligible_employees(env: Env) -> Vec<Address> {
        let list = storage::get_employee_list(&env);
        let mut eligible = Vec::new(&env);
        for employee in list.iter() {
            if let Some(record) = storage::get_employee(&env, &employee) {
                if record_is_due(&env, &record) {
                    eligible.push_back(employee);
                }
            }
        }
        eligible
    }

    pub fn get_native_balance(env: Env) -> Result<i128, PayrollError> {
        let native = Self::get_native_token(env.clone())?;
        Ok(Self::get_token_balance(env, native))
    }

    pub fn get_token_balance(env: Env, token: Address) -> i128 {
        token::Client::new(&env, &token).balance(&env.current_contract_address())
    }
}

//-----------------------------------------------------------------------------
// Helpers
//-----------------------------------------------------------------------------

/// Authenticates `caller` and checks them against the stored owner.
fn require_owner(env: &Env, caller: &Address) -> Result<(), PayrollError> {
    caller.require_auth();
    let owner = storage::get_owner(env).ok_or(PayrollError::NotInitialized)?;
    if *caller != owner {
        return Err(PayrollError::Unauthorized);
    }
    Ok(())
}

fn next_due_time(record: &Employee) -> u64 {
    record.last_payment_time + (record.interval_days as u64) * SECONDS_PER_DAY
}

fn record_is_due(env: &Env, record: &Employee) -> bool {
    if storage::is_paused(env) || !record.is_active {
        return false;
    }
    env.ledger().timestamp() >= next_due_time(record)
}

/// Finalizes the schedule, then moves the funds. The anchor update lands
/// before the token call so the same period can never settle twice.
fn settle(env: &Env, employee: &Address, mut record: Employee) {
    let now = env.ledger().timestamp();
    record.last_payment_time = now;
    storage::set_employee(env, employee, &record);

    let client = token::Client::new(env, &record.token);
    client.transfer(&env.current_contract_address(), employee, &record.payment_amount);

    emit_payment_executed(env, employee.clone(), record.token, record.payment_amount, now);
}

/// Sweep step for one address. Pays if due and funded; emits a skip
/// event for due-but-underfunded employees; ignores everything else.
fn try_settle(env: &Env, employee: &Address) -> bool {
    let record = match storage::get_employee(env, employee) {
        Some(record) => record,
        None => return false,
    };

    if !record_is_due(env, &record) {
        return false;
    }

    let client = token::Client::new(env, &record.token);
    let balance = client.balance(&env.current_contract_address());
    if balance < record.payment_amount {
        emit_payment_skipped(
            env,
            employee.clone(),
            record.token.clone(),
            record.payment_amount,
            balance,
        );
        return false;
    }

    settle(env, employee, record);
    true
}
