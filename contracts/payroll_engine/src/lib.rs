#![no_std]

pub mod events;
pub mod payroll;
pub mod storage;

pub use payroll::{PayrollEngineContract, PayrollEngineContractClient, PayrollError};
pub use storage::Employee;

#[cfg(test)]
mod tests;
