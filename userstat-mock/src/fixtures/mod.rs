pub mod balance;
pub mod debts;
pub mod identity;
