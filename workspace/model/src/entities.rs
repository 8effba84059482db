//! This file serves as the root for all SeaORM entity modules.
//! The finance tracker persists two independent collections: the
//! transactions a user records and the monthly budgets they set.

pub mod budget;
pub mod transaction;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::budget::Entity as Budget;
    pub use super::transaction::Entity as Transaction;
}
