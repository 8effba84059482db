pub mod initdb;
pub mod migrate_and_serve;
pub mod report;
pub mod serve;

pub use initdb::init_database;
pub use migrate_and_serve::migrate_and_serve;
pub use report::{print_budget_summary, print_dashboard};
pub use serve::serve;
