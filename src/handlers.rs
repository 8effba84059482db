pub mod budget_summary;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod transactions;

use rust_decimal::Decimal;
use validator::ValidationError;

/// Largest magnitude an amount may have: the integer part of a `Decimal(16, 4)` column.
// 1_000_000_000_000 == 0xE8_D4A5_1000 (`Decimal::new` is not const).
const AMOUNT_LIMIT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Rejects amounts that do not fit the `Decimal(16, 4)` storage columns.
fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.abs() >= AMOUNT_LIMIT {
        return Err(ValidationError::new("amount_range"));
    }
    Ok(())
}
