//! Domain models for vacancy statistics

pub mod currency;
pub mod salary;
pub mod vacancy;

pub use currency::{BASE_CURRENCY, CurrencyTable};
pub use salary::Salary;
pub use vacancy::Vacancy;
