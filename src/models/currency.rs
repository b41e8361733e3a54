//! Currency conversion table
//!
//! Every salary is expressed in one of a fixed set of currencies. The table maps
//! each currency code to its exchange rate against the base currency (roubles)
//! and to a human readable name used by reporting code.

use rustc_hash::FxHashMap;

use crate::error::{Result, VacancyStatsError};

/// Code of the base currency all valuations are expressed in
pub const BASE_CURRENCY: &str = "RUR";

/// Default exchange rates: (code, rate to base currency, display name)
const DEFAULT_CURRENCIES: [(&str, f64, &str); 10] = [
    ("AZN", 35.68, "Манаты"),
    ("BYR", 23.91, "Белорусские рубли"),
    ("EUR", 59.90, "Евро"),
    ("GEL", 21.74, "Грузинский лари"),
    ("KGS", 0.76, "Киргизский сом"),
    ("KZT", 0.13, "Тенге"),
    ("RUR", 1.0, "Рубли"),
    ("UAH", 1.64, "Гривны"),
    ("USD", 60.66, "Доллары"),
    ("UZS", 0.0055, "Узбекский сум"),
];

#[derive(Debug, Clone, PartialEq)]
struct CurrencyEntry {
    rate: f64,
    display_name: String,
}

/// Immutable mapping from currency code to exchange rate
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyTable {
    entries: FxHashMap<String, CurrencyEntry>,
}

impl CurrencyTable {
    /// Build a table from `(code, rate, display name)` triples
    ///
    /// # Errors
    /// Returns a configuration error if a rate is not a positive finite number
    pub fn new<I, C, N>(currencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, f64, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut entries = FxHashMap::default();
        for (code, rate, display_name) in currencies {
            let code = code.into();
            if !rate.is_finite() || rate <= 0.0 {
                return Err(VacancyStatsError::Config(format!(
                    "Exchange rate for {code} must be positive, got {rate}"
                )));
            }
            entries.insert(
                code,
                CurrencyEntry {
                    rate,
                    display_name: display_name.into(),
                },
            );
        }
        Ok(Self { entries })
    }

    /// Exchange rate of `code` to the base currency
    ///
    /// # Errors
    /// Returns `UnknownCurrency` if the code is not in the table
    pub fn rate(&self, code: &str) -> Result<f64> {
        self.entries
            .get(code)
            .map(|entry| entry.rate)
            .ok_or_else(|| VacancyStatsError::UnknownCurrency(code.to_string()))
    }

    /// Human readable name of the currency, if known
    #[must_use]
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(|entry| entry.display_name.as_str())
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        let entries = DEFAULT_CURRENCIES
            .iter()
            .map(|(code, rate, name)| {
                (
                    (*code).to_string(),
                    CurrencyEntry {
                        rate: *rate,
                        display_name: (*name).to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }
}
