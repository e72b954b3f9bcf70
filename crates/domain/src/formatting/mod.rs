//! Human-readable rendering of on-chain token amounts.

mod balance;
mod currency;
mod grouping;

pub use balance::{
    DEFAULT_DECIMALS, DEFAULT_FIXED_DECIMAL_PLACES, FormatOptions, MAX_FIXED_DECIMAL_PLACES,
    format_amount, format_balance_str,
};
pub use currency::{CurrencyValue, NATIVE_CURRENCY_CODE};
pub use grouping::group_thousands;
