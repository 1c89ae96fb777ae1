//! Cart Form Common Library
//!
//! CLIとWeb(WASM)で共有されるカートの状態遷移と型

pub mod types;
pub mod form;
pub mod shipping;
pub mod totals;
pub mod checkout;
pub mod storage;
pub mod controller;
pub mod error;

pub use types::{CartRecord, ItemId, LineItem};
pub use form::{FormField, FormState, ItemEntry};
pub use shipping::{shipping_fee, Town};
pub use totals::{format_currency, Totals};
pub use checkout::{CheckoutSummary, PaymentMethod, DEFAULT_CHECKOUT_URL};
pub use storage::{KeyValueStore, MemoryStore, CART_STORAGE_KEY};
pub use controller::{CartController, CommitOutcome};
pub use error::{Error, FormError, Result};
