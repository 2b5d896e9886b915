//! NEP-6 wallet model types.
//!
//! Plain value objects mapping 1:1 onto the NEP-6 wallet JSON schema. Field
//! names are wire-format contractual and round-trip unchanged; optional
//! fields (the NEP-2 key of a watch-only account, the free-form `extra`
//! object) round-trip as absent rather than as placeholder values.
//!
//! This crate carries no key derivation or signing; it is the data layer
//! only.

mod account;
mod contract;
mod error;
mod wallet;

pub use account::Account;
pub use contract::{Contract, Parameter, ParameterType};
pub use error::Nep6Error;
pub use wallet::{ScryptParameters, Wallet};
