//! pricing-domain
//!
//! Pure pricing models (programs, plan tiers, catalog, billing period, requests, breakdowns).
//! No I/O, no CLI, no storage. Only data types, constants and core enums.

pub mod breakdown;
pub mod catalog;
pub mod money;
pub mod period;
pub mod plan;
pub mod request;
pub mod rules;

pub use breakdown::*;
pub use catalog::*;
pub use money::*;
pub use period::*;
pub use plan::*;
pub use request::*;
pub use rules::*;
