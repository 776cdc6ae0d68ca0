//! pricing-core
//!
//! Pricing engine for gym membership plans.
//! Depends on pricing-domain. No CLI, no terminal I/O, no persistence.

pub mod billing_period_service;
pub mod card_fee_service;
pub mod discount_service;
pub mod error;
pub mod family_plan_service;
pub mod labels;
pub mod pricing_service;
pub mod session;
pub mod time;


pub use billing_period_service::*;
pub use card_fee_service::*;
pub use discount_service::*;
pub use error::CoreError;
pub use family_plan_service::*;
pub use labels::*;
pub use pricing_service::*;
pub use session::*;
pub use time::*;
