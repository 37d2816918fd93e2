//! Cart Offers
//!
//! Cart Offers evaluates every promotion a customer is eligible for against a
//! shopping cart, reports the total, discount and subtotal each one yields, and
//! picks the best offer. All discount arithmetic runs in integer cents.

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod money;
pub mod observability;
pub mod prelude;
pub mod promotions;
pub mod report;
