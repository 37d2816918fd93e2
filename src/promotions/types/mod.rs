//! Promotion types

pub mod buy_x_pay_y;
pub mod percentage;

pub use buy_x_pay_y::BuyXPayYPromotion;
pub use percentage::PercentagePromotion;
