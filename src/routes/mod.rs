pub mod convert;
pub mod gold;
pub mod health;
pub mod news;
pub mod rates;
pub mod silver;
pub mod stocks;
