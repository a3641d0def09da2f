pub mod metals;
pub mod news;
pub mod rates;
pub mod series;
pub mod stocks;
