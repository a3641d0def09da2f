pub mod exchangerate_host;
pub mod mock;
pub mod provider;
