pub mod name;
pub mod provider;
pub mod record;
