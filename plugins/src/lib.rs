pub mod factory;
pub mod opener;
pub mod probe;
pub mod proxy;
