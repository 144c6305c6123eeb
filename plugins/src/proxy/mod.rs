pub mod env;

pub use env::EnvProxyResolver;
