pub mod binary;
pub mod host;
pub mod system;

pub use system::SystemProbe;
