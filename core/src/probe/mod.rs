//! Contract for the external environment probe.
//!
//! The probe answers a categorized [`ProbeRequest`] either as indented text or
//! as JSON text, mirroring the shape `info` and `report` print. [`EnvFacts`] is
//! the shared formatter concrete probes use to produce both forms.

pub mod facts;
pub mod request;
pub mod r#trait;

pub use facts::{EnvFacts, FactValue, NOT_FOUND};
pub use r#trait::EnvProbe;
pub use request::{Category, ProbeOptions, ProbeRequest, ProbeSection};
