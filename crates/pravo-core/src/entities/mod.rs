//! Entity structs for pravo domain objects.
//!
//! `Incident` maps to the `incidents` table in the libSQL store. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON output and
//! schema validation.

mod incident;

pub use incident::{Incident, NewIncident};
