//! Taskdeck backend library modules.
//!
//! The crate is organised around a hexagonal boundary: `domain` holds
//! transport-agnostic entities, services, and ports; `inbound` adapts HTTP
//! requests onto the driving ports; `outbound` implements the driven ports
//! against PostgreSQL.

pub mod domain;
pub mod doc;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware re-exported for server wiring.
pub use middleware::Trace;
