//! Physical-quantity dimension resolution
//!
//! Resolves a quantity name ("force") to its dimensional formula over the
//! base dimensions mass, length, and time, and reports every other known
//! quantity sharing that formula. The local dictionary is authoritative;
//! unknown quantities fall back to an LLM oracle whose answer is returned
//! raw and tagged unverified.
//!
//! ## Architecture
//!
//! ```text
//! caller → Resolver::resolve(name)
//!            ├─ DimensionTable hit → EquivalenceIndex → Verified
//!            └─ miss → InferenceGateway → Unverified (or NotFound)
//! ```
//!
//! Table and index are immutable after construction; the resolver is safe to
//! share across tasks without locking.
//!
//! ## Gateway Configuration
//!
//! The Groq gateway reads `GROQ_API_KEY` at construction. A missing key is a
//! valid state: build the resolver with `gateway: None` and misses terminate
//! as `NotFound(GatewayUnavailable)` without any network call.

pub mod error;
pub mod gateway;
pub mod index;
pub mod resolver;
pub mod table;
pub mod vector;

// Re-exports for convenience
pub use error::{NotFoundReason, ResolveError};
pub use gateway::{GroqClient, InferenceGateway};
pub use index::EquivalenceIndex;
pub use resolver::{Resolution, Resolver};
pub use table::{DimensionTable, QuantityEntry};
pub use vector::DimensionVector;
