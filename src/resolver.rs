//! Resolver
//!
//! Two-tier resolution policy: exact local lookup first, external inference
//! as an explicitly unverified fallback. Fallback answers stay a distinct
//! tagged outcome so callers can disclose their provenance.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{NotFoundReason, ResolveError};
use crate::gateway::InferenceGateway;
use crate::index::EquivalenceIndex;
use crate::table::DimensionTable;
use crate::vector::DimensionVector;

/// Outcome of one resolution call.
///
/// Constructed fresh per call, never cached. The tag distinguishes answers
/// backed by the local table from unvalidated oracle text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// The quantity is in the local table.
    Verified {
        name: String,
        vector: DimensionVector,
        /// Other table names sharing the exact vector, queried name excluded
        equivalents: BTreeSet<String>,
    },
    /// The oracle answered; the text is unvalidated and may not be a
    /// well-formed dimensional expression.
    Unverified { name: String, raw_text: String },
    /// Not in the table and the fallback produced no answer.
    NotFound { name: String, reason: NotFoundReason },
}

/// Orchestrates table lookup, equivalence reporting, and the oracle fallback.
///
/// Immutable after construction and safe to share across tasks; each
/// `resolve` call is independent.
pub struct Resolver {
    table: DimensionTable,
    index: EquivalenceIndex,
    gateway: Option<Arc<dyn InferenceGateway>>,
}

impl Resolver {
    /// Build a resolver over `table`, with the fallback enabled when a
    /// gateway is supplied.
    ///
    /// `None` models the absent-credential configuration state: resolution
    /// still works for table entries, and misses terminate as
    /// `NotFound(GatewayUnavailable)` without any call attempt.
    pub fn new(table: DimensionTable, gateway: Option<Arc<dyn InferenceGateway>>) -> Self {
        let index = EquivalenceIndex::build(&table);
        Self {
            table,
            index,
            gateway,
        }
    }

    /// Resolver over the canonical table.
    pub fn standard(gateway: Option<Arc<dyn InferenceGateway>>) -> Self {
        Self::new(DimensionTable::standard(), gateway)
    }

    /// True when a fallback gateway is configured.
    pub fn fallback_enabled(&self) -> bool {
        self.gateway.is_some()
    }

    /// Resolve a quantity name to its dimensional formula.
    ///
    /// Input is trimmed and lowercased; empty input is a user-input error,
    /// distinct from `NotFound`, and touches neither table nor gateway.
    pub async fn resolve(&self, input: &str) -> Result<Resolution, ResolveError> {
        let name = input.trim().to_lowercase();
        if name.is_empty() {
            return Err(ResolveError::EmptyInput);
        }

        if let Some(vector) = self.table.lookup(&name) {
            debug!(%name, formula = %vector, "local table hit");
            let equivalents = self.index.equivalents_of(&name, vector);
            return Ok(Resolution::Verified {
                name,
                vector,
                equivalents,
            });
        }

        let Some(gateway) = &self.gateway else {
            warn!(%name, "not in table and no gateway configured");
            return Ok(Resolution::NotFound {
                name,
                reason: NotFoundReason::GatewayUnavailable,
            });
        };

        info!(
            %name,
            provider = gateway.provider_name(),
            model = gateway.model_name(),
            "not in table, invoking inference fallback"
        );
        // One call, no retry. Failures terminate this resolution only.
        match gateway.infer(&name).await {
            Ok(raw_text) => Ok(Resolution::Unverified {
                name,
                raw_text: raw_text.trim().to_string(),
            }),
            Err(e) => {
                warn!(%name, error = %e, "inference fallback failed");
                Ok(Resolution::NotFound {
                    name,
                    reason: NotFoundReason::GatewayError(e.to_string()),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_without_gateway() -> Resolver {
        Resolver::standard(None)
    }

    #[tokio::test]
    async fn test_table_hit_returns_verified() {
        let resolver = resolver_without_gateway();
        let resolution = resolver.resolve("force").await.unwrap();
        match resolution {
            Resolution::Verified { name, vector, .. } => {
                assert_eq!(name, "force");
                assert_eq!(vector, DimensionVector::new(1, 1, -2));
            }
            other => panic!("expected Verified, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_input_is_an_error() {
        let resolver = resolver_without_gateway();
        assert_eq!(
            resolver.resolve("   ").await.unwrap_err(),
            ResolveError::EmptyInput
        );
        assert_eq!(
            resolver.resolve("").await.unwrap_err(),
            ResolveError::EmptyInput
        );
    }

    #[tokio::test]
    async fn test_miss_without_gateway_short_circuits() {
        let resolver = resolver_without_gateway();
        let resolution = resolver.resolve("impulse").await.unwrap();
        assert_eq!(
            resolution,
            Resolution::NotFound {
                name: "impulse".to_string(),
                reason: NotFoundReason::GatewayUnavailable,
            }
        );
    }

    #[tokio::test]
    async fn test_normalization_yields_identical_results() {
        let resolver = resolver_without_gateway();
        let canonical = resolver.resolve("force").await.unwrap();
        for variant in ["Force", "FORCE", " force "] {
            assert_eq!(resolver.resolve(variant).await.unwrap(), canonical);
        }
    }

    #[test]
    fn test_resolution_serializes_with_status_tag() {
        let resolution = Resolution::Unverified {
            name: "impulse".to_string(),
            raw_text: "MLT^-1".to_string(),
        };
        let json = serde_json::to_value(&resolution).unwrap();
        assert_eq!(json["status"], "unverified");
        assert_eq!(json["raw_text"], "MLT^-1");
    }
}
