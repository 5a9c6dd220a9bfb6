//! Strongly-typed SKU identifier.
//!
//! SKU codes are supplied by upstream systems (catalog, sales feeds); this
//! crate never generates them. The only invariant owned here is that a SKU
//! code is a non-empty string.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a stock-keeping unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkuId(String);

impl SkuId {
    /// Create a SKU identifier from an externally-supplied code.
    ///
    /// Rejects empty (or whitespace-only) codes.
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("sku_id cannot be empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SkuId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SkuId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<SkuId> for String {
    fn from(value: SkuId) -> Self {
        value.0
    }
}
