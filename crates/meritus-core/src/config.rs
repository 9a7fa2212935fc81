use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Platform fee ceiling: 1000 basis points (10%).
pub const MAX_PLATFORM_FEE_BPS: u32 = 1000;

/// Configuration for a Meritus registry instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Platform fee in basis points (100 = 1%).
    pub platform_fee_bps: u32,
    /// Minimum fee an institution must attach to a certificate issuance,
    /// in the smallest native unit.
    pub min_certificate_fee: u128,
    /// Minimum reward an achievement may promise, in the smallest native
    /// unit.
    pub min_reward: u128,
}

impl RegistryConfig {
    /// Check the configuration against registry bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.platform_fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(CoreError::ValidationError(format!(
                "platform fee {} exceeds {} basis points",
                self.platform_fee_bps, MAX_PLATFORM_FEE_BPS
            )));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            platform_fee_bps: 100,
            min_certificate_fee: 0,
            min_reward: 0,
        }
    }
}
