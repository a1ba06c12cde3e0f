use crate::config::enums::service_tier::ServiceTier;
use crate::config::structs::tier_limits::TierLimits;
use crate::config::structs::tiers_config::TiersConfig;

impl TiersConfig {
    pub fn limits(&self, tier: ServiceTier) -> &TierLimits {
        match tier {
            ServiceTier::free => &self.free,
            ServiceTier::pro => &self.pro,
            ServiceTier::enterprise => &self.enterprise,
        }
    }
}
