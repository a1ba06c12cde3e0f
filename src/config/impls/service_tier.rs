use std::fmt;
use crate::config::enums::service_tier::ServiceTier;

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceTier::free => write!(f, "free"),
            ServiceTier::pro => write!(f, "pro"),
            ServiceTier::enterprise => write!(f, "enterprise"),
        }
    }
}

impl ServiceTier {
    pub fn all() -> [ServiceTier; 3] {
        [ServiceTier::free, ServiceTier::pro, ServiceTier::enterprise]
    }
}
