use crate::policy::{AnyZonePolicy, ZoneBoundPolicy};

static DEFAULT_POLICY: AnyZonePolicy = AnyZonePolicy::new();

/// Process-wide host resolution policies.
///
/// [`Host::b2b`] and [`Host::intranet`] are the sub-policies of [`Host::default_policy`].
#[derive(Debug)]
pub struct Host;

impl Host {
    /// Resolves among all network zones.
    #[must_use]
    pub fn default_policy() -> &'static AnyZonePolicy {
        &DEFAULT_POLICY
    }

    #[must_use]
    pub fn b2b() -> &'static ZoneBoundPolicy {
        DEFAULT_POLICY.b2b()
    }

    #[must_use]
    pub fn intranet() -> &'static ZoneBoundPolicy {
        DEFAULT_POLICY.intranet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bts_domain::NetworkZones;

    #[test]
    fn sub_policies_belong_to_the_default_policy() {
        assert!(std::ptr::eq(Host::b2b(), Host::default_policy().b2b()));
        assert!(std::ptr::eq(Host::intranet(), Host::default_policy().intranet()));
        assert_eq!(Host::b2b().zone(), NetworkZones::B2B);
        assert_eq!(Host::intranet().zone(), NetworkZones::INTRANET);
    }
}
