//! Shared, swappable resolver configuration.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::date::CalendarDate;
use crate::resolver::ZodiacResolver;
use crate::sign::{Chinese, Western};
use crate::system::WesternSystem;
use crate::ZodiacError;

/// A resolver that can be reconfigured while other threads query it.
///
/// Readers take a snapshot of the current resolver and work on it, so a
/// query observes either the old or the new configuration, never a mix.
/// Rebuilds are serialized and happen outside the read/write lock; only the
/// final pointer swap takes the write lock.
#[derive(Debug)]
pub struct ZodiacService {
    current: RwLock<Arc<ZodiacResolver>>,
    rebuild: Mutex<()>,
}

impl ZodiacService {
    /// Creates a service over a validated resolver.
    ///
    /// # Errors
    /// Returns the first validation failure of `system`.
    pub fn new(system: WesternSystem) -> Result<Self, ZodiacError> {
        ZodiacResolver::try_new(system).map(Self::wrap)
    }

    /// Wraps an existing resolver.
    ///
    /// # Errors
    /// Returns the resolver's validation error if it failed to build.
    pub fn from_resolver(resolver: ZodiacResolver) -> Result<Self, ZodiacError> {
        match resolver.error() {
            Some(error) => Err(error.clone()),
            None => Ok(Self::wrap(resolver)),
        }
    }

    fn wrap(resolver: ZodiacResolver) -> Self {
        Self {
            current: RwLock::new(Arc::new(resolver)),
            rebuild: Mutex::new(()),
        }
    }

    /// The resolver active right now.
    pub fn snapshot(&self) -> Arc<ZodiacResolver> {
        // The lock only guards a pointer, which is never left half-written
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Validates `system` and makes it the active configuration.
    ///
    /// # Errors
    /// Returns the validation failure; the previous configuration stays active.
    pub fn set_system(&self, system: WesternSystem) -> Result<(), ZodiacError> {
        let _rebuild = self.rebuild.lock().unwrap_or_else(PoisonError::into_inner);

        let current = self.snapshot();
        if current.is_ready() && *current.system() == system {
            debug!(system = system.name(), "system unchanged, keeping resolver");
            return Ok(());
        }

        let resolver = match ZodiacResolver::try_new(system) {
            Ok(resolver) => resolver,
            Err(error) => {
                warn!(%error, "rejected system change, keeping previous resolver");
                return Err(error);
            },
        };
        let name = resolver.system().name();

        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(resolver);
        info!(system = name, "zodiac system switched");
        Ok(())
    }

    /// The active system.
    pub fn system(&self) -> WesternSystem {
        self.snapshot().system().clone()
    }

    /// See [`ZodiacResolver::resolve_western`].
    ///
    /// # Errors
    /// Same as [`ZodiacResolver::resolve_western`].
    pub fn resolve_western(&self, date: &CalendarDate) -> Result<Western, ZodiacError> {
        self.snapshot().resolve_western(date)
    }

    /// See [`ZodiacResolver::resolve_chinese`].
    ///
    /// # Errors
    /// Same as [`ZodiacResolver::resolve_chinese`].
    pub fn resolve_chinese(&self, date: &CalendarDate) -> Result<Chinese, ZodiacError> {
        self.snapshot().resolve_chinese(date)
    }

    /// See [`ZodiacResolver::range_for`].
    pub fn range_for(&self, sign: Western) -> Option<(CalendarDate, CalendarDate)> {
        self.snapshot().range_for(sign)
    }

    /// See [`ZodiacResolver::is_in_range`].
    pub fn is_in_range(&self, date: &CalendarDate, sign: Western) -> bool {
        self.snapshot().is_in_range(date, sign)
    }
}

impl Default for ZodiacService {
    fn default() -> Self {
        Self::wrap(ZodiacResolver::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    #[test]
    fn test_set_system_swaps_resolver() {
        let service = ZodiacService::default();
        let birthday = date(1991, 4, 16);
        assert_eq!(service.resolve_western(&birthday).unwrap(), Western::Aries);

        service.set_system(WesternSystem::Sidereal).unwrap();
        assert_eq!(service.system(), WesternSystem::Sidereal);
        assert_eq!(service.resolve_western(&birthday).unwrap(), Western::Aries);

        service.set_system(WesternSystem::EqualLength).unwrap();
        assert_eq!(service.resolve_western(&birthday).unwrap(), Western::Aries);
        assert_eq!(service.resolve_western(&date(1991, 5, 20)).unwrap(), Western::Cetus);
    }

    #[test]
    fn test_failed_set_keeps_previous() {
        let service = ZodiacService::new(WesternSystem::AstronomicalIau).unwrap();
        let before = service.snapshot();

        let broken = WesternSystem::Custom(vec![range(Western::Leo, (1, 1), (30, 1))]);
        assert!(matches!(service.set_system(broken), Err(ZodiacError::MissingDays(_))));

        assert_eq!(service.system(), WesternSystem::AstronomicalIau);
        assert!(Arc::ptr_eq(&before, &service.snapshot()));
    }

    #[test]
    fn test_from_resolver_rejects_failed() {
        let broken = WesternSystem::Custom(vec![range(Western::Leo, (1, 1), (30, 1))]);
        let failed = ZodiacResolver::new(broken.clone());

        assert!(matches!(
            ZodiacService::from_resolver(failed),
            Err(ZodiacError::MissingDays(_))
        ));

        // Setting the same broken system again still reports the error
        let service = ZodiacService::from_resolver(ZodiacResolver::default()).unwrap();
        assert!(matches!(service.set_system(broken.clone()), Err(ZodiacError::MissingDays(_))));
        assert!(matches!(service.set_system(broken), Err(ZodiacError::MissingDays(_))));
        assert!(service.snapshot().is_ready());
        assert_eq!(service.resolve_western(&date(2000, 1, 5)).unwrap(), Western::Capricorn);
    }

    #[test]
    fn test_same_system_is_a_no_op() {
        let service = ZodiacService::default();
        let before = service.snapshot();
        service.set_system(WesternSystem::Tropical).unwrap();
        assert!(Arc::ptr_eq(&before, &service.snapshot()));
    }

    #[test]
    fn test_snapshot_outlives_swap() {
        let service = ZodiacService::default();
        let old = service.snapshot();
        service.set_system(WesternSystem::AstronomicalIau).unwrap();

        assert_eq!(old.system(), &WesternSystem::Tropical);
        assert_eq!(old.resolve_western_day(1, 12).unwrap(), Western::Sagittarius);
        assert_eq!(service.snapshot().resolve_western_day(1, 12).unwrap(), Western::Ophiuchus);
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ZodiacService>();
    }
}
