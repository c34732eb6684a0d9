use crate::error::{PortsideError, Result};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Opaque handle under which every constructed service is cached and shared.
///
/// Callers downcast to the concrete type after retrieval; [`Container::get_as`]
/// does it for them.
pub type ServiceRef = Arc<dyn Any + Send + Sync>;

/// Type-erased nullary provider. [`Container::register`] wraps any
/// `Fn() -> T` into one of these.
type ProviderFn = Box<dyn Fn() -> ServiceRef + Send + Sync>;

#[derive(Default)]
struct Registry {
    providers: HashMap<String, ProviderFn>,
    services: HashMap<String, ServiceRef>,
}

/// Thread-safe dependency injection container.
///
/// Service names map to nullary providers; the first [`get`](Container::get)
/// for a name runs its provider and memoizes the instance for the life of
/// the process. A single read/write lock covers both maps, so reads of
/// already-constructed services stay on the shared path while construction
/// and registration serialize on the exclusive one.
///
/// Clones are shared handles to the same registry.
#[derive(Clone, Default)]
pub struct Container {
    registry: Arc<RwLock<Registry>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `name`, replacing any previous provider
    /// for that name.
    ///
    /// Replacing a provider does not touch an instance that was already
    /// constructed: once a name has been resolved, [`get`](Container::get)
    /// keeps returning the cached instance.
    pub fn register<T, F>(&self, name: impl Into<String>, provider: F) -> &Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let erased: ProviderFn = Box::new(move || Arc::new(provider()) as ServiceRef);
        self.write().providers.insert(name.into(), erased);
        self
    }

    /// Register a singleton provider.
    ///
    /// Alias for [`register`](Container::register): every provider is already
    /// constructed at most once, by the lazy cache in [`get`](Container::get).
    pub fn singleton<T, F>(&self, name: impl Into<String>, provider: F) -> &Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.register(name, provider)
    }

    /// Retrieve the service registered under `name`, constructing it on
    /// first access.
    ///
    /// The provider runs while the exclusive lock is held, so a provider
    /// must not call back into the container; nested dependencies are
    /// captured in the provider closure instead.
    pub fn get(&self, name: &str) -> Result<ServiceRef> {
        {
            let registry = self.read();
            if let Some(service) = registry.services.get(name) {
                return Ok(Arc::clone(service));
            }
            if !registry.providers.contains_key(name) {
                return Err(PortsideError::ServiceNotFound {
                    name: name.to_string(),
                });
            }
        }

        let mut registry = self.write();

        // Another caller may have constructed the service while we waited
        // for the write lock
        if let Some(service) = registry.services.get(name) {
            return Ok(Arc::clone(service));
        }

        let service = match registry.providers.get(name) {
            Some(provider) => provider(),
            None => {
                return Err(PortsideError::ServiceNotFound {
                    name: name.to_string(),
                });
            }
        };

        tracing::debug!(target: "portside::di", service = name, "constructed service");
        registry.services.insert(name.to_string(), Arc::clone(&service));
        Ok(service)
    }

    /// Typed retrieval: [`get`](Container::get) plus a downcast to `T`.
    pub fn get_as<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>> {
        self.get(name)?
            .downcast::<T>()
            .map_err(|_| PortsideError::DowncastFailed {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Whether `name` has a provider or an already-constructed instance.
    pub fn contains(&self, name: &str) -> bool {
        let registry = self.read();
        registry.services.contains_key(name) || registry.providers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.read().providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().providers.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
