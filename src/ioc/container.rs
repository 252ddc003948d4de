//! The IoC container

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use super::Instance;
use super::error::ContainerError;
use super::registration::{Registration, SingletonRegistration, TransientRegistration};

/// A simple IoC container.
///
/// Keys are unique: registering the same key twice without an intervening
/// [`dispose`](Container::dispose) is an error, never an overwrite. After
/// disposal the container is empty and fully reusable, including for
/// previously used keys.
#[derive(Default)]
pub struct Container {
    registrations: IndexMap<String, Box<dyn Registration>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a registration to a key, returning the container for
    /// chaining. Use this for custom strategies; for the built-in ones,
    /// [`register_transient`](Container::register_transient) and
    /// [`register_singleton`](Container::register_singleton) are shorter.
    pub fn add_registration(
        &mut self,
        key: impl Into<String>,
        registration: Box<dyn Registration>,
    ) -> Result<&mut Self, ContainerError> {
        let key = key.into();

        if self.registrations.contains_key(&key) {
            return Err(ContainerError::DuplicateKey(key));
        }

        self.registrations.insert(key, registration);
        Ok(self)
    }

    /// Binds a factory to a key: every resolution of the key calls
    /// `factory(container, key)` and returns the fresh instance.
    pub fn register_transient(
        &mut self,
        key: impl Into<String>,
        factory: impl Fn(&Container, &str) -> Instance + 'static,
    ) -> Result<&mut Self, ContainerError> {
        self.add_registration(key, Box::new(TransientRegistration::new(factory)))
    }

    /// Binds a lazily created singleton to a key: the factory runs on the
    /// first resolution and the instance is cached for all later ones.
    pub fn register_singleton(
        &mut self,
        key: impl Into<String>,
        factory: impl Fn(&Container, &str) -> Instance + 'static,
    ) -> Result<&mut Self, ContainerError> {
        self.add_registration(key, Box::new(SingletonRegistration::new(factory)))
    }

    /// Like [`register_singleton`](Container::register_singleton), with a
    /// hook invoked with the instance on container disposal, provided the
    /// instance was actually created by then.
    pub fn register_singleton_with_disposer(
        &mut self,
        key: impl Into<String>,
        factory: impl Fn(&Container, &str) -> Instance + 'static,
        disposer: impl FnOnce(Instance) + 'static,
    ) -> Result<&mut Self, ContainerError> {
        self.add_registration(
            key,
            Box::new(SingletonRegistration::with_disposer(factory, disposer)),
        )
    }

    /// Resolves a key to an instance by delegating to its registration.
    pub fn resolve(&self, key: &str) -> Result<Instance, ContainerError> {
        let registration = self
            .registrations
            .get(key)
            .ok_or_else(|| ContainerError::UnknownKey(key.to_string()))?;

        Ok(registration.resolve(self, key))
    }

    /// Disposes every registration, then empties the container. The
    /// container can be used again afterwards.
    pub fn dispose(&mut self) {
        for (key, registration) in &mut self.registrations {
            debug!(%key, "disposing registration");
            registration.dispose();
        }

        self.registrations.clear();
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("keys", &self.registrations.keys().collect::<Vec<_>>())
            .finish()
    }
}
