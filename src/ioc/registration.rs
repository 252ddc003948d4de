//! Registration strategies
//!
//! A [`Registration`] controls how a container key resolves to an instance.
//! The two built-in strategies cover the common cases; custom strategies
//! only need to implement the trait.

use std::cell::RefCell;
use std::rc::Rc;

use super::Instance;
use super::container::Container;

/// Strategy bound to a container key, controlling instance creation,
/// caching and disposal.
pub trait Registration {
    /// Called whenever the owning container resolves this registration's
    /// key. The container itself is passed so factories can resolve their
    /// own dependencies.
    fn resolve(&self, container: &Container, key: &str) -> Instance;

    /// Called when `dispose` is called on the owning container.
    fn dispose(&mut self);
}

/// Builds a fresh instance on every resolution.
///
/// The container keeps no reference to the produced instances; disposing
/// them is up to the caller.
pub struct TransientRegistration {
    factory: Box<dyn Fn(&Container, &str) -> Instance>,
}

impl TransientRegistration {
    pub fn new(factory: impl Fn(&Container, &str) -> Instance + 'static) -> Self {
        Self {
            factory: Box::new(factory),
        }
    }
}

impl Registration for TransientRegistration {
    fn resolve(&self, container: &Container, key: &str) -> Instance {
        (self.factory)(container, key)
    }

    fn dispose(&mut self) {}
}

/// Builds one instance on first resolution and returns the cached instance
/// on every later one, regardless of the key argument.
///
/// The optional disposal hook runs on container disposal, and only if the
/// instance was actually created.
pub struct SingletonRegistration {
    factory: Box<dyn Fn(&Container, &str) -> Instance>,
    disposer: Option<Box<dyn FnOnce(Instance)>>,
    instance: RefCell<Option<Instance>>,
}

impl SingletonRegistration {
    pub fn new(factory: impl Fn(&Container, &str) -> Instance + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            disposer: None,
            instance: RefCell::new(None),
        }
    }

    pub fn with_disposer(
        factory: impl Fn(&Container, &str) -> Instance + 'static,
        disposer: impl FnOnce(Instance) + 'static,
    ) -> Self {
        Self {
            disposer: Some(Box::new(disposer)),
            ..Self::new(factory)
        }
    }
}

impl Registration for SingletonRegistration {
    fn resolve(&self, container: &Container, key: &str) -> Instance {
        {
            let cached = self.instance.borrow();
            if let Some(instance) = cached.as_ref() {
                return Rc::clone(instance);
            }
        }

        // The cache borrow is released before the factory runs, so the
        // factory may resolve other keys on the same container.
        let instance = (self.factory)(container, key);
        *self.instance.borrow_mut() = Some(Rc::clone(&instance));

        instance
    }

    fn dispose(&mut self) {
        let instance = self.instance.borrow_mut().take();

        if let Some(instance) = instance
            && let Some(disposer) = self.disposer.take()
        {
            disposer(instance);
        }
    }
}
