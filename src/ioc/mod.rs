//! A minimal inversion-of-control container
//!
//! [`Container`] maps opaque string keys to [`Registration`] strategies.
//! Transient registrations build a fresh instance on every resolution;
//! singleton registrations build one lazily and cache it. Disposing the
//! container runs every registration's disposal hook (a singleton only
//! disposes an instance that was actually created) and empties the
//! container, which can then be populated again.
//!
//! The container is single-threaded: instances are handed out as
//! [`Rc<dyn Any>`](std::rc::Rc) and callers downcast to the concrete type.
//!
//! # Modules
//!
//! - [`container`]: the container itself
//! - [`registration`]: the registration trait and its two built-in strategies
//! - [`error`]: container errors

pub mod container;
pub mod error;
pub mod registration;

pub use container::Container;
pub use error::ContainerError;
pub use registration::{Registration, SingletonRegistration, TransientRegistration};

use std::any::Any;
use std::rc::Rc;

/// An instance produced by a registration.
pub type Instance = Rc<dyn Any>;
