//! Shared callback handles for host-facing events and render hooks.
//!
//! All handles compare by identity (`Arc::ptr_eq`) so args structs that hold
//! them stay cheaply comparable. The default handle is a no-op closure: a
//! host that never wires `on_done` still gets a guarded no-op invocation at
//! the single call site, never a scattered existence check.

use std::sync::Arc;

/// Stable, comparable callback handle for `Fn()`.
#[derive(Clone)]
pub struct Callback {
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.handler)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for Callback {}

/// Stable, comparable callback handle for `Fn(T)`.
///
/// Used for value-carrying notifications such as slide changes.
pub struct CallbackWith<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        (self.handler)(value);
    }
}

impl<T> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_| {})
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T> Eq for CallbackWith<T> {}

/// Stable, comparable render hook handle for `Fn()`.
///
/// Semantically distinct from [`Callback`]: a render slot produces host-side
/// UI (a custom skip/next/done control) rather than reacting to an event.
#[derive(Clone)]
pub struct RenderSlot {
    render: Arc<dyn Fn() + Send + Sync>,
}

impl RenderSlot {
    /// Create a render slot from a closure.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// Execute the render closure.
    pub fn render(&self) {
        (self.render)();
    }
}

impl<F> From<F> for RenderSlot
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(render: F) -> Self {
        Self::new(render)
    }
}

impl PartialEq for RenderSlot {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl Eq for RenderSlot {}

/// Stable, comparable render hook handle for `Fn(T)`.
///
/// Used for per-slide content renderers that receive a slide snapshot.
pub struct RenderSlotWith<T> {
    render: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> RenderSlotWith<T> {
    /// Create a render slot from a closure.
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// Execute the render closure with an input value.
    pub fn render(&self, value: T) {
        (self.render)(value);
    }
}

impl<T, F> From<F> for RenderSlotWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(render: F) -> Self {
        Self::new(render)
    }
}

impl<T> Clone for RenderSlotWith<T> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
        }
    }
}

impl<T> PartialEq for RenderSlotWith<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.render, &other.render)
    }
}

impl<T> Eq for RenderSlotWith<T> {}
