//! Decorator: wrap a component to extend its result without changing its type.

/// Capability shared by the concrete component and every decorator.
pub trait Operation {
    fn operation(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteComponent;

impl Operation for ConcreteComponent {
    fn operation(&self) -> String {
        "Basic operation".to_string()
    }
}

/// Wraps an inner component and brackets its result with a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator<C> {
    label: String,
    inner: C,
}

impl<C: Operation> Decorator<C> {
    pub fn new(label: impl Into<String>, inner: C) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Operation> Operation for Decorator<C> {
    fn operation(&self) -> String {
        format!("{} ({})", self.label, self.inner.operation())
    }
}

impl<T: Operation + ?Sized> Operation for Box<T> {
    fn operation(&self) -> String {
        (**self).operation()
    }
}
