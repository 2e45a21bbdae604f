//! The `Shape` capability and the base part every variant embeds.

use std::fmt;
use std::rc::Rc;

use crate::observer::{Event, Observer};

pub(crate) mod sealed {
    pub trait Sealed {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Circle => f.write_str("Circle"),
            ShapeKind::Rectangle => f.write_str("Rectangle"),
        }
    }
}

/// Something that can be drawn.
///
/// The set of shapes is closed: only types in this crate can implement it,
/// and the trait itself has no constructor.
///
/// ```compile_fail
/// use shapes::{Shape, ShapeKind};
///
/// #[derive(Debug)]
/// struct Triangle;
///
/// impl Shape for Triangle {
///     fn kind(&self) -> ShapeKind { ShapeKind::Circle }
///     fn draw(&self) {}
/// }
/// ```
pub trait Shape: sealed::Sealed + fmt::Debug {
    fn kind(&self) -> ShapeKind;

    fn draw(&self);
}

/// Base part of a shape. Reports base cleanup when dropped, which happens
/// after the owning variant's own `Drop` has run.
pub(crate) struct ShapeCore {
    kind: ShapeKind,
    observer: Rc<dyn Observer>,
}

impl ShapeCore {
    pub(crate) fn new(kind: ShapeKind, observer: Rc<dyn Observer>) -> Self {
        ShapeCore { kind, observer }
    }

    pub(crate) fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub(crate) fn emit(&self, event: Event) {
        self.observer.record(event);
    }
}

impl fmt::Debug for ShapeCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeCore").field("kind", &self.kind).finish()
    }
}

impl Drop for ShapeCore {
    fn drop(&mut self) {
        self.observer.record(Event::BaseDropped { kind: self.kind });
    }
}
