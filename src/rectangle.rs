use std::rc::Rc;

use crate::observer::{Event, Observer};
use crate::shape::{sealed, Shape, ShapeCore, ShapeKind};

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    core: ShapeCore,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, observer: Rc<dyn Observer>) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
            core: ShapeCore::new(ShapeKind::Rectangle, observer),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl sealed::Sealed for Rectangle {}

impl Shape for Rectangle {
    fn kind(&self) -> ShapeKind {
        self.core.kind()
    }

    fn draw(&self) {
        self.core.emit(Event::Drew { kind: ShapeKind::Rectangle });
    }
}

impl Drop for Rectangle {
    fn drop(&mut self) {
        self.core.emit(Event::Dropped { kind: ShapeKind::Rectangle });
    }
}
