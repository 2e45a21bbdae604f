//! An ordered collection that exclusively owns its shapes.
//!
//! Lifecycle: `Empty -> Populated -> Cleared`. `Cleared` is terminal.

use std::fmt;
use std::rc::Rc;

use crate::error::ShapeError;
use crate::observer::Observer;
use crate::scene::Scene;
use crate::shape::{Shape, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    Empty,
    Populated,
    Cleared,
}

impl fmt::Display for CollectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionState::Empty => f.write_str("empty"),
            CollectionState::Populated => f.write_str("populated"),
            CollectionState::Cleared => f.write_str("cleared"),
        }
    }
}

pub struct ShapeCollection {
    shapes: Vec<Box<dyn Shape>>,
    state: CollectionState,
    observer: Rc<dyn Observer>,
}

impl ShapeCollection {
    pub fn new(observer: Rc<dyn Observer>) -> Self {
        ShapeCollection {
            shapes: Vec::new(),
            state: CollectionState::Empty,
            observer,
        }
    }

    /// Appends the default pair: a circle, then a rectangle.
    pub fn populate(&mut self) -> Result<usize, ShapeError> {
        self.populate_from(&Scene::default())
    }

    pub fn populate_from(&mut self, scene: &Scene) -> Result<usize, ShapeError> {
        if self.state != CollectionState::Empty {
            return Err(ShapeError::invalid_transition("populate", self.state));
        }
        if scene.is_empty() {
            return Err(ShapeError::EmptyScene);
        }

        let observer = &self.observer;
        self.shapes
            .extend(scene.shapes.iter().map(|d| d.build(observer)));
        self.state = CollectionState::Populated;
        Ok(self.shapes.len())
    }

    /// Draws every shape in insertion order. Returns how many were drawn.
    pub fn draw_all(&self) -> usize {
        for shape in &self.shapes {
            shape.draw();
        }
        self.shapes.len()
    }

    /// Drops every owned shape and returns how many were released.
    ///
    /// A no-op on an empty or already cleared collection.
    pub fn release(&mut self) -> usize {
        let released = self.shapes.len();
        self.shapes.clear();
        if self.state == CollectionState::Populated {
            self.state = CollectionState::Cleared;
        }
        released
    }

    pub fn state(&self) -> CollectionState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn kinds(&self) -> Vec<ShapeKind> {
        self.shapes.iter().map(|s| s.kind()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> {
        self.shapes.iter().map(|s| s.as_ref())
    }
}

impl fmt::Debug for ShapeCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeCollection")
            .field("state", &self.state)
            .field("shapes", &self.shapes)
            .finish()
    }
}
