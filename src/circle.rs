use std::rc::Rc;

use crate::observer::{Event, Observer};
use crate::shape::{sealed, Shape, ShapeCore, ShapeKind};

#[derive(Debug)]
pub struct Circle {
    x: i32,
    y: i32,
    radius: i32,
    core: ShapeCore,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: i32, observer: Rc<dyn Observer>) -> Self {
        Circle {
            x,
            y,
            radius,
            core: ShapeCore::new(ShapeKind::Circle, observer),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl sealed::Sealed for Circle {}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        self.core.kind()
    }

    fn draw(&self) {
        self.core.emit(Event::Drew { kind: ShapeKind::Circle });
    }
}

impl Drop for Circle {
    fn drop(&mut self) {
        self.core.emit(Event::Dropped { kind: ShapeKind::Circle });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Transcript;

    #[test]
    fn test_fields_kept_from_construction() {
        let transcript = Rc::new(Transcript::new());
        let circle = Circle::new(1, 3, 5, transcript);
        assert_eq!((circle.x(), circle.y(), circle.radius()), (1, 3, 5));
        assert_eq!(circle.kind(), ShapeKind::Circle);
    }

    #[test]
    fn test_draw_direct_and_through_trait_object() {
        let transcript = Rc::new(Transcript::new());
        let circle = Circle::new(0, 0, 1, transcript.clone());
        circle.draw();

        let boxed: Box<dyn Shape> = Box::new(circle);
        boxed.draw();

        assert_eq!(
            transcript.drawn_kinds(),
            vec![ShapeKind::Circle, ShapeKind::Circle]
        );
    }

    #[test]
    fn test_variant_cleanup_precedes_base_cleanup() {
        let transcript = Rc::new(Transcript::new());
        drop(Circle::new(1, 3, 5, transcript.clone()));

        assert_eq!(
            transcript.events(),
            vec![
                Event::Dropped { kind: ShapeKind::Circle },
                Event::BaseDropped { kind: ShapeKind::Circle },
            ]
        );
    }
}
