//! Serializable shape descriptions.
//!
//! A [`Scene`] lists shapes in draw order. The default scene is the fixed
//! pair the demo uses; other scenes can be parsed from TOML or JSON text:
//!
//! ```toml
//! [[shapes]]
//! kind = "circle"
//! x = 1
//! y = 3
//! radius = 5
//! ```

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::circle::Circle;
use crate::error::ShapeError;
use crate::observer::Observer;
use crate::rectangle::Rectangle;
use crate::shape::{Shape, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeDescriptor {
    Circle { x: i32, y: i32, radius: i32 },
    Rectangle { x: i32, y: i32, width: i32, height: i32 },
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeDescriptor::Circle { .. } => ShapeKind::Circle,
            ShapeDescriptor::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    pub fn build(&self, observer: &Rc<dyn Observer>) -> Box<dyn Shape> {
        match *self {
            ShapeDescriptor::Circle { x, y, radius } => {
                Box::new(Circle::new(x, y, radius, Rc::clone(observer)))
            }
            ShapeDescriptor::Rectangle { x, y, width, height } => {
                Box::new(Rectangle::new(x, y, width, height, Rc::clone(observer)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub shapes: Vec<ShapeDescriptor>,
}

impl Scene {
    pub fn new(shapes: Vec<ShapeDescriptor>) -> Self {
        Scene { shapes }
    }

    pub fn from_toml(content: &str) -> Result<Self, ShapeError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, ShapeError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(vec![
            ShapeDescriptor::Circle { x: 1, y: 3, radius: 5 },
            ShapeDescriptor::Rectangle { x: 8, y: 6, width: 20, height: 25 },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Transcript;

    #[test]
    fn test_default_scene_is_circle_then_rectangle() {
        let scene = Scene::default();
        let kinds: Vec<ShapeKind> = scene.shapes.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![ShapeKind::Circle, ShapeKind::Rectangle]);
    }

    #[test]
    fn test_from_toml() {
        let content = r#"
            [[shapes]]
            kind = "rectangle"
            x = 0
            y = 0
            width = 4
            height = 2

            [[shapes]]
            kind = "circle"
            x = -1
            y = 2
            radius = 7
        "#;

        let scene = Scene::from_toml(content).unwrap();
        assert_eq!(
            scene.shapes,
            vec![
                ShapeDescriptor::Rectangle { x: 0, y: 0, width: 4, height: 2 },
                ShapeDescriptor::Circle { x: -1, y: 2, radius: 7 },
            ]
        );
    }

    #[test]
    fn test_from_json() {
        let content = r#"{"shapes": [{"kind": "circle", "x": 1, "y": 3, "radius": 5}]}"#;
        let scene = Scene::from_json(content).unwrap();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.shapes[0].kind(), ShapeKind::Circle);
    }

    #[test]
    fn test_missing_shapes_table_is_empty_scene() {
        let scene = Scene::from_toml("").unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let content = r#"
            [[shapes]]
            kind = "triangle"
            x = 0
            y = 0
        "#;
        assert!(matches!(Scene::from_toml(content), Err(ShapeError::Toml(_))));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let content = r#"{"shapes": [{"kind": "rectangle", "x": 1, "y": 2, "width": 3}]}"#;
        assert!(matches!(Scene::from_json(content), Err(ShapeError::Json(_))));
    }

    #[test]
    fn test_build_matches_descriptor_kind() {
        let transcript = Rc::new(Transcript::new());
        let observer: Rc<dyn Observer> = transcript.clone();

        for descriptor in Scene::default().shapes {
            let shape = descriptor.build(&observer);
            assert_eq!(shape.kind(), descriptor.kind());
        }
    }
}
