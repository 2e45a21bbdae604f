//! Runtime polymorphism over a closed set of shapes.
//!
//! A [`ShapeCollection`] owns boxed [`Shape`] trait objects, draws them
//! through dynamic dispatch and drops them on release. Every draw and
//! every cleanup step is reported to an [`Observer`].

pub mod circle;
pub mod collection;
pub mod driver;
pub mod error;
pub mod observer;
pub mod rectangle;
pub mod scene;
pub mod shape;

pub use circle::Circle;
pub use collection::{CollectionState, ShapeCollection};
pub use error::ShapeError;
pub use observer::{Console, Event, Observer, Transcript};
pub use rectangle::Rectangle;
pub use scene::{Scene, ShapeDescriptor};
pub use shape::{Shape, ShapeKind};
