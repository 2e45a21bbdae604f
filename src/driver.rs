//! The sample run: build the default collection, draw it, release it.

use std::rc::Rc;

use crate::collection::ShapeCollection;
use crate::error::ShapeError;
use crate::observer::{Event, Observer};

pub const RELEASE_NOTICE: &str = "About to release the collection. Each shape is owned by \
exactly one Box, so clearing the Vec drops every Box and the shape inside it. \
Each shape runs its own cleanup first and its base cleanup second, and nothing \
has to be freed by hand.";

pub const END_NOTICE: &str = "At end of main()";

pub fn run(observer: Rc<dyn Observer>) -> Result<(), ShapeError> {
    let mut shapes = ShapeCollection::new(Rc::clone(&observer));

    shapes.populate()?;
    shapes.draw_all();

    observer.record(Event::Notice(RELEASE_NOTICE.to_string()));
    shapes.release();

    observer.record(Event::Notice(END_NOTICE.to_string()));
    Ok(())
}
