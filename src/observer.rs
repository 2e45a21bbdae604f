//! Everything a run makes visible goes through an [`Observer`].
//!
//! Shapes hold an `Rc<dyn Observer>` and report drawing and cleanup to it.
//! [`Console`] prints the events, [`Transcript`] keeps them for inspection.

use std::cell::RefCell;
use std::fmt;

use colored::Colorize;

use crate::shape::ShapeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A variant ran its drawing action.
    Drew { kind: ShapeKind },
    /// Variant-specific cleanup finished.
    Dropped { kind: ShapeKind },
    /// Base cleanup finished. Always follows the matching `Dropped`.
    BaseDropped { kind: ShapeKind },
    Notice(String),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Drew { kind } => write!(f, "drawing a {kind}...\ndone drawing."),
            Event::Dropped { kind } => write!(f, "{kind} dropped: variant cleanup finished."),
            Event::BaseDropped { kind } => {
                write!(f, "Shape base cleanup ran after the {kind} cleanup.")
            }
            Event::Notice(text) => f.write_str(text),
        }
    }
}

pub trait Observer {
    fn record(&self, event: Event);
}

/// Prints every event to stdout.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Console
    }
}

impl Observer for Console {
    fn record(&self, event: Event) {
        let text = event.to_string();
        match event {
            Event::Drew { .. } => println!("{}", text.green()),
            Event::Dropped { .. } => println!("{}", text.yellow()),
            Event::BaseDropped { .. } => println!("{}", text.dimmed()),
            Event::Notice(_) => println!("{}", text.bold()),
        }
    }
}

/// Records events in arrival order.
#[derive(Debug, Default)]
pub struct Transcript {
    events: RefCell<Vec<Event>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Kinds of every `Drew` event, in order.
    pub fn drawn_kinds(&self) -> Vec<ShapeKind> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Drew { kind } => Some(*kind),
                _ => None,
            })
            .collect()
    }
}

impl Observer for Transcript {
    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}
