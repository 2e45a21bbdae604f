use std::rc::Rc;

use shapes::driver;
use shapes::{Console, ShapeError};

fn main() -> Result<(), ShapeError> {
    driver::run(Rc::new(Console::new()))
}
