#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;

mod error;
mod json_key;
mod public_key;
mod util;

pub use error::*;
pub use json_key::*;
pub use public_key::*;
pub use util::*;
