mod hello;
mod version;

pub use hello::*;
pub use version::*;
