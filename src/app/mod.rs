pub mod lookup;
pub mod render;
pub mod session;

pub use lookup::lookup_once;
pub use session::{Command, FormSession};
