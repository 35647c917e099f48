mod gesture;
mod resolver;
mod session;

pub use gesture::*;
pub use resolver::*;
pub use session::*;
