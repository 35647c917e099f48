mod edge;
mod edit;
mod node;
mod snapshot;
mod store;

pub use edge::*;
pub use node::*;
pub use snapshot::*;
pub use store::*;
