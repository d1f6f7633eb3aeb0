//! Arena DOM: parsing, traversal, tree surgery, and serialization.

mod arena;
mod serialize;
mod tree_sink;

pub use arena::{Attribute, FicDom, Node, NodeData, NodeId};
pub use serialize::serialize_node;
pub use tree_sink::parse_fic;
