pub mod node;

pub use node::CategoryNode;
