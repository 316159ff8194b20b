//! Window module: the node arena, mask propagation and event dispatch.
//!
//! - [`WindowTree`]: owns every node; attach, subscribe, dispatch, draw
//! - [`WindowId`]: generational handle to a node
//! - [`Node`]: parent link, owned children, aggregated [`EventMask`](crate::EventMask)

mod tree;

pub use tree::{Node, WindowId, WindowTree};
