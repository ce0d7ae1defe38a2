mod arena;
mod node;
mod raw_bst;

pub(crate) mod traverse;

pub(crate) use node::Link;
pub(crate) use raw_bst::RawBst;
