/// Stable handle to a node slot in the [`NodeRegistry`](super::NodeRegistry) arena.
///
/// Handles are issued in insertion order, so comparing two ids compares the
/// order in which their variables were added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}
