use crate::{
    arena::{Arena, NodeIdx},
    tree::AvlMap,
};

/// An in-order iterator of owned map entries, as the map `into_iter()`
/// impl.
///
/// Each yielded entry vacates its arena slot; dropping the iterator early
/// drops the remaining entries along with the arena.
#[derive(Debug)]
pub struct OwnedIter<K, V> {
    arena: Arena<K, V>,
    stack: Vec<NodeIdx>,
}

impl<K, V> OwnedIter<K, V> {
    pub(crate) fn new(map: AvlMap<K, V>) -> Self {
        let root = map.root;
        let mut this = Self {
            arena: map.arena,
            stack: vec![],
        };

        // Descend down the left side of the tree.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: NodeIdx) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.arena[v].left;
        }
    }
}

impl<K, V> Iterator for OwnedIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.arena.free(idx);

        // Descend down the left side of the right hand child of this node,
        // if any.
        if let Some(right) = node.right {
            self.push_subtree(right);
        }

        Some((node.key, node.value))
    }
}
