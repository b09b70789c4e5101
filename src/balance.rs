use crate::{arena::NodeIdx, tree::AvlMap};

/// Classification of a balance violation by the directions of the two
/// deepest edges on the violating path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    /// z -> left -> left; a single right rotation on z restores balance.
    LeftLeft,
    /// z -> left -> right; a left rotation on y, then a right rotation on z.
    LeftRight,
    /// z -> right -> right; a single left rotation on z.
    RightRight,
    /// z -> right -> left; a right rotation on y, then a left rotation on z.
    RightLeft,
}

impl<K, V> AvlMap<K, V> {
    /// The cached height of `n`, or 0 for an absent node.
    fn height_of(&self, n: Option<NodeIdx>) -> u8 {
        n.map(|v| self.arena[v].height).unwrap_or_default()
    }

    /// The height of `n` as derived from its children's cached heights.
    fn computed_height(&self, n: NodeIdx) -> u8 {
        let node = &self.arena[n];
        self.height_of(node.left).max(self.height_of(node.right)) + 1
    }

    /// Re-derive and store the cached height of `n` from its children.
    fn refresh_height(&mut self, n: NodeIdx) {
        self.arena[n].height = self.computed_height(n);
    }

    /// Whether the subtrees of `n` satisfy the balance invariant, judged by
    /// the cached child heights.
    fn is_balanced_at(&self, n: NodeIdx) -> bool {
        let node = &self.arena[n];
        let left = self.height_of(node.left) as i16;
        let right = self.height_of(node.right) as i16;
        (left - right).abs() <= 1
    }

    /// The child of `n` with the greater cached height, preferring the
    /// right child when both are of equal height.
    fn taller_child(&self, n: NodeIdx) -> Option<NodeIdx> {
        let node = &self.arena[n];
        if self.height_of(node.left) > self.height_of(node.right) {
            node.left
        } else {
            node.right
        }
    }

    /// Classify the violation at `z` by which sides the subtree child `y`
    /// and grandchild `x` hang off.
    fn classify(&self, z: NodeIdx, y: NodeIdx, x: NodeIdx) -> Violation {
        let y_is_left = self.arena[z].left == Some(y);
        let x_is_left = self.arena[y].left == Some(x);

        match (y_is_left, x_is_left) {
            (true, true) => Violation::LeftLeft,
            (true, false) => Violation::LeftRight,
            (false, false) => Violation::RightRight,
            (false, true) => Violation::RightLeft,
        }
    }

    /// Restore the balance invariant after an insertion grew the subtree
    /// under `parent` by the just-attached `node`.
    ///
    /// Ascends one generation per call. The walk stops as soon as an
    /// ancestor's height is unaffected, and a single (possibly double)
    /// rotation always restores the pre-insertion subtree height, so no
    /// ancestor above a rotation point needs revisiting.
    pub(crate) fn insert_fix(&mut self, parent: NodeIdx, node: NodeIdx) {
        let Some(grand) = self.arena[parent].parent else {
            return;
        };

        // If the grandparent absorbed the growth without a height change,
        // no ancestor further up can be affected.
        if self.computed_height(grand) == self.arena[grand].height {
            return;
        }
        self.refresh_height(grand);

        if self.is_balanced_at(grand) {
            self.insert_fix(grand, parent);
            return;
        }

        // The grandparent is the deepest unbalanced ancestor z. The
        // violating path runs through its taller child y and grandchild x,
        // which are exactly the two nodes the walk ascended through.
        let z = grand;
        let y = self.taller_child(z).unwrap();
        let x = self.taller_child(y).unwrap();
        debug_assert_eq!(y, parent);
        debug_assert_eq!(x, node);

        match self.classify(z, y, x) {
            Violation::LeftLeft => self.rotate_right_refresh(z),
            Violation::LeftRight => {
                self.rotate_left_refresh(y);
                self.rotate_right_refresh(z);
            }
            Violation::RightRight => self.rotate_left_refresh(z),
            Violation::RightLeft => {
                self.rotate_right_refresh(y);
                self.rotate_left_refresh(z);
            }
        }

        debug_assert!(self.is_balanced_at(z));
    }

    /// Restore the balance invariant after a removal, ascending from `n`,
    /// the parent of the spliced-out node.
    ///
    /// Unlike the insertion walk, a rotation here shrinks the rotated
    /// subtree by one level and the imbalance can cascade, so after
    /// rotating the walk always continues from the pre-rotation parent; it
    /// only stops once an ancestor's height is unaffected.
    pub(crate) fn remove_fix(&mut self, n: Option<NodeIdx>) {
        let Some(n) = n else { return };
        let parent = self.arena[n].parent;

        if !self.is_balanced_at(n) {
            let c = self.taller_child(n).unwrap();
            let g = self.removal_grandchild(n, c);

            // The removal-family rotations rewire pointers only: the
            // heights of the rotated nodes are recomputed here, deepest
            // demoted node first, so each refresh reads already-correct
            // child heights.
            match self.classify(n, c, g) {
                Violation::LeftLeft => {
                    self.rotate_right(n);
                    self.refresh_height(n);
                    self.refresh_height(c);
                }
                Violation::LeftRight => {
                    self.rotate_left(c);
                    self.rotate_right(n);
                    self.refresh_height(n);
                    self.refresh_height(c);
                    self.refresh_height(g);
                }
                Violation::RightRight => {
                    self.rotate_left(n);
                    self.refresh_height(n);
                    self.refresh_height(c);
                }
                Violation::RightLeft => {
                    self.rotate_right(c);
                    self.rotate_left(n);
                    self.refresh_height(n);
                    self.refresh_height(c);
                    self.refresh_height(g);
                }
            }

            self.remove_fix(parent);
            return;
        }

        // n itself is balanced: stop once its height is unchanged by the
        // removal, otherwise absorb the change and keep ascending.
        let height = self.computed_height(n);
        if height == self.arena[n].height {
            return;
        }
        self.arena[n].height = height;
        self.remove_fix(parent);
    }

    /// Select the grandchild used to classify a removal-side violation at
    /// `n`, whose taller child is `c`.
    ///
    /// The taller child of `c` when one exists; on a tie, the grandchild on
    /// the same side as the n -> c edge, so the violation classifies as
    /// zig-zig and resolves with a single rotation.
    fn removal_grandchild(&self, n: NodeIdx, c: NodeIdx) -> NodeIdx {
        let left = self.arena[c].left;
        let right = self.arena[c].right;
        let left_height = self.height_of(left);
        let right_height = self.height_of(right);

        if left_height == right_height {
            if self.arena[n].left == Some(c) {
                left.unwrap()
            } else {
                right.unwrap()
            }
        } else if right_height > left_height {
            right.unwrap()
        } else {
            left.unwrap()
        }
    }

    /// Left rotate the subtree rooted at `z`, promoting its right child `y`
    /// into z's place:
    ///
    /// ```text
    ///      z
    ///     / \                               y
    ///    1   y         Rotate Left        /   \
    ///       / \      --------------->    z     3
    ///      2   3                        / \
    ///                                  1   2
    /// ```
    ///
    /// Pointer rewiring only: the cached heights of `z` and `y` are left
    /// untouched for the caller to recompute in whatever order its
    /// classification logic requires.
    ///
    /// # Panics
    ///
    /// Panics if `z` has no right child (cannot be rotated).
    pub(crate) fn rotate_left(&mut self, z: NodeIdx) {
        let y = self.arena[z].right.unwrap();
        let parent = self.arena[z].parent;

        // y takes z's slot under its former parent, or becomes the root.
        self.arena[y].parent = parent;
        match parent {
            Some(p) => {
                if self.arena[p].left == Some(z) {
                    self.arena[p].left = Some(y);
                } else {
                    self.arena[p].right = Some(y);
                }
            }
            None => self.root = Some(y),
        }

        // y's former left child moves across to become z's right child.
        let moved = self.arena[y].left;
        self.arena[z].right = moved;
        if let Some(m) = moved {
            self.arena[m].parent = Some(z);
        }

        // z becomes y's left child.
        self.arena[y].left = Some(z);
        self.arena[z].parent = Some(y);
    }

    /// Right rotate the subtree rooted at `z`, promoting its left child `y`
    /// into z's place:
    ///
    /// ```text
    ///        z
    ///       / \                             y
    ///      y   3     Rotate Right         /   \
    ///     / \      --------------->      1     z
    ///    1   2                                / \
    ///                                        2   3
    /// ```
    ///
    /// Pointer rewiring only, as [`rotate_left()`].
    ///
    /// # Panics
    ///
    /// Panics if `z` has no left child (cannot be rotated).
    ///
    /// [`rotate_left()`]: Self::rotate_left
    pub(crate) fn rotate_right(&mut self, z: NodeIdx) {
        let y = self.arena[z].left.unwrap();
        let parent = self.arena[z].parent;

        self.arena[y].parent = parent;
        match parent {
            Some(p) => {
                if self.arena[p].left == Some(z) {
                    self.arena[p].left = Some(y);
                } else {
                    self.arena[p].right = Some(y);
                }
            }
            None => self.root = Some(y),
        }

        let moved = self.arena[y].right;
        self.arena[z].left = moved;
        if let Some(m) = moved {
            self.arena[m].parent = Some(z);
        }

        self.arena[y].right = Some(z);
        self.arena[z].parent = Some(y);
    }

    /// [`rotate_left()`] followed by a height refresh of the rotated pair,
    /// demoted `z` first.
    ///
    /// Sufficient for the insertion fixup, which never inspects another
    /// node's height after rotating.
    ///
    /// [`rotate_left()`]: Self::rotate_left
    pub(crate) fn rotate_left_refresh(&mut self, z: NodeIdx) {
        let y = self.arena[z].right.unwrap();
        self.rotate_left(z);
        self.refresh_height(z);
        self.refresh_height(y);
    }

    /// [`rotate_right()`] followed by a height refresh of the rotated pair,
    /// demoted `z` first.
    ///
    /// [`rotate_right()`]: Self::rotate_right
    pub(crate) fn rotate_right_refresh(&mut self, z: NodeIdx) {
        let y = self.arena[z].left.unwrap();
        self.rotate_right(z);
        self.refresh_height(z);
        self.refresh_height(y);
    }
}
