//! An unbalanced BST whose nodes keep a pointer to their parent. Nothing is ever rotated so the
//! shape of the tree depends entirely on the order keys were inserted in.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.iterative_search(&5));
//!
//! for key in [5, 7, 10, 3, 4, 6, 11] {
//!     assert!(tree.insert(key));
//! }
//! assert!(tree.iterative_search(&5));
//!
//! // Keys are unique.
//! assert!(!tree.insert(5));
//!
//! assert_eq!(tree.to_string(), "5(3()(4))(7(6)(10()(11)))");
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 6, 7, 10, 11]);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert!(tree.delete_key(&5));
//! assert_eq!(tree.to_string(), "6(3()(4))(7()(10()(11)))");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::ptr::NonNull;

use log::{debug, trace};

use crate::queue::Queue;
use crate::stack::Stack;

/// An unbalanced Binary Search Tree of unique keys. This can be used for inserting, searching, and
/// deleting keys and for walking them in order or level by level.
pub struct Tree<K> {
    // This is a `Link` instead of an `Option<Box<Node>>` so that children can point back at their
    // parent without the parent having to stay put.
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // A tree built from sorted keys is one long chain so this can't recurse.
    fn drop(&mut self) {
        let Some(root) = self.root.take().0 else {
            return;
        };

        let mut pending = vec![root];
        let mut freed = 0usize;
        while let Some(node) = pending.pop() {
            // SAFETY: Every node is owned by exactly one link (the root or its parent's left/right)
            // and each of those links is read exactly once here, so nothing is freed twice. Nodes
            // were allocated using `Box::new` (in `Link::new_node`) so this is well aligned, etc.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            pending.extend(node.left.0);
            pending.extend(node.right.0);
            freed += 1;
        }
        debug!("dropped tree of {freed} nodes");
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    /// Deep-clones every node, copying each child into the same position under its parent's copy.
    fn clone(&self) -> Self {
        let Some(root) = self.root() else {
            return Self::new();
        };
        // If a key's `clone` panics part way, `copy` still owns everything linked so far.
        let copy = Self {
            root: Link::new_node(root.key.clone(), Link(None)),
        };

        let mut pending = vec![(root, copy.root)];
        while let Some((source, mut link)) = pending.pop() {
            let parent = link;
            let Some(node) = link.node_mut() else {
                continue;
            };
            if let Some(left) = source.left() {
                node.left = Link::new_node(left.key.clone(), parent);
                pending.push((left, node.left));
            }
            if let Some(right) = source.right() {
                node.right = Link::new_node(right.key.clone(), parent);
                pending.push((right, node.right));
            }
        }
        copy
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

/// Renders the tree with parentheses showing its structure. A node prints its key and, if it has
/// any child, its left and right subtrees each wrapped in parentheses (empty when that child is
/// missing). An empty tree renders as nothing.
///
/// ```
/// use unbalanced_bst::Tree;
///
/// let tree: Tree<_> = [6, 3, 10, 4].into_iter().collect();
/// assert_eq!(tree.to_string(), "6(3()(4))(10)");
/// ```
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => root.render(f),
            None => Ok(()),
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts every key, skipping the ones already in the tree.
impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: Link(None) }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Inserts `key` into the tree. Returns `false` and leaves the tree untouched if the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.count(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let Some(mut current) = self.root.0 else {
            trace!("inserting into an empty tree, new node becomes the root");
            self.root = Link::new_node(key, Link(None));
            return true;
        };

        loop {
            // SAFETY: `current` was read out of a link owned by this tree so it points at a live
            // node. We hold `&mut self` so there are no other references into the tree.
            let node = unsafe { current.as_mut() };
            let child = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
            let next = child.0;
            match next {
                Some(next) => current = next,
                None => {
                    *child = Link::new_node(key, Link(Some(current)));
                    return true;
                }
            }
        }
    }

    /// Whether `key` is in the tree. Walks down from the root without recursing.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.iterative_search(&1));
    /// assert!(!tree.iterative_search(&42));
    /// ```
    pub fn iterative_search(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find_node(key).is_some()
    }

    /// Deletes `key` from the tree. Returns `false` and leaves the tree untouched if the key isn't
    /// present.
    ///
    /// When the key's node has two children it stays in place and takes over the key of its
    /// in-order successor, whose node is the one that actually gets freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.delete_key(&2));
    /// assert!(!tree.iterative_search(&2));
    /// assert!(!tree.delete_key(&2));
    /// assert_eq!(tree.to_string(), "3(1)()");
    /// ```
    pub fn delete_key(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let Some(target) = self.find_node(key) else {
            return false;
        };
        // SAFETY: `find_node` only returns live nodes of this tree. The reference doesn't outlive
        // this statement so it can't alias anything `splice` touches.
        let (left, right) = unsafe {
            let node = target.as_ref();
            (node.left, node.right)
        };

        let removed = match (left.0, right.0) {
            (None, None) => {
                trace!("deleting a leaf");
                self.splice(target, Link(None));
                target
            }
            (Some(_), None) => {
                trace!("deleting a node with only a left child");
                self.splice(target, left);
                target
            }
            (None, Some(_)) => {
                trace!("deleting a node with only a right child");
                self.splice(target, right);
                target
            }
            (Some(_), Some(right_child)) => {
                trace!("deleting a node with two children, promoting its in-order successor");
                let successor = Node::leftmost(right_child);
                // SAFETY: `leftmost` returns a live node of this tree.
                let successor_right = unsafe { successor.as_ref() }.right;
                // The successor has no left child so its right subtree can take its place.
                self.splice(successor, successor_right);
                // SAFETY: The successor lives in the target's right subtree so these are two
                // distinct live nodes and the two mutable references don't alias.
                unsafe {
                    std::mem::swap(
                        &mut (*target.as_ptr()).key,
                        &mut (*successor.as_ptr()).key,
                    )
                };
                successor
            }
        };

        // SAFETY: `splice` pointed whatever owned `removed` somewhere else and handed its only
        // possible child over, so nothing in the tree references it anymore. It was allocated
        // using `Box::new` (in `Link::new_node`).
        unsafe { drop(Box::from_raw(removed.as_ptr())) };
        true
    }

    /// The number of nodes in the tree. Counted without recursing since the walks size their
    /// scratch space with it.
    pub fn count(&self) -> usize {
        let mut pending: Vec<_> = self.root().into_iter().collect();
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left());
            pending.extend(node.right());
        }
        count
    }

    /// The number of nodes on the longest path from the root down to a leaf. A single node has a
    /// height of 1 and an empty tree a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Visits every key in ascending order, recursing down the tree.
    pub fn inorder_walk<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        if let Some(root) = self.root() {
            root.inorder_walk(&mut visit);
        }
    }

    /// Visits every key in ascending order without recursing. See [`Tree::iter`].
    pub fn iterative_inorder_walk<F>(&self, visit: F)
    where
        F: FnMut(&K),
    {
        self.iter().for_each(visit);
    }

    /// Visits every key level by level, left to right within a level. See [`Tree::levels`].
    pub fn walk_by_levels<F>(&self, visit: F)
    where
        F: FnMut(&K),
    {
        self.levels().for_each(visit);
    }

    /// Iterates over the keys in ascending order. The walk keeps the ancestors it has yet to
    /// return to on a [`Stack`] sized to the number of nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 7, 3, 4, 6].into_iter().collect();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 6, 7]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Iterates over the keys breadth first. The walk keeps the nodes it has yet to visit in a
    /// [`Queue`].
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 7, 3, 4, 6].into_iter().collect();
    /// assert_eq!(tree.levels().copied().collect::<Vec<_>>(), [5, 3, 7, 4, 6]);
    /// ```
    pub fn levels(&self) -> Levels<'_, K> {
        Levels::new(self)
    }

    /// Whether both trees hold exactly the same keys, regardless of shape. Two empty trees are
    /// similar.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    /// let mut other: Tree<_> = [3, 2, 1].into_iter().collect();
    /// assert!(tree.is_similar(&other));
    ///
    /// other.insert(4);
    /// assert!(!tree.is_similar(&other));
    /// ```
    pub fn is_similar(&self, other: &Self) -> bool
    where
        K: Ord,
    {
        if self.is_empty() && other.is_empty() {
            return true;
        }
        // Keys are unique so same count + containment means the same keys.
        self.count() == other.count() && self.levels().all(|key| other.iterative_search(key))
    }

    /// Whether the trees share at least one key. Always `false` if either tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [1, 2, 3].into_iter().collect();
    /// let other: Tree<_> = [3, 4].into_iter().collect();
    /// assert!(tree.is_identical_key(&other));
    /// assert!(!tree.is_identical_key(&Tree::new()));
    /// ```
    pub fn is_identical_key(&self, other: &Self) -> bool
    where
        K: Ord,
    {
        !self.is_empty()
            && !other.is_empty()
            && self.levels().any(|key| other.iterative_search(key))
    }

    /// Writes the parenthesized rendering of the tree (see the `Display` implementation) to `out`.
    pub fn print<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
        K: fmt::Display,
    {
        write!(out, "{self}")
    }

    fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }

    /// Finds the node holding `key` without recursing.
    fn find_node(&self, key: &K) -> Option<NonNull<Node<K>>>
    where
        K: Ord,
    {
        let mut current = self.root.0;
        while let Some(ptr) = current {
            // SAFETY: `ptr` was read out of a link owned by this tree so it points at a live node.
            // We hold `&self` so nobody is mutating the tree.
            let node = unsafe { ptr.as_ref() };
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.0,
                Ordering::Equal => return Some(ptr),
                Ordering::Greater => node.right.0,
            };
        }
        None
    }

    /// Points whatever owns `node` (its parent's left or right link, or the root) at
    /// `replacement` instead, and makes `node`'s parent the parent of `replacement`. `node` itself
    /// isn't modified or freed but is no longer reachable from the tree.
    fn splice(&mut self, node: NonNull<Node<K>>, mut replacement: Link<K>) {
        // SAFETY: Callers only pass live nodes of this tree.
        let mut parent = unsafe { node.as_ref() }.parent;

        if let Some(child) = replacement.node_mut() {
            child.parent = parent;
        }
        match parent.node_mut() {
            None => self.root = replacement,
            // Compare links, not keys: the parent's key says nothing about which side `node` is on
            // once keys have been moved around.
            Some(parent) if parent.left.0 == Some(node) => parent.left = replacement,
            Some(parent) => {
                debug_assert_eq!(parent.right.0, Some(node), "parent doesn't own its child");
                parent.right = replacement;
            }
        }
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order. Created by [`Tree::iter`].
pub struct Iter<'a, K> {
    /// Ancestors whose key comes after everything left to visit beneath `current`. The root sits
    /// at the bottom as a sentinel and is popped right after the largest key is visited.
    ancestors: Stack<&'a Node<K>>,
    current: Option<&'a Node<K>>,
    /// Whether `current` was just reached through a right link (or is the root) and so its left
    /// subtree still needs visiting.
    go_left_next: bool,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        // Besides the sentinel, only nodes on a single root-to-leaf path are ever stacked.
        let count = tree.count();
        let mut ancestors = Stack::bounded(count);
        let current = tree.root();
        if let Some(root) = current {
            ancestors
                .push(root)
                .expect("a non-empty tree has room for its root");
        }
        trace!("in-order walk over {count} nodes");

        Self {
            ancestors,
            current,
            go_left_next: true,
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ancestors.is_empty() {
            return None;
        }
        let mut current = self.current?;

        if self.go_left_next {
            while let Some(left) = current.left() {
                self.ancestors
                    .push(current)
                    .expect("in-order stack is sized to the node count");
                current = left;
            }
        }

        let key = &current.key;
        match current.right() {
            Some(right) => {
                self.current = Some(right);
                self.go_left_next = true;
            }
            None => {
                let ancestor = self
                    .ancestors
                    .pop()
                    .expect("in-order stack holds the root until the largest key");
                self.current = Some(ancestor);
                self.go_left_next = false;
            }
        }
        Some(key)
    }
}

/// An iterator over the keys of a [`Tree`] in level order. Created by [`Tree::levels`].
pub struct Levels<'a, K> {
    frontier: Queue<&'a Node<K>>,
}

impl<'a, K> Levels<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        // Queued nodes never contain one another so there are at most as many as there are
        // leaves, which is at most half the nodes (rounded up).
        let count = tree.count();
        let mut frontier = Queue::bounded((count + 1) / 2);
        if let Some(root) = tree.root() {
            frontier
                .enqueue(root)
                .expect("a non-empty tree has room for its root");
        }
        trace!("level-order walk over {count} nodes");

        Self { frontier }
    }
}

impl<'a, K> Iterator for Levels<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.frontier.is_empty() {
            return None;
        }
        let node = self
            .frontier
            .dequeue()
            .expect("checked the frontier isn't empty");

        for child in [node.left(), node.right()].into_iter().flatten() {
            self.frontier
                .enqueue(child)
                .expect("level-order queue is sized to the widest possible frontier");
        }
        Some(&node.key)
    }
}

struct Link<K>(Option<NonNull<Node<K>>>);

impl<K> Clone for Link<K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for Link<K> {}

impl<K> Link<K> {
    /// Allocates a childless node and links to it. The node is freed by `Tree::delete_key` or
    /// `Tree::drop`.
    fn new_node(key: K, parent: Self) -> Self {
        let node = Box::new(Node {
            key,
            left: Link(None),
            right: Link(None),
            parent,
        });
        Link(Some(NonNull::from(Box::leak(node))))
    }

    fn node(&self) -> Option<&Node<K>> {
        // SAFETY: If the pointer is not `None` then it is a valid `Node` owned by the tree. Because
        // we take `&self` here, the borrow can't outlive the link it came from. Callers mustn't
        // hold it across a mutation of the tree.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    fn node_mut(&mut self) -> Option<&mut Node<K>> {
        // SAFETY: See `node`. Links are copied around freely so callers must also make sure no
        // other reference to this node is alive.
        unsafe { self.0.as_mut().map(|ptr| ptr.as_mut()) }
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }
}

struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
    /// Never owns anything. Only used to relink the tree during deletion.
    parent: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    /// Follows left links from `node` as far as they go.
    fn leftmost(mut node: NonNull<Self>) -> NonNull<Self> {
        // SAFETY: Callers pass live nodes and every link out of a live node is live.
        while let Some(left) = unsafe { node.as_ref() }.left.0 {
            node = left;
        }
        node
    }

    fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    fn inorder_walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&K),
    {
        if let Some(left) = self.left() {
            left.inorder_walk(visit);
        }
        visit(&self.key);
        if let Some(right) = self.right() {
            right.inorder_walk(visit);
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        K: fmt::Display,
    {
        write!(f, "{}", self.key)?;
        if self.left().is_none() && self.right().is_none() {
            return Ok(());
        }

        f.write_str("(")?;
        if let Some(left) = self.left() {
            left.render(f)?;
        }
        f.write_str(")(")?;
        if let Some(right) = self.right() {
            right.render(f)?;
        }
        f.write_str(")")
    }
}
