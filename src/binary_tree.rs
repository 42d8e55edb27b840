use crate::error::{Error, Result};
use crate::tree::Key;
use std::fmt;

/// An unbalanced binary search tree. Values equal to a node go into its left subtree, so
/// the shape depends only on the insertion order.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// Ascending in-order iterator over an `OrderedTree`.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> OrderedTree<T> {
    pub fn new() -> Self {
        OrderedTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of edges on the longest root-to-leaf path, -1 for an empty tree.
    pub fn height(&self) -> i64 {
        let mut height = -1;
        let mut stack: Vec<(&Node<T>, i64)> = self.root.as_deref().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    pub fn iter<'a>(&'a self) -> Iter<'a, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// All stored values in non-decreasing order. Walks the whole tree on every call.
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        values.extend(self.iter());
        values
    }
}

impl<T: Ord> OrderedTree<T> {
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value <= node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    /// The value at rank `k` counting down from the largest (`k == 1` is the maximum,
    /// `k == len` the minimum).
    ///
    /// The sorted sequence is rebuilt from scratch on each call, so this is O(n).
    pub fn kth_largest(&self, k: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(Error::EmptyTree);
        }
        let sorted = self.in_order();
        if k < 1 || k > sorted.len() {
            return Err(Error::InvalidRank {
                rank: k,
                len: sorted.len(),
            });
        }
        Ok(sorted[sorted.len() - k])
    }
}

impl<T: Key> OrderedTree<T> {
    /// The stored value nearest to `target`.
    ///
    /// Descends from the root towards `target`, replacing the candidate only when a node
    /// is strictly closer. On a tie in distance the node visited first wins.
    pub fn find_closest(&self, target: T) -> Result<&T> {
        let root = self.root.as_deref().ok_or(Error::EmptyTree)?;
        let mut closest = &root.value;
        let mut best = target.distance(closest);
        let mut cur = Some(root);
        while let Some(node) = cur {
            let distance = target.distance(&node.value);
            if distance < best {
                closest = &node.value;
                best = distance;
            }
            cur = match target.cmp(&node.value) {
                std::cmp::Ordering::Less => node.left.as_deref(),
                std::cmp::Ordering::Greater => node.right.as_deref(),
                std::cmp::Ordering::Equal => None,
            };
        }
        Ok(closest)
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = OrderedTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// Boxes would otherwise drop recursively and a skewed tree would blow the stack.
impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("values", &self.in_order())
            .finish()
    }
}
