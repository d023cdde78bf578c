//! Graph vertices.

use std::any::{self, Any};
use std::cmp::Ordering;
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{self, AtomicUsize};

use crate::error::{ElementNotFoundError, NodeError};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of a node.
///
/// Every constructed node receives a fresh identifier. Identifiers can only
/// be obtained from a node, so a `NodeId<T>` always names some `Node<T>`,
/// though that node may have been dropped since. The value type is part of
/// the identifier, so nodes can only be connected to nodes with the same
/// value type.
pub struct NodeId<T> {
    index: usize,
    marker: PhantomData<fn() -> T>,
}

impl<T> NodeId<T> {
    /// Allocate an unused identifier.
    ///
    /// The counter wraps around after `usize::MAX` allocations.
    fn fresh() -> Self {
        NodeId {
            index: NEXT_ID.fetch_add(1, atomic::Ordering::Relaxed),
            marker: PhantomData,
        }
    }

    /// Get the numeric value of the identifier.
    pub fn index(self) -> usize {
        self.index
    }
}

impl<T> Clone for NodeId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeId<T> {}

impl<T> fmt::Debug for NodeId<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.index).finish()
    }
}

impl<T> Eq for NodeId<T> {}

impl<T> Hash for NodeId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state)
    }
}

impl<T> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Types that identify a `Node<T>`.
pub trait AsNodeId<T> {
    fn node_id(&self) -> NodeId<T>;
}

impl<T> AsNodeId<T> for NodeId<T> {
    fn node_id(&self) -> NodeId<T> {
        *self
    }
}

impl<T> AsNodeId<T> for Node<T> {
    fn node_id(&self) -> NodeId<T> {
        self.id
    }
}

/// Graph vertex.
///
/// A node holds a value and a set of one-way connections to other nodes.
/// Connections are stored as node identities: a node does not own or
/// borrow the nodes it points to, and connecting `a` to `b` does not
/// connect `b` to `a`. Graphs with values of different types use a
/// value type that covers all of them, such as an enum or `Box<dyn Any>`.
///
/// Equality and hashing use the identity of the node, so two nodes with
/// equal values are distinct.
///
/// ```
/// use adjnode::Node;
///
/// let mut a = Node::new("a");
/// let b = Node::new("b");
/// a.add_adjacent(&b);
///
/// assert!(a.is_adjacent(&b));
/// assert!(!b.is_adjacent(&a));
/// ```
#[derive(Debug)]
pub struct Node<T> {
    id: NodeId<T>,
    value: T,
    adjacents: Adjacents<T>,
}

impl<T> Node<T> {
    /// Construct a node without connections.
    pub fn new(value: T) -> Self {
        Node {
            id: NodeId::fresh(),
            value,
            adjacents: Adjacents::default(),
        }
    }

    /// Construct a node from an optional value.
    ///
    /// Returns `NodeError::MissingValue` when `value` is `None`.
    pub fn try_new(value: Option<T>) -> Result<Self, NodeError> {
        value.map(Node::new).ok_or(NodeError::MissingValue)
    }

    /// Get the identity of the node.
    pub fn id(&self) -> NodeId<T> {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Add a one-way connection from this node to `other`.
    ///
    /// `other` is not modified. Adding an existing connection has no
    /// effect. Returns `true` iff the connection was not present before.
    pub fn add_adjacent<N>(&mut self, other: &N) -> bool
    where
        N: AsNodeId<T> + ?Sized,
    {
        self.adjacents.inner.insert(other.node_id())
    }

    /// Remove the one-way connection from this node to `other`.
    ///
    /// If the nodes are strongly connected, the connection from `other`
    /// to this node is kept.
    pub fn remove_adjacent<N>(&mut self, other: &N) -> Result<(), ElementNotFoundError>
    where
        N: AsNodeId<T> + ?Sized,
    {
        if self.adjacents.inner.remove(&other.node_id()) {
            Ok(())
        } else {
            Err(ElementNotFoundError::connection())
        }
    }

    /// Get the nodes that this node is connected to.
    pub fn adjacents(&self) -> &Adjacents<T> {
        &self.adjacents
    }

    /// Returns `true` if this node has a connection to `other`.
    pub fn is_adjacent<N>(&self, other: &N) -> bool
    where
        N: AsNodeId<T> + ?Sized,
    {
        self.adjacents.contains(other)
    }

    /// Get the number of outgoing connections.
    pub fn degree(&self) -> usize {
        self.adjacents.len()
    }
}

/// Connection methods for values of arbitrary type.
///
/// These methods accept any value and check at run time whether it is a
/// `Node<T>` or a `NodeId<T>`, the same targets that the statically typed
/// methods accept.
impl<T> Node<T>
where
    T: 'static,
{
    /// Add a one-way connection to `other`, which must be a node.
    ///
    /// Returns `NodeError::TypeMismatch` if `other` is neither a `Node<T>`
    /// nor a `NodeId<T>`. The connections are left unchanged in that case.
    pub fn try_add_adjacent<V>(&mut self, other: &V) -> Result<bool, NodeError>
    where
        V: Any,
    {
        let id = dyn_node_id::<T>(other).ok_or_else(|| NodeError::TypeMismatch {
            found: any::type_name::<V>(),
            expected: any::type_name::<Node<T>>(),
        })?;

        Ok(self.adjacents.inner.insert(id))
    }

    /// Remove the one-way connection to `other`.
    ///
    /// A value that is not a node cannot be a connection, so it is
    /// reported as `NodeError::ElementNotFound` like any other missing
    /// connection.
    pub fn try_remove_adjacent<V>(&mut self, other: &V) -> Result<(), NodeError>
    where
        V: Any,
    {
        match dyn_node_id::<T>(other) {
            Some(id) => self.remove_adjacent(&id).map_err(Into::into),
            None => Err(ElementNotFoundError::connection().into()),
        }
    }

    /// Returns `true` if `other` is a node that this node is connected to.
    pub fn is_adjacent_dyn<V>(&self, other: &V) -> bool
    where
        V: Any,
    {
        dyn_node_id::<T>(other).map_or(false, |id| self.is_adjacent(&id))
    }
}

fn dyn_node_id<T>(value: &dyn Any) -> Option<NodeId<T>>
where
    T: 'static,
{
    match value.downcast_ref::<Node<T>>() {
        Some(node) => Some(node.id),
        None => value.downcast_ref::<NodeId<T>>().copied(),
    }
}

/// Clone the node.
///
/// The clone is a new vertex with a fresh identity, a copy of the value,
/// and the same connections. A connection of the node to itself becomes a
/// connection of the clone to itself.
impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let id = NodeId::fresh();
        let mut adjacents = self.adjacents.clone();
        if adjacents.inner.remove(&self.id) {
            adjacents.inner.insert(id);
        }

        Node {
            id,
            value: self.value.clone(),
            adjacents,
        }
    }
}

impl<T> Eq for Node<T> {}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::new(value)
    }
}

impl<T> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Adjacency set of a node.
///
/// This is a read-only view of the identities of the nodes that a node is
/// connected to. Iteration order is unspecified.
pub struct Adjacents<T> {
    inner: HashSet<NodeId<T>>,
}

impl<T> Adjacents<T> {
    /// Returns `true` if `node` is in the set.
    pub fn contains<N>(&self, node: &N) -> bool
    where
        N: AsNodeId<T> + ?Sized,
    {
        self.inner.contains(&node.node_id())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get an iterator over the identities in the set.
    pub fn iter(&self) -> Iter<T> {
        Iter(self.inner.iter())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> Clone for Adjacents<T> {
    fn clone(&self) -> Self {
        Adjacents {
            inner: self.inner.clone(),
        }
    }
}

impl<T> fmt::Debug for Adjacents<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T> Default for Adjacents<T> {
    fn default() -> Self {
        Adjacents {
            inner: HashSet::new(),
        }
    }
}

impl<T> Eq for Adjacents<T> {}

impl<T> PartialEq for Adjacents<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> PartialEq<HashSet<NodeId<T>>> for Adjacents<T> {
    fn eq(&self, other: &HashSet<NodeId<T>>) -> bool {
        self.inner == *other
    }
}

impl<T> PartialEq<Adjacents<T>> for HashSet<NodeId<T>> {
    fn eq(&self, other: &Adjacents<T>) -> bool {
        *self == other.inner
    }
}

impl<'a, T> From<&'a Adjacents<T>> for HashSet<NodeId<T>> {
    fn from(adjacents: &'a Adjacents<T>) -> Self {
        adjacents.inner.clone()
    }
}

/// Iterator over the identities in an adjacency set.
pub struct Iter<'a, T>(hash_set::Iter<'a, NodeId<T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeId<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Adjacents<T> {
    type Item = NodeId<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
