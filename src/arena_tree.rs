//! An index-based, DOM-like tree.
//!
//! Nodes live in an [`id_arena::Arena`] and refer to each other by [`Id`]
//! only: the parent, the first and last child and both siblings. Children
//! are therefore an ordered, doubly-linked list hanging off the parent, and
//! every neighbour or parent lookup is O(1) without any reference cycle.
//!
//! Nodes are never freed; a detached node stays in the arena, unreachable
//! from the root.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A stable identifier for a node in an [`Arena`].
pub struct Id<T>(id_arena::Id<Node<T>>);

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Id<T> {
        *self
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.index())
    }
}

impl<T> Id<T> {
    /// The position of the node in its arena, in allocation order.
    pub fn index(self) -> usize {
        self.0.index()
    }
}

/// The arena all nodes of a tree are allocated in.
pub type Arena<T> = id_arena::Arena<Node<T>>;

/// A node inside a tree, with its links and the data it holds.
pub struct Node<T> {
    parent: Option<Id<T>>,
    previous_sibling: Option<Id<T>>,
    next_sibling: Option<Id<T>>,
    first_child: Option<Id<T>>,
    last_child: Option<Id<T>>,

    /// The data held by the node.
    pub data: T,
}

/// Prints the data only; the links would loop.
impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("data", &self.data).finish()
    }
}

impl<T> Node<T> {
    /// Create a detached node from its associated data.
    pub fn new(data: T) -> Node<T> {
        Node {
            parent: None,
            previous_sibling: None,
            next_sibling: None,
            first_child: None,
            last_child: None,
            data,
        }
    }

    pub fn parent(&self) -> Option<Id<T>> {
        self.parent
    }

    pub fn first_child(&self) -> Option<Id<T>> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<Id<T>> {
        self.last_child
    }

    pub fn previous_sibling(&self) -> Option<Id<T>> {
        self.previous_sibling
    }

    pub fn next_sibling(&self) -> Option<Id<T>> {
        self.next_sibling
    }
}

/// Allocate a detached node holding `data`.
pub fn alloc<T>(arena: &mut Arena<T>, data: T) -> Id<T> {
    Id(arena.alloc(Node::new(data)))
}

impl<T> Id<T> {
    #[inline]
    pub fn get(self, arena: &Arena<T>) -> &Node<T> {
        &arena[self.0]
    }

    #[inline]
    pub fn data(self, arena: &Arena<T>) -> &T {
        &arena[self.0].data
    }

    #[inline]
    pub fn data_mut(self, arena: &mut Arena<T>) -> &mut T {
        &mut arena[self.0].data
    }

    pub fn parent(self, arena: &Arena<T>) -> Option<Id<T>> {
        arena[self.0].parent
    }

    pub fn first_child(self, arena: &Arena<T>) -> Option<Id<T>> {
        arena[self.0].first_child
    }

    pub fn last_child(self, arena: &Arena<T>) -> Option<Id<T>> {
        arena[self.0].last_child
    }

    pub fn previous_sibling(self, arena: &Arena<T>) -> Option<Id<T>> {
        arena[self.0].previous_sibling
    }

    pub fn next_sibling(self, arena: &Arena<T>) -> Option<Id<T>> {
        arena[self.0].next_sibling
    }

    /// Detach a node from its parent and siblings, joining the former
    /// neighbours to each other. Children are not affected.
    pub fn detach(self, arena: &mut Arena<T>) {
        let node = &mut arena[self.0];
        let parent = node.parent.take();
        let previous_sibling = node.previous_sibling.take();
        let next_sibling = node.next_sibling.take();

        match next_sibling {
            Some(next) => arena[next.0].previous_sibling = previous_sibling,
            None => {
                if let Some(parent) = parent {
                    arena[parent.0].last_child = previous_sibling;
                }
            }
        }

        match previous_sibling {
            Some(previous) => arena[previous.0].next_sibling = next_sibling,
            None => {
                if let Some(parent) = parent {
                    arena[parent.0].first_child = next_sibling;
                }
            }
        }
    }

    /// Append a new child to this node, after existing children.
    pub fn append(self, arena: &mut Arena<T>, new_child: Id<T>) {
        new_child.detach(arena);

        let last_child = arena[self.0].last_child;
        {
            let child = &mut arena[new_child.0];
            child.parent = Some(self);
            child.previous_sibling = last_child;
        }
        match last_child {
            Some(last) => {
                debug_assert!(arena[last.0].next_sibling.is_none());
                arena[last.0].next_sibling = Some(new_child);
            }
            None => {
                debug_assert!(arena[self.0].first_child.is_none());
                arena[self.0].first_child = Some(new_child);
            }
        }
        arena[self.0].last_child = Some(new_child);
    }

    /// Prepend a new child to this node, before existing children.
    pub fn prepend(self, arena: &mut Arena<T>, new_child: Id<T>) {
        new_child.detach(arena);

        let first_child = arena[self.0].first_child;
        {
            let child = &mut arena[new_child.0];
            child.parent = Some(self);
            child.next_sibling = first_child;
        }
        match first_child {
            Some(first) => {
                debug_assert!(arena[first.0].previous_sibling.is_none());
                arena[first.0].previous_sibling = Some(new_child);
            }
            None => {
                debug_assert!(arena[self.0].last_child.is_none());
                arena[self.0].last_child = Some(new_child);
            }
        }
        arena[self.0].first_child = Some(new_child);
    }

    /// Insert a new sibling after this node.
    pub fn insert_after(self, arena: &mut Arena<T>, new_sibling: Id<T>) {
        new_sibling.detach(arena);

        let parent = arena[self.0].parent;
        let next_sibling = arena[self.0].next_sibling;
        {
            let sibling = &mut arena[new_sibling.0];
            sibling.parent = parent;
            sibling.previous_sibling = Some(self);
            sibling.next_sibling = next_sibling;
        }
        match next_sibling {
            Some(next) => {
                debug_assert!(arena[next.0].previous_sibling == Some(self));
                arena[next.0].previous_sibling = Some(new_sibling);
            }
            None => {
                if let Some(parent) = parent {
                    debug_assert!(arena[parent.0].last_child == Some(self));
                    arena[parent.0].last_child = Some(new_sibling);
                }
            }
        }
        arena[self.0].next_sibling = Some(new_sibling);
    }

    /// This node and its ancestors, nearest first.
    ///
    /// Call `.skip(1)` on the iterator to skip the node itself.
    pub fn ancestors(self, arena: &Arena<T>) -> Ancestors<'_, T> {
        Ancestors(Some((arena, self)))
    }

    /// This node and the siblings after it.
    pub fn following_siblings(self, arena: &Arena<T>) -> FollowingSiblings<'_, T> {
        FollowingSiblings(Some((arena, self)))
    }

    /// This node and the siblings before it, nearest first.
    pub fn preceding_siblings(self, arena: &Arena<T>) -> PrecedingSiblings<'_, T> {
        PrecedingSiblings(Some((arena, self)))
    }

    pub fn children(self, arena: &Arena<T>) -> Children<'_, T> {
        Children(arena[self.0].first_child.map(|c| (arena, c)))
    }

    pub fn reverse_children(self, arena: &Arena<T>) -> ReverseChildren<'_, T> {
        ReverseChildren(arena[self.0].last_child.map(|c| (arena, c)))
    }

    /// This node and its descendants, in tree order.
    pub fn descendants(self, arena: &Arena<T>) -> Descendants<'_, T> {
        Descendants(self.traverse(arena))
    }

    /// Start and end edges of this node and its descendants, in tree order.
    pub fn traverse(self, arena: &Arena<T>) -> Traverse<'_, T> {
        Traverse {
            arena,
            root: self,
            next: Some(NodeEdge::Start(self)),
        }
    }
}

macro_rules! axis_iterator {
    (#[$attr:meta] $name:ident : $next:ident) => {
        #[$attr]
        pub struct $name<'a, T>(Option<(&'a Arena<T>, Id<T>)>);

        impl<'a, T> Iterator for $name<'a, T> {
            type Item = Id<T>;

            fn next(&mut self) -> Option<Id<T>> {
                let (arena, id) = self.0.take()?;
                self.0 = arena[id.0].$next.map(|n| (arena, n));
                Some(id)
            }
        }
    };
}

axis_iterator! {
    #[doc = "An iterator over a node and its ancestors."]
    Ancestors: parent
}

axis_iterator! {
    #[doc = "An iterator over a node and the siblings before it."]
    PrecedingSiblings: previous_sibling
}

axis_iterator! {
    #[doc = "An iterator over a node and the siblings after it."]
    FollowingSiblings: next_sibling
}

axis_iterator! {
    #[doc = "An iterator over the children of a node."]
    Children: next_sibling
}

axis_iterator! {
    #[doc = "An iterator over the children of a node, in reverse order."]
    ReverseChildren: previous_sibling
}

/// Whether a traversal is entering or leaving a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEdge<T> {
    /// Yielded before the node's descendants.
    Start(T),

    /// Yielded after the node's descendants.
    End(T),
}

/// An iterator over the start and end edges of a node and its descendants.
pub struct Traverse<'a, T> {
    arena: &'a Arena<T>,
    root: Id<T>,
    next: Option<NodeEdge<Id<T>>>,
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = NodeEdge<Id<T>>;

    fn next(&mut self) -> Option<NodeEdge<Id<T>>> {
        let item = self.next.take()?;
        self.next = match item {
            NodeEdge::Start(id) => match self.arena[id.0].first_child {
                Some(child) => Some(NodeEdge::Start(child)),
                None => Some(NodeEdge::End(id)),
            },
            NodeEdge::End(id) if id == self.root => None,
            NodeEdge::End(id) => {
                let node = &self.arena[id.0];
                match (node.next_sibling, node.parent) {
                    (Some(sibling), _) => Some(NodeEdge::Start(sibling)),
                    (None, Some(parent)) => Some(NodeEdge::End(parent)),
                    (None, None) => panic!("tree modified during iteration"),
                }
            }
        };
        Some(item)
    }
}

/// An iterator over a node and its descendants, in tree order.
pub struct Descendants<'a, T>(Traverse<'a, T>);

impl<'a, T> Iterator for Descendants<'a, T> {
    type Item = Id<T>;

    fn next(&mut self) -> Option<Id<T>> {
        loop {
            match self.0.next()? {
                NodeEdge::Start(id) => return Some(id),
                NodeEdge::End(_) => {}
            }
        }
    }
}
