//! Arena-backed statement tree.
//!
//! Groups live in a flat `Vec` addressed by [`GroupId`]; token leaves are
//! indices into the tree's own token vector. Parent links are ids, so the
//! tree has no reference cycles and is cheap to clone or serialize.

use std::fmt;

use myst_lexer::Token;

/// Index into the group arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct GroupId(u32);

impl GroupId {
    /// The root group of every tree.
    pub const ROOT: GroupId = GroupId(0);

    #[inline]
    pub const fn new(index: u32) -> Self {
        GroupId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({})", self.0)
    }
}

/// What a group represents.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKind {
    Root,
    /// Tokens up to and including a `;`.
    Statement,
    /// `(`…`)`, `WHEN`…`THEN`.
    Bracketed,
    /// Begin keyword followed by its body statements.
    Compound,
    /// An `IF` that turned out to be the `IF()` function.
    Expression,
}

/// One entry of a group's child list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Child {
    /// Index into [`Tree::tokens`].
    Token(usize),
    Group(GroupId),
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct GroupData {
    pub(crate) kind: GroupKind,
    pub(crate) parent: Option<GroupId>,
    pub(crate) children: Vec<Child>,
    pub(crate) closed: bool,
}

/// Nested grouping of a token list.
///
/// Depth-first concatenation of the leaves reproduces the scanned input.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    tokens: Vec<Token>,
    groups: Vec<GroupData>,
    valid: bool,
}

impl Tree {
    /// A tree holding only an empty root.
    pub(crate) fn new(tokens: Vec<Token>, valid: bool) -> Self {
        Tree {
            tokens,
            groups: vec![GroupData {
                kind: GroupKind::Root,
                parent: None,
                children: Vec::new(),
                closed: false,
            }],
            valid,
        }
    }

    // ─── Construction ───

    /// Append a new open group as the last child of `parent`.
    pub(crate) fn push_group(&mut self, kind: GroupKind, parent: GroupId) -> GroupId {
        let id = GroupId::new(u32::try_from(self.groups.len()).unwrap_or(u32::MAX));
        self.groups.push(GroupData {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            closed: false,
        });
        self.groups[parent.index()].children.push(Child::Group(id));
        id
    }

    pub(crate) fn push_token(&mut self, group: GroupId, token: usize) {
        self.groups[group.index()].children.push(Child::Token(token));
    }

    pub(crate) fn data(&self, id: GroupId) -> &GroupData {
        &self.groups[id.index()]
    }

    pub(crate) fn data_mut(&mut self, id: GroupId) -> &mut GroupData {
        &mut self.groups[id.index()]
    }

    // ─── Queries ───

    pub fn root(&self) -> GroupRef<'_> {
        GroupRef {
            tree: self,
            id: GroupId::ROOT,
        }
    }

    pub fn group(&self, id: GroupId) -> Option<GroupRef<'_>> {
        (id.index() < self.groups.len()).then_some(GroupRef { tree: self, id })
    }

    /// Every group in creation order, root first.
    pub fn groups(&self) -> impl Iterator<Item = GroupRef<'_>> {
        (0..self.groups.len()).map(move |index| GroupRef {
            tree: self,
            id: GroupId::new(u32::try_from(index).unwrap_or(u32::MAX)),
        })
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether every scanned token was valid.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn to_source(&self) -> String {
        self.to_string()
    }

    /// Visit the token leaves below `id` in document order.
    fn walk_tokens(&self, id: GroupId, mut visit: impl FnMut(&Token) -> fmt::Result) -> fmt::Result {
        let mut stack = vec![self.data(id).children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some(Child::Token(index)) => visit(&self.tokens[*index])?,
                Some(Child::Group(group)) => stack.push(self.data(*group).children.iter()),
                None => {
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.walk_tokens(GroupId::ROOT, |token| f.write_str(token.text()))
    }
}

/// Borrowed view of one group.
#[derive(Clone, Copy)]
pub struct GroupRef<'t> {
    tree: &'t Tree,
    id: GroupId,
}

impl<'t> GroupRef<'t> {
    #[inline]
    pub fn id(self) -> GroupId {
        self.id
    }

    #[inline]
    pub fn kind(self) -> GroupKind {
        self.tree.data(self.id).kind
    }

    pub fn parent(self) -> Option<GroupRef<'t>> {
        self.tree.data(self.id).parent.map(|id| GroupRef {
            tree: self.tree,
            id,
        })
    }

    pub fn children(self) -> impl Iterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |child| NodeRef::new(tree, *child))
    }

    /// Whether the group's end sequence was matched. The root never is.
    #[inline]
    pub fn is_closed(self) -> bool {
        self.tree.data(self.id).closed
    }

    #[inline]
    pub fn is_expression(self) -> bool {
        self.kind() == GroupKind::Expression
    }

    /// Holds a non-junk token, directly or in a nested group.
    pub fn contains_sql(self) -> bool {
        let mut pending = vec![self.id];
        while let Some(id) = pending.pop() {
            for child in &self.tree.data(id).children {
                match *child {
                    Child::Token(index) if !self.tree.tokens[index].is_junk() => return true,
                    Child::Token(_) => {}
                    Child::Group(group) => pending.push(group),
                }
            }
        }
        false
    }

    /// First child that is a group or a non-junk token.
    pub fn first_significant(self) -> Option<NodeRef<'t>> {
        self.children().find(|node| !node.is_junk())
    }

    /// Concatenated text of every leaf below this group.
    pub fn text(self) -> String {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.tree.walk_tokens(self.id, |token| {
            text.push_str(token.text());
            Ok(())
        });
        text
    }
}

impl fmt::Debug for GroupRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// A child seen through a tree: a token leaf or a nested group.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'t> {
    Token(&'t Token),
    Group(GroupRef<'t>),
}

impl<'t> NodeRef<'t> {
    fn new(tree: &'t Tree, child: Child) -> Self {
        match child {
            Child::Token(index) => NodeRef::Token(&tree.tokens[index]),
            Child::Group(id) => NodeRef::Group(GroupRef { tree, id }),
        }
    }

    /// Whitespace or comment leaf. Groups are never junk.
    pub fn is_junk(self) -> bool {
        matches!(self, NodeRef::Token(token) if token.is_junk())
    }

    pub fn as_token(self) -> Option<&'t Token> {
        match self {
            NodeRef::Token(token) => Some(token),
            NodeRef::Group(_) => None,
        }
    }

    pub fn as_group(self) -> Option<GroupRef<'t>> {
        match self {
            NodeRef::Group(group) => Some(group),
            NodeRef::Token(_) => None,
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
