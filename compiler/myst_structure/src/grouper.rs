//! Single-pass grouping of a token list into a [`Tree`].
//!
//! The grouper walks the tokens once, keeping one group "current". Junk is
//! appended wherever it falls. Significant tokens open brackets and
//! compounds, trigger end-sequence matching, or become plain content.
//!
//! # IF Disambiguation
//!
//! `IF` always opens a compound. When the next significant token opens a
//! bracket, the bracket records the compound as pending. Once the bracket
//! closes, the compound stays a statement only if `THEN` follows and the
//! compound does not sit inside a `WHEN` clause; otherwise it becomes an
//! [`GroupKind::Expression`] and grouping resumes outside it.

use myst_lexer::TokenList;
use tracing::{debug, trace};

use crate::end_match::{look_ahead, matches_compound_end, next_significant};
use crate::grammar::{BracketDescriptor, EndPattern, Grammar};
use crate::tree::{GroupId, GroupKind, NodeRef, Tree};

const END: &str = "END";
const IF: &str = "IF";
const WHEN: &str = "WHEN";
const THEN: &str = "THEN";

/// Groups token lists under one [`Grammar`].
#[derive(Clone, Copy, Debug)]
pub struct Grouper<'g> {
    grammar: &'g Grammar,
}

impl<'g> Grouper<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Grouper { grammar }
    }

    /// Build the statement tree for `tokens`. Never fails; malformed input
    /// leaves groups unclosed.
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn group(&self, tokens: TokenList) -> Tree {
        let valid = tokens.is_valid();
        let mut state = GroupState::new(self.grammar, Tree::new(tokens.into_tokens(), valid));
        state.run();
        state.finish()
    }
}

/// Grouping bookkeeping for one group, indexed by [`GroupId`].
struct Frame<'g> {
    end: &'g [EndPattern],
    /// Only the body of a compound with an inline end has one.
    inline_end: Option<&'g [EndPattern]>,
    /// Index of the keyword that opened a compound.
    begin_token: Option<usize>,
    /// `IF` compound awaiting classification when this bracket closes.
    pending_if: Option<GroupId>,
}

impl<'g> Frame<'g> {
    fn new(end: &'g [EndPattern]) -> Self {
        Frame {
            end,
            inline_end: None,
            begin_token: None,
            pending_if: None,
        }
    }
}

/// What a significant token does.
enum Step<'g> {
    Bracket(&'g BracketDescriptor),
    Compound(usize),
    End(&'g [EndPattern]),
    InlineEnd(&'g [EndPattern]),
    Content,
}

struct GroupState<'g> {
    grammar: &'g Grammar,
    tree: Tree,
    frames: Vec<Frame<'g>>,
    current: GroupId,
    current_compound: Option<GroupId>,
    compound_stack: Vec<GroupId>,
    previous_significant: Option<usize>,
    index: usize,
}

impl<'g> GroupState<'g> {
    fn new(grammar: &'g Grammar, tree: Tree) -> Self {
        let mut state = GroupState {
            grammar,
            tree,
            frames: vec![Frame::new(&[])],
            current: GroupId::ROOT,
            current_compound: None,
            compound_stack: Vec::new(),
            previous_significant: None,
            index: 0,
        };
        state.begin_statement();
        state
    }

    fn run(&mut self) {
        while self.index < self.tree.tokens().len() {
            let index = self.index;
            if self.tree.tokens()[index].is_junk() {
                self.tree.push_token(self.current, index);
            } else {
                if self.current == GroupId::ROOT {
                    self.begin_statement();
                }
                match self.classify(index) {
                    Step::Bracket(bracket) => self.bracket(bracket, index),
                    Step::Compound(compound) => self.begin_compound(compound, index),
                    Step::End(end) => self.end_token_match(end),
                    Step::InlineEnd(end) => {
                        self.end_token_match(end);
                        self.up_one_level();
                    }
                    Step::Content => self.tree.push_token(self.current, index),
                }
                // A lookahead match may have moved `index` past the trigger.
                self.previous_significant = Some(self.index);
            }
            self.index += 1;
        }
    }

    fn finish(mut self) -> Tree {
        if let Some(compound) = self.frames[self.current.index()].pending_if.take() {
            self.classify_if(compound);
        }
        debug!(
            groups = self.tree.group_count(),
            open_compounds = self.compound_stack.len() + usize::from(self.current_compound.is_some()),
            "grouped tokens"
        );
        self.tree
    }

    fn classify(&self, index: usize) -> Step<'g> {
        let grammar = self.grammar;
        let tokens = self.tree.tokens();
        let text = tokens[index].text();

        if let Some(bracket) = grammar.bracket_for(text) {
            return Step::Bracket(bracket);
        }

        let after_end = self
            .previous_significant
            .is_some_and(|previous| grammar.keyword_eq(tokens[previous].text(), END));
        if !after_end {
            if let Some((compound, _)) = grammar.compound_for(text) {
                return Step::Compound(compound);
            }
        }

        let frame = &self.frames[self.current.index()];
        if text == ";" || starts_with(grammar, frame.end, text) {
            return Step::End(frame.end);
        }
        match frame.inline_end {
            Some(inline_end) if starts_with(grammar, inline_end, text) => {
                Step::InlineEnd(inline_end)
            }
            _ => Step::Content,
        }
    }

    // ─── Opening Groups ───

    fn open(&mut self, kind: GroupKind, frame: Frame<'g>) -> GroupId {
        let id = self.tree.push_group(kind, self.current);
        self.frames.push(frame);
        debug_assert_eq!(self.frames.len(), id.index() + 1);
        id
    }

    fn begin_statement(&mut self) {
        self.current = self.open(GroupKind::Statement, Frame::new(self.grammar.statement_end()));
    }

    fn bracket(&mut self, bracket: &'g BracketDescriptor, index: usize) {
        let pending_if = self.pending_if_target();
        let id = self.open(
            GroupKind::Bracketed,
            Frame {
                pending_if,
                ..Frame::new(&bracket.end)
            },
        );
        self.tree.push_token(id, index);
        self.current = id;
    }

    /// The `IF` compound whose keyword directly precedes the bracket about
    /// to open, if `current` is that compound's body.
    fn pending_if_target(&self) -> Option<GroupId> {
        let previous = self.previous_significant?;
        if !self.grammar.keyword_eq(self.tree.tokens()[previous].text(), IF) {
            return None;
        }
        let parent = self.tree.data(self.current).parent?;
        let is_if_compound = self.tree.data(parent).kind == GroupKind::Compound
            && self.frames[parent.index()].begin_token == Some(previous);
        is_if_compound.then_some(parent)
    }

    fn begin_compound(&mut self, compound: usize, index: usize) {
        let grammar = self.grammar;
        let descriptor = &grammar.compounds()[compound];

        let id = self.open(
            GroupKind::Compound,
            Frame {
                begin_token: Some(index),
                ..Frame::new(&descriptor.end)
            },
        );
        self.tree.push_token(id, index);

        self.current = id;
        let body = self.open(
            GroupKind::Statement,
            Frame {
                inline_end: descriptor.inline_end.as_deref(),
                ..Frame::new(grammar.statement_end())
            },
        );
        self.current = body;

        if let Some(enclosing) = self.current_compound.replace(id) {
            self.compound_stack.push(enclosing);
        }
        trace!(group = id.raw(), begin = &*descriptor.begin, "open compound");
    }

    // ─── Closing Groups ───

    /// Close `current` and make its parent current.
    fn up_one_level(&mut self) {
        let target = self.current;
        if target == GroupId::ROOT {
            return;
        }
        if self.current_compound == Some(target) {
            self.current_compound = self.compound_stack.pop();
        }
        self.current = self.tree.data(target).parent.unwrap_or(GroupId::ROOT);
        self.tree.data_mut(target).closed = true;

        if let Some(compound) = self.frames[target.index()].pending_if.take() {
            if self.classify_if(compound) {
                self.up_one_level();
                self.up_one_level();
            }
        }
    }

    /// Decide whether `compound` is the `IF()` function. Returns `true`
    /// after reclassifying it as an expression.
    fn classify_if(&mut self, compound: GroupId) -> bool {
        let grammar = self.grammar;
        let inside_when = self
            .tree
            .data(compound)
            .parent
            .and_then(|parent| self.tree.group(parent))
            .and_then(|parent| parent.first_significant())
            .and_then(NodeRef::as_token)
            .is_some_and(|token| grammar.keyword_eq(token.text(), WHEN));
        let then_follows = next_significant(self.tree.tokens(), self.index)
            .is_some_and(|next| grammar.keyword_eq(self.tree.tokens()[next].text(), THEN));

        let is_function = inside_when || !then_follows;
        if is_function {
            self.tree.data_mut(compound).kind = GroupKind::Expression;
            trace!(group = compound.raw(), inside_when, "IF reclassified as function call");
        }
        is_function
    }

    /// Close levels up to the nearest compound or the root, then open a
    /// new statement there.
    fn continue_same_level(&mut self) {
        loop {
            self.up_one_level();
            if matches!(
                self.tree.data(self.current).kind,
                GroupKind::Compound | GroupKind::Root
            ) {
                break;
            }
        }
        self.begin_statement();
    }

    /// A `;` closed `current`. Close the innermost compound too if the
    /// statement is that compound's end sequence.
    fn statement_end(&mut self) {
        if let Some(compound) = self.current_compound {
            let ends_compound = {
                let items: Vec<NodeRef<'_>> = self
                    .tree
                    .group(self.current)
                    .map(|group| group.children().filter(|node| !node.is_junk()).collect())
                    .unwrap_or_default();
                matches_compound_end(self.grammar, &items, self.frames[compound.index()].end)
            };
            if ends_compound {
                let statement = self.current;
                self.tree.data_mut(statement).closed = true;
                self.tree.data_mut(compound).closed = true;
                self.current = self.tree.data(compound).parent.unwrap_or(GroupId::ROOT);
                self.current_compound = self.compound_stack.pop();
                trace!(group = compound.raw(), "close compound");
            }
        }
        self.continue_same_level();
    }

    fn end_token_match(&mut self, end: &'g [EndPattern]) {
        let index = self.index;
        let is_semicolon = self.tree.tokens()[index].text() == ";";

        if is_semicolon || end.len() == 1 {
            self.tree.push_token(self.current, index);
            if is_semicolon {
                self.statement_end();
            } else {
                self.up_one_level();
            }
            return;
        }

        let Some(last) = look_ahead(self.grammar, self.tree.tokens(), index, end) else {
            self.tree.push_token(self.current, index);
            return;
        };
        for matched in index..=last {
            self.tree.push_token(self.current, matched);
        }
        self.index = last;

        if self.tree.tokens()[last].text() == ";" {
            self.statement_end();
        } else if self.tree.data(self.current).kind == GroupKind::Statement {
            self.continue_same_level();
        } else {
            self.up_one_level();
        }
    }
}

fn starts_with(grammar: &Grammar, end: &[EndPattern], text: &str) -> bool {
    end.first()
        .and_then(EndPattern::as_keyword)
        .is_some_and(|keyword| grammar.keyword_eq(text, keyword))
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
