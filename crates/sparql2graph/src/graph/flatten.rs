//! Flatten the nested WHERE pattern tree into an ordered triple list.
//!
//! The walk is depth-first and keeps encounter order across branches. OPTIONAL
//! and UNION are not given their query semantics; instead each triple records
//! the scope it was found in so the renderer can still tell them apart.

use tracing::debug;

use crate::ast::model::{Pattern, TriplePattern};
use crate::graph::model::BranchRef;
use crate::model::term::Term;

/// Where in the pattern tree a triple was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope<'a> {
    /// Inside at least one OPTIONAL block.
    pub optional: bool,
    /// Enclosing union branches, outermost first.
    pub branches: Vec<BranchRef>,
    /// Innermost enclosing `GRAPH` name.
    pub graph: Option<&'a Term>,
}

/// A triple pattern together with its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedTriple<'a> {
    pub triple: &'a TriplePattern,
    pub scope: Scope<'a>,
}

/// Flatten `patterns` into triples, depth-first.
pub fn flatten_patterns(patterns: &[Pattern]) -> Vec<ScopedTriple<'_>> {
    let mut flattener = Flattener::default();
    flattener.walk(patterns, &Scope::default());
    flattener.out
}

#[derive(Default)]
struct Flattener<'a> {
    out: Vec<ScopedTriple<'a>>,
    unions_seen: usize,
}

impl<'a> Flattener<'a> {
    fn walk(&mut self, patterns: &'a [Pattern], scope: &Scope<'a>) {
        for pattern in patterns {
            match pattern {
                Pattern::Basic(triples) => {
                    self.out.extend(triples.iter().map(|triple| ScopedTriple {
                        triple,
                        scope: scope.clone(),
                    }));
                }
                Pattern::Optional(nested) => {
                    let inner = Scope {
                        optional: true,
                        ..scope.clone()
                    };
                    self.walk(nested, &inner);
                }
                Pattern::Union(branches) => {
                    let union = self.unions_seen;
                    self.unions_seen += 1;
                    for (branch, nested) in branches.iter().enumerate() {
                        let mut inner = scope.clone();
                        inner.branches.push(BranchRef { union, branch });
                        self.walk(nested, &inner);
                    }
                }
                Pattern::Group(nested) => self.walk(nested, scope),
                Pattern::NamedGraph { name, patterns } => {
                    let inner = Scope {
                        graph: Some(name),
                        ..scope.clone()
                    };
                    self.walk(patterns, &inner);
                }
                Pattern::Other(kind) => {
                    debug!(kind = %kind, "skipping pattern group");
                }
            }
        }
    }
}
