use std::collections::HashMap;

use super::grammar::{EPSILON_ID, SymbolId};
use super::{FirstSets, FollowSets, Grammar};

/// Two or more productions competing for one `(nonterminal, lookahead)`
/// cell. Reported as data alongside the table; the grammar is LL(1) iff
/// no report is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    pub lhs: SymbolId,
    pub lookahead: SymbolId,
    /// Indices into [`Grammar::productions`] of every competitor known
    /// at the time the collision was detected.
    pub productions: Vec<usize>,
}

/// The predictive parsing table: a sparse map from `(nonterminal,
/// lookahead terminal)` to production indices. A cell with more than one
/// entry is a conflict cell and retains all competitors.
#[derive(Debug, Clone)]
pub struct LL1Table {
    cells: HashMap<(SymbolId, SymbolId), Vec<usize>>,
    conflicts: Vec<ConflictReport>,
}

impl LL1Table {
    pub fn build(grammar: &Grammar, first_sets: &FirstSets, follow_sets: &FollowSets) -> Self {
        let mut table = Self {
            cells: HashMap::new(),
            conflicts: Vec::new(),
        };

        for (prod_idx, production) in grammar.productions.iter().enumerate() {
            let select = first_sets.first_of(grammar, &production.rhs);

            let mut lookaheads: Vec<SymbolId> = select
                .iter()
                .cloned()
                .filter(|&s| s != EPSILON_ID)
                .collect();
            lookaheads.sort_unstable();

            if select.contains(&EPSILON_ID) {
                let mut from_follow: Vec<SymbolId> =
                    follow_sets.follow(production.lhs).iter().cloned().collect();
                from_follow.sort_unstable();
                lookaheads.extend(from_follow);
            }

            for lookahead in lookaheads {
                table.place(production.lhs, lookahead, prod_idx);
            }
        }

        table
    }

    /// Placing the same production twice in one cell is idempotent; a
    /// different production makes the cell a conflict cell and emits a
    /// report, keeping every competitor.
    fn place(&mut self, lhs: SymbolId, lookahead: SymbolId, prod_idx: usize) {
        let cell = self.cells.entry((lhs, lookahead)).or_default();
        if cell.contains(&prod_idx) {
            return;
        }
        cell.push(prod_idx);
        if cell.len() > 1 {
            self.conflicts.push(ConflictReport {
                lhs,
                lookahead,
                productions: cell.clone(),
            });
        }
    }

    /// Production indices stored at `(non_terminal, lookahead)`, if any.
    pub fn get(&self, non_terminal: SymbolId, lookahead: SymbolId) -> Option<&[usize]> {
        self.cells
            .get(&(non_terminal, lookahead))
            .map(|v| v.as_slice())
    }

    pub fn conflicts(&self) -> &[ConflictReport] {
        &self.conflicts
    }

    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }
}
