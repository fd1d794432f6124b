use std::collections::{HashMap, HashSet};

use super::grammar::{END_MARK_ID, EPSILON_ID, SymbolId};
use super::{FirstSets, Grammar};

/// FOLLOW sets of every nonterminal. Requires completed FIRST sets; the
/// fixed-point loop mirrors [`FirstSets::compute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowSets {
    map: HashMap<SymbolId, HashSet<SymbolId>>,
}

impl FollowSets {
    pub fn compute(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut map: HashMap<SymbolId, HashSet<SymbolId>> = grammar
            .non_terminal_iter()
            .map(|(idx, _)| (idx, HashSet::new()))
            .collect();
        map.get_mut(&grammar.start).unwrap().insert(END_MARK_ID);

        let mut changed = true;
        while changed {
            changed = false;
            for production in &grammar.productions {
                for (i, &sym) in production.rhs.iter().enumerate() {
                    if !grammar.is_non_terminal(sym) {
                        continue;
                    }

                    // A -> α B β: FIRST(β) \ {ε} enters FOLLOW(B); when β
                    // is nullable or absent, FOLLOW(A) enters FOLLOW(B).
                    let beta = &production.rhs[i + 1..];
                    let first_of_beta = first_sets.first_of(grammar, beta);
                    let lhs_follow: Vec<SymbolId> = if first_of_beta.contains(&EPSILON_ID) {
                        map[&production.lhs].iter().cloned().collect()
                    } else {
                        Vec::new()
                    };

                    let follow = map.get_mut(&sym).unwrap();
                    let prev_cardinality = follow.len();
                    follow.extend(first_of_beta.iter().filter(|&&s| s != EPSILON_ID));
                    follow.extend(lhs_follow);
                    changed |= follow.len() != prev_cardinality;
                }
            }
        }

        Self { map }
    }

    pub fn follow(&self, non_terminal: SymbolId) -> &HashSet<SymbolId> {
        &self.map[&non_terminal]
    }

    pub fn sets(&self) -> &HashMap<SymbolId, HashSet<SymbolId>> {
        &self.map
    }
}
