use std::collections::{HashMap, HashSet};

use super::grammar::{EPSILON_ID, SymbolId};
use super::Grammar;

/// FIRST sets of every nonterminal, as a fixed point of the textbook
/// dataflow equations. The sets only ever grow during iteration, and both
/// the member universe and the pass count are bounded by the alphabet, so
/// the `changed` loop always terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstSets {
    map: HashMap<SymbolId, HashSet<SymbolId>>,
}

/// FIRST of a symbol string, read from already-computed per-nonterminal
/// sets: scan left to right, collecting FIRST of each symbol minus
/// epsilon, and stop at the first non-nullable symbol. Epsilon enters the
/// result only when the whole string is nullable. `FIRST([]) = {ε}`.
fn first_of_string(
    grammar: &Grammar,
    map: &HashMap<SymbolId, HashSet<SymbolId>>,
    string: &[SymbolId],
) -> HashSet<SymbolId> {
    let mut result = HashSet::new();
    if string.is_empty() || string == [EPSILON_ID] {
        result.insert(EPSILON_ID);
        return result;
    }
    for (i, &sym) in string.iter().enumerate() {
        if grammar.is_non_terminal(sym) {
            let first = &map[&sym];
            result.extend(first.iter().filter(|&&s| s != EPSILON_ID));
            if !first.contains(&EPSILON_ID) {
                break;
            }
            if i + 1 == string.len() {
                result.insert(EPSILON_ID);
            }
        } else {
            // Terminals (and the end marker) block further propagation.
            result.insert(sym);
            break;
        }
    }
    result
}

impl FirstSets {
    pub fn compute(grammar: &Grammar) -> Self {
        let mut map: HashMap<SymbolId, HashSet<SymbolId>> = grammar
            .non_terminal_iter()
            .map(|(idx, _)| (idx, HashSet::new()))
            .collect();

        let mut changed = true;
        while changed {
            changed = false;
            for production in &grammar.productions {
                let gathered = first_of_string(grammar, &map, &production.rhs);
                let first = map.get_mut(&production.lhs).unwrap();
                let prev_cardinality = first.len();
                first.extend(gathered);
                changed |= first.len() != prev_cardinality;
            }
        }

        Self { map }
    }

    /// FIRST set of an arbitrary symbol string.
    pub fn first_of(&self, grammar: &Grammar, string: &[SymbolId]) -> HashSet<SymbolId> {
        first_of_string(grammar, &self.map, string)
    }

    pub fn first(&self, non_terminal: SymbolId) -> &HashSet<SymbolId> {
        &self.map[&non_terminal]
    }

    pub fn is_nullable(&self, non_terminal: SymbolId) -> bool {
        self.map[&non_terminal].contains(&EPSILON_ID)
    }

    pub fn sets(&self) -> &HashMap<SymbolId, HashSet<SymbolId>> {
        &self.map
    }
}
