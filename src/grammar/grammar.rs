use std::collections::HashMap;

use super::{GrammarError, END_MARK, EPSILON};

/// Index of a symbol in [`Grammar::symbols`].
pub type SymbolId = usize;

/// [`Symbol::Epsilon`] is always interned at this index.
pub const EPSILON_ID: SymbolId = 0;
/// [`Symbol::EndMark`] is always interned at this index.
pub const END_MARK_ID: SymbolId = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    NonTerminal(String),
    Terminal(String),
    Epsilon,
    EndMark,
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::NonTerminal(name) => name.as_str(),
            Symbol::Terminal(name) => name.as_str(),
            Symbol::Epsilon => EPSILON,
            Symbol::EndMark => END_MARK,
        }
    }

    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }
}

/// A single production `lhs -> rhs`. The epsilon production is stored as
/// the one-element sequence `[EPSILON_ID]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub lhs: SymbolId,
    pub rhs: Vec<SymbolId>,
}

/// An immutable context-free grammar: interned symbols, productions in
/// declaration order and the start symbol. All analysis stages read it;
/// none of them mutates it.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub symbols: Vec<Symbol>,
    pub symbol_table: HashMap<String, SymbolId>,
    pub productions: Vec<Production>,
    pub start: SymbolId,
}

impl Grammar {
    /// Build a grammar from `(lhs, rhs)` pairs of symbol names.
    ///
    /// A name is a nonterminal iff it occurs as some production's left
    /// side; every other rhs name is a terminal, except the reserved
    /// epsilon and end-marker literals. Epsilon is only accepted as the
    /// whole right side; an rhs mixing epsilon with other symbols has no
    /// defined meaning and is rejected.
    pub fn build(productions: Vec<(String, Vec<String>)>, start: &str) -> Result<Self, GrammarError> {
        if productions.is_empty() {
            return Err(GrammarError::InvalidGrammar(
                "production list is empty".to_string(),
            ));
        }

        let mut g = Self {
            symbols: vec![Symbol::Epsilon, Symbol::EndMark],
            symbol_table: HashMap::new(),
            productions: Vec::new(),
            start: 0,
        };
        g.symbol_table.insert(EPSILON.to_string(), EPSILON_ID);
        g.symbol_table.insert(END_MARK.to_string(), END_MARK_ID);

        // Left sides first: the same literal can only ever be one of
        // nonterminal or terminal, and lhs occurrence decides which.
        for (left, _) in &productions {
            if left == EPSILON || left == END_MARK {
                return Err(GrammarError::InvalidGrammar(format!(
                    "reserved symbol \"{}\" cannot appear on a left side",
                    left
                )));
            }
            if !g.symbol_table.contains_key(left) {
                g.add_symbol(Symbol::NonTerminal(left.clone()));
            }
        }

        for (left, right) in productions {
            let lhs = g.symbol_table[&left];
            let rhs: Vec<SymbolId> = right
                .iter()
                .map(|name| match g.symbol_table.get(name).cloned() {
                    Some(idx) => idx,
                    None => g.add_symbol(Symbol::Terminal(name.clone())),
                })
                .collect();

            if rhs.is_empty() {
                return Err(GrammarError::InvalidGrammar(format!(
                    "empty right side in a production of {}",
                    left
                )));
            }
            if rhs.len() > 1 && rhs.contains(&EPSILON_ID) {
                return Err(GrammarError::InvalidGrammar(format!(
                    "epsilon must be the whole right side in a production of {}",
                    left
                )));
            }

            g.productions.push(Production { lhs, rhs });
        }

        match g.symbol_table.get(start) {
            Some(&idx) if g.symbols[idx].is_non_terminal() => g.start = idx,
            _ => {
                return Err(GrammarError::InvalidGrammar(format!(
                    "start symbol \"{}\" is not a declared nonterminal",
                    start
                )))
            }
        }

        Ok(g)
    }

    fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let idx = self.symbols.len();
        self.symbol_table.insert(symbol.name().to_string(), idx);
        self.symbols.push(symbol);
        idx
    }

    pub fn is_non_terminal(&self, idx: SymbolId) -> bool {
        self.symbols[idx].is_non_terminal()
    }

    /// Nonterminals in declaration order.
    pub fn non_terminal_iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.symbols.iter().enumerate().filter_map(|(idx, s)| {
            if s.is_non_terminal() {
                Some((idx, s.name()))
            } else {
                None
            }
        })
    }

    /// Terminals including the end marker, excluding epsilon.
    pub fn terminal_iter(&self) -> impl Iterator<Item = (SymbolId, &str)> {
        self.symbols
            .iter()
            .enumerate()
            .filter_map(|(idx, s)| match s {
                Symbol::Terminal(name) => Some((idx, name.as_str())),
                Symbol::EndMark => Some((idx, END_MARK)),
                _ => None,
            })
    }

    pub fn get_symbol_index(&self, name: &str) -> Option<SymbolId> {
        self.symbol_table.get(name).cloned()
    }

    pub fn get_symbol_name(&self, idx: SymbolId) -> &str {
        self.symbols[idx].name()
    }

    /// Right-side names of a production, for display.
    pub fn production_to_vec_str(&self, production: &Production) -> Vec<&str> {
        production
            .rhs
            .iter()
            .map(|&idx| self.get_symbol_name(idx))
            .collect()
    }
}
