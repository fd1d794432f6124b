extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

mod grammar;
pub use grammar::{
    ConflictReport, FirstSets, FollowSets, Grammar, GrammarError, LL1Table, Production, Symbol,
};

#[wasm_bindgen]
pub fn analysis_to_json(grammar: &str) -> String {
    match Grammar::parse(grammar) {
        Ok(g) => {
            let first = FirstSets::compute(&g);
            let follow = FollowSets::compute(&g, &first);
            let table = LL1Table::build(&g, &first, &follow);
            let conflicts: Vec<String> = table
                .conflicts()
                .iter()
                .map(|c| c.to_plaintext(&g))
                .collect();
            serde_json::json!({
                "symbols": g.to_non_terminal_output_vec(&first, &follow),
                "table": table.to_output(&g),
                "conflicts": conflicts,
            })
            .to_string()
        }
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}


#[cfg(test)]
mod first_follow_tests {
    use std::collections::HashSet;

    use crate::grammar::{FirstSets, FollowSets, Grammar, SymbolId, END_MARK_ID, EPSILON};

    const EXPR_GRAMMAR: &str = "E -> T X
X -> + T X | ε
T -> F Y
Y -> * F Y | ε
F -> ( E ) | i";

    fn names(g: &Grammar, set: &HashSet<SymbolId>) -> Vec<String> {
        let mut v: Vec<String> = set.iter().map(|&s| g.get_symbol_name(s).to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn expression_grammar_first_sets() {
        let g = Grammar::parse(EXPR_GRAMMAR).unwrap();
        let first = FirstSets::compute(&g);

        let f = g.symbol_table["F"];
        let t = g.symbol_table["T"];
        let x = g.symbol_table["X"];

        assert_eq!(names(&g, first.first(f)), vec!["(", "i"]);
        assert_eq!(first.first(t), first.first(f));
        assert_eq!(names(&g, first.first(x)), vec!["+", EPSILON]);
        assert!(first.is_nullable(x));
        assert!(!first.is_nullable(f));
    }

    #[test]
    fn expression_grammar_follow_sets() {
        let g = Grammar::parse(EXPR_GRAMMAR).unwrap();
        let first = FirstSets::compute(&g);
        let follow = FollowSets::compute(&g, &first);

        let e = g.symbol_table["E"];
        let x = g.symbol_table["X"];

        assert_eq!(names(&g, follow.follow(e)), vec!["$", ")"]);
        assert_eq!(follow.follow(x), follow.follow(e));
    }

    #[test]
    fn first_of_empty_string_is_epsilon() {
        let g = Grammar::parse("S -> a").unwrap();
        let first = FirstSets::compute(&g);
        assert_eq!(names(&g, &first.first_of(&g, &[])), vec![EPSILON]);
    }

    #[test]
    fn first_of_stops_at_first_terminal() {
        let g = Grammar::parse("S -> A b\nA -> a | ε").unwrap();
        let first = FirstSets::compute(&g);

        let a = g.symbol_table["A"];
        let b = g.symbol_table["b"];
        // A is nullable, so b shows through; c past b must not.
        assert_eq!(names(&g, &first.first_of(&g, &[a, b])), vec!["a", "b"]);
        assert_eq!(names(&g, &first.first_of(&g, &[b, a])), vec!["b"]);
    }

    #[test]
    fn fully_nullable_string_keeps_epsilon() {
        let g = Grammar::parse("S -> A B\nA -> ε\nB -> ε").unwrap();
        let first = FirstSets::compute(&g);
        let s = g.symbol_table["S"];
        assert!(first.is_nullable(s));
    }

    #[test]
    fn end_mark_always_follows_start() {
        // The start symbol appears on no right side.
        let g = Grammar::parse("S -> a").unwrap();
        let first = FirstSets::compute(&g);
        let follow = FollowSets::compute(&g, &first);
        assert!(follow.follow(g.start).contains(&END_MARK_ID));
    }

    #[test]
    fn recomputation_is_idempotent() {
        let g = Grammar::parse(EXPR_GRAMMAR).unwrap();
        let first_a = FirstSets::compute(&g);
        let first_b = FirstSets::compute(&g);
        assert_eq!(first_a.sets(), first_b.sets());

        let follow_a = FollowSets::compute(&g, &first_a);
        let follow_b = FollowSets::compute(&g, &first_b);
        assert_eq!(follow_a.sets(), follow_b.sets());
    }
}


#[cfg(test)]
mod output_tests {
    use crate::grammar::{FirstSets, FollowSets, Grammar, LL1Table};

    #[test]
    fn plaintext_table_mentions_every_entry() {
        let g = Grammar::parse("S -> a | ε").unwrap();
        let first = FirstSets::compute(&g);
        let follow = FollowSets::compute(&g, &first);
        let table = LL1Table::build(&g, &first, &follow);

        let text = table.to_output(&g).to_plaintext();
        assert!(text.contains("S -> a"));
        assert!(text.contains("$"));
    }

    #[test]
    fn overview_to_json_is_valid_json() {
        let g = Grammar::parse("S -> a | ε").unwrap();
        let first = FirstSets::compute(&g);
        let follow = FollowSets::compute(&g, &first);
        let overview = g.to_non_terminal_output_vec(&first, &follow);

        let value: serde_json::Value = serde_json::from_str(&overview.to_json()).unwrap();
        assert_eq!(value["data"][0]["name"], "S");
        assert!(value["data"][0]["nullable"].as_bool().unwrap());
    }

    #[test]
    fn json_analysis_round_trips_through_serde() {
        let json = crate::analysis_to_json("S -> a | ε");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("symbols").is_some());
        assert!(value.get("table").is_some());
        assert_eq!(value["conflicts"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn json_analysis_reports_parse_errors() {
        let json = crate::analysis_to_json("-> a");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("error").is_some());
    }

    #[test]
    fn conflict_report_names_both_productions() {
        let g = Grammar::parse("S -> A | B\nA -> a\nB -> a").unwrap();
        let first = FirstSets::compute(&g);
        let follow = FollowSets::compute(&g, &first);
        let table = LL1Table::build(&g, &first, &follow);

        let line = table.conflicts()[0].to_plaintext(&g);
        assert!(line.contains("S -> A"));
        assert!(line.contains("S -> B"));
        assert!(line.contains("[S, a]"));
    }
}
