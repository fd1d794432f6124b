use std::collections::HashSet;

use crowbook_text_processing::escape;
use serde::Serialize;

use super::grammar::EPSILON_ID;
use super::{ConflictReport, FirstSets, FollowSets, Grammar, LL1Table, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub right: Vec<&'a str>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        format!("{} -> {}", self.left, self.right.join(" "))
    }

    pub fn to_latex(&self, terminal_set: &HashSet<&str>) -> String {
        let right = self
            .right
            .iter()
            .map(|s| {
                if terminal_set.contains(s) {
                    format!("\\text{{{}}}", escape::tex(*s))
                } else {
                    escape::tex(*s).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" \\ ");
        format!("{} \\rightarrow {}", escape::tex(self.left), right).replace(EPSILON, "\\epsilon")
    }
}

#[derive(Serialize)]
struct NonTerminalOutput<'a> {
    name: &'a str,
    nullable: bool,
    first: Vec<&'a str>,
    follow: Vec<&'a str>,
}

impl NonTerminalOutput<'_> {
    fn to_plaintext(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.name,
            self.nullable,
            self.first.join(", "),
            self.follow.join(", ")
        )
    }

    fn to_latex(&self) -> String {
        fn f(a: &Vec<&str>) -> String {
            a.iter()
                .map(|s| escape::tex(*s))
                .collect::<Vec<_>>()
                .join(r"\ ")
                .replace(EPSILON, r"$\epsilon$")
        }

        format!(
            "{} & {} & {} & {}",
            escape::tex(self.name),
            self.nullable,
            f(&self.first),
            f(&self.follow)
        )
    }
}

#[derive(Serialize)]
pub struct NonTerminalOutputVec<'a> {
    data: Vec<NonTerminalOutput<'a>>,
}

impl NonTerminalOutputVec<'_> {
    pub fn to_plaintext(&self) -> String {
        self.data
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }

    pub fn to_latex(&self) -> String {
        let content = self
            .data
            .iter()
            .map(|e| e.to_latex())
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c|c}\n".to_string()
            + "Symbol & Nullable & First & Follow\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }
}

impl Grammar {
    /// One row per nonterminal: name, nullability, FIRST and FOLLOW
    /// member names. Member names are sorted so repeated runs render
    /// identically; epsilon is listed last in FIRST when nullable.
    pub fn to_non_terminal_output_vec<'a>(
        &'a self,
        first_sets: &FirstSets,
        follow_sets: &FollowSets,
    ) -> NonTerminalOutputVec<'a> {
        let mut data = Vec::new();
        for (idx, name) in self.non_terminal_iter() {
            let mut t = NonTerminalOutput {
                name,
                nullable: first_sets.is_nullable(idx),
                first: first_sets
                    .first(idx)
                    .iter()
                    .filter(|&&s| s != EPSILON_ID)
                    .map(|&s| self.get_symbol_name(s))
                    .collect(),
                follow: follow_sets
                    .follow(idx)
                    .iter()
                    .map(|&s| self.get_symbol_name(s))
                    .collect(),
            };
            t.first.sort();
            t.follow.sort();

            if t.nullable {
                t.first.push(EPSILON);
            }
            data.push(t);
        }
        NonTerminalOutputVec { data }
    }
}

#[derive(Serialize)]
pub struct LL1TableOutput<'a> {
    terminals: Vec<&'a str>,
    rows: Vec<(&'a str, Vec<Vec<ProductionOutput<'a>>>)>,
}

impl LL1TableOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        let mut header: Vec<String> = vec![String::new()];
        header.extend(self.terminals.iter().map(|&t| t.to_string()));
        let mut output: Vec<Vec<String>> = vec![header];
        for (left, row) in &self.rows {
            let mut line: Vec<String> = vec![left.to_string()];
            line.extend(row.iter().map(|productions| {
                productions
                    .iter()
                    .map(|production| production.to_plaintext())
                    .collect::<Vec<_>>()
                    .join(", ")
            }));
            output.push(line);
        }

        let mut width = vec![0; self.terminals.len() + 1];
        for j in 0..output[0].len() {
            width[j] = output.iter().map(|line| line[j].len()).max().unwrap();
        }
        output
            .iter()
            .map(|line| {
                line.iter()
                    .enumerate()
                    .map(|(i, s)| format!("{:>width$}", s, width = width[i]))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        let mut header: Vec<String> = vec![format!(
            "\\[\\begin{{array}}{{c{}}}\n",
            "|l".repeat(self.terminals.len()),
        )];
        header.extend(
            self.terminals
                .iter()
                .map(|&t| format!("\\text{{{}}}", escape::tex(t))),
        );
        let header = header.join(" & ");

        let terminal_set: HashSet<&str> = self.terminals.iter().cloned().collect();
        let mut output: Vec<String> = Vec::new();
        for (left, row) in &self.rows {
            let mut line: Vec<String> = vec![escape::tex(*left).to_string()];
            line.extend(row.iter().map(|productions| {
                productions
                    .iter()
                    .map(|production| production.to_latex(&terminal_set))
                    .collect::<Vec<_>>()
                    .join("; ")
            }));
            output.push(line.join(" & "));
        }

        let output = output.join("\\\\\n");

        header + "\\\\\\hline\n" + &output + "\n\\end{array}\\]"
    }
}

impl LL1Table {
    /// Rows in nonterminal declaration order, columns over all terminals
    /// plus the end marker. Conflict cells carry every competitor.
    pub fn to_output<'a>(&self, grammar: &'a Grammar) -> LL1TableOutput<'a> {
        let terminals: Vec<(usize, &str)> = grammar.terminal_iter().collect();

        let mut rows = Vec::new();
        for (nt_idx, left) in grammar.non_terminal_iter() {
            let mut row: Vec<Vec<ProductionOutput>> = vec![Vec::new(); terminals.len()];
            for (col, &(t_idx, _)) in terminals.iter().enumerate() {
                if let Some(cell) = self.get(nt_idx, t_idx) {
                    for &prod_idx in cell {
                        let production = &grammar.productions[prod_idx];
                        row[col].push(ProductionOutput {
                            left,
                            right: grammar.production_to_vec_str(production),
                        });
                    }
                }
            }
            rows.push((left, row));
        }

        LL1TableOutput {
            terminals: terminals.into_iter().map(|(_, name)| name).collect(),
            rows,
        }
    }
}

impl ConflictReport {
    pub fn to_plaintext(&self, grammar: &Grammar) -> String {
        let competitors = self
            .productions
            .iter()
            .map(|&prod_idx| {
                let production = &grammar.productions[prod_idx];
                ProductionOutput {
                    left: grammar.get_symbol_name(production.lhs),
                    right: grammar.production_to_vec_str(production),
                }
                .to_plaintext()
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Grammar is not LL(1): conflict at [{}, {}] between {}",
            grammar.get_symbol_name(self.lhs),
            grammar.get_symbol_name(self.lookahead),
            competitors
        )
    }
}
