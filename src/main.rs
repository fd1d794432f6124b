pub mod grammar;

use std::io::{self, BufRead, Write};

use grammar::{FirstSets, FollowSets, Grammar, LL1Table};

const EXAMPLE_GRAMMAR: &str = "E -> T X
X -> + T X | ε
T -> F Y
Y -> * F Y | ε
F -> ( E ) | i";
const EXAMPLE_START: &str = "E";

fn print_help() {
    println!("Usage: ll1-table-helper [options]");
    println!();
    println!("Reads a grammar interactively: the number of productions, that many");
    println!("lines of the form \"A -> α\" (\"ε\" or \"#\" for epsilon, \"|\" between");
    println!("alternatives), then the start symbol. On empty or invalid input a");
    println!("built-in example grammar is used instead.");
    println!();
    println!("options:");
    println!("  -h: Print this help");
    println!("  -l: Print in LaTeX format");
    println!("  -j: Print in JSON format");
}

enum OutputFormat {
    Plain,
    LaTeX,
    Json,
}

fn prompt(message: &str) {
    print!("{}", message);
    io::stdout().flush().unwrap();
}

fn read_grammar(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<Grammar> {
    prompt("Enter the number of productions: ");
    let n: usize = lines.next()?.ok()?.trim().parse().ok()?;
    if n == 0 {
        return None;
    }

    println!("Enter productions in the format \"A -> α\" (\"ε\" or \"#\" for epsilon):");
    let mut buffer: Vec<String> = Vec::new();
    for _ in 0..n {
        buffer.push(lines.next()?.ok()?);
    }

    prompt("Enter the start symbol: ");
    let start = lines.next()?.ok()?;

    match Grammar::parse_with_start(&buffer.join("\n"), start.trim()) {
        Ok(g) => Some(g),
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}

fn main() {
    let mut output_format = OutputFormat::Plain;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-l" => output_format = OutputFormat::LaTeX,
            "-j" => output_format = OutputFormat::Json,
            _ => {
                print_help();
                return;
            }
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let g = match read_grammar(&mut lines) {
        Some(g) => g,
        None => {
            println!("No valid productions entered. Using example grammar instead.");
            Grammar::parse_with_start(EXAMPLE_GRAMMAR, EXAMPLE_START).unwrap()
        }
    };

    let first = FirstSets::compute(&g);
    let follow = FollowSets::compute(&g, &first);
    let table = LL1Table::build(&g, &first, &follow);

    for conflict in table.conflicts() {
        println!("{}", conflict.to_plaintext(&g));
    }

    let overview = g.to_non_terminal_output_vec(&first, &follow);
    let table_output = table.to_output(&g);
    match output_format {
        OutputFormat::Plain => {
            println!("Nullable, FIRST and FOLLOW:");
            println!("{}", overview.to_plaintext());
            println!();
            println!("Predictive parsing table:");
            println!("{}", table_output.to_plaintext());
        }
        OutputFormat::LaTeX => {
            println!("{}", overview.to_latex());
            println!("{}", table_output.to_latex());
        }
        OutputFormat::Json => {
            println!("{}", overview.to_json());
            println!("{}", serde_json::to_string(&table_output).unwrap());
        }
    }
}
