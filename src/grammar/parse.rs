use super::{Grammar, GrammarError, EPSILON};

// The console format also writes epsilon as '#'.
const EPSILON_ALT: &str = "#";

fn normalize(name: &str) -> String {
    if name == EPSILON_ALT {
        EPSILON.to_string()
    } else {
        name.to_string()
    }
}

/// Split one alternative into symbol names. The format is decided once
/// per listing: only when every alternative in the whole listing is
/// whitespace-free is it the compact single-character console form
/// (`+TX`). In a whitespace-separated listing a lone whitespace-free
/// alternative such as `id` is a single symbol name.
fn split_alternative(alt: &str, compact: bool) -> Vec<String> {
    if !compact {
        alt.split_whitespace().map(normalize).collect()
    } else if alt == EPSILON || alt == EPSILON_ALT {
        vec![EPSILON.to_string()]
    } else {
        alt.chars().map(|c| normalize(&c.to_string())).collect()
    }
}

impl Grammar {
    /// Parse a grammar listing, taking the first left side as start symbol.
    pub fn parse(grammar: &str) -> Result<Self, GrammarError> {
        let raw = Self::parse_raw(grammar)?;
        let start = match raw.first() {
            Some((left, _)) => left.clone(),
            None => {
                return Err(GrammarError::InvalidGrammar(
                    "no productions given".to_string(),
                ))
            }
        };
        Self::build(raw, &start)
    }

    /// Parse a grammar listing with an explicit start symbol.
    pub fn parse_with_start(grammar: &str, start: &str) -> Result<Self, GrammarError> {
        let raw = Self::parse_raw(grammar)?;
        Self::build(raw, &normalize(start))
    }

    fn parse_raw(grammar: &str) -> Result<Vec<(String, Vec<String>)>, GrammarError> {
        let mut raw_productions: Vec<(String, &str)> = Vec::new();

        let mut previous_left: Option<String> = None;
        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(GrammarError::InvalidGrammar(format!(
                    "Line {}: too many \"->\"",
                    i + 1
                )));
            }
            let (left, rights): (String, &str) = if parts.len() == 2 {
                let left_str = parts[0].trim();
                if left_str.is_empty() {
                    return Err(GrammarError::InvalidGrammar(format!(
                        "Line {}: empty left side",
                        i + 1
                    )));
                } else if left_str.split_whitespace().count() != 1 {
                    return Err(GrammarError::InvalidGrammar(format!(
                        "Line {}: left side contains whitespace",
                        i + 1
                    )));
                }
                (normalize(left_str), parts[1].trim())
            } else {
                // Continuation line: "| alt | alt" extends the previous left side.
                let rest = parts[0].trim();
                match (&previous_left, rest.strip_prefix('|')) {
                    (Some(left), Some(rest)) => (left.clone(), rest.trim()),
                    _ => {
                        return Err(GrammarError::InvalidGrammar(format!(
                            "Line {}: cannot find left side",
                            i + 1
                        )))
                    }
                }
            };

            previous_left = Some(left.clone());
            raw_productions.push((left, rights));
        }

        let compact = raw_productions
            .iter()
            .all(|(_, rights)| rights.split('|').all(|alt| !alt.trim().contains(char::is_whitespace)));

        let mut productions: Vec<(String, Vec<String>)> = Vec::new();
        for (left, rights) in raw_productions {
            for right in rights.split('|') {
                let right = right.trim();
                if right.is_empty() {
                    return Err(GrammarError::InvalidGrammar(format!(
                        "empty alternative in a production of {}",
                        left
                    )));
                }
                productions.push((left.clone(), split_alternative(right, compact)));
            }
        }

        Ok(productions)
    }
}
