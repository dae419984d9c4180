//! Locating a logical statement in a problem text.

use std::sync::OnceLock;

use regex::Regex;

use crate::formulas::{EncodedFormula, FormulaFactory};

const FORMAL_OPERATORS: [&str; 18] =
    ["¬", "~", "!", "∧", "&", "/\\", "∨", "|", "\\/", "→", "->", "=>", "≡", "↔", "<->", "<=>", "⊤", "⊥"];

static FORMAL_SPAN: OnceLock<Regex> = OnceLock::new();
static NEGATION_SPAN: OnceLock<Regex> = OnceLock::new();
static TEXTUAL_SPAN: OnceLock<Regex> = OnceLock::new();
static CONDITIONAL: OnceLock<Regex> = OnceLock::new();
static IF_WORD: OnceLock<Regex> = OnceLock::new();
static THEN_WORD: OnceLock<Regex> = OnceLock::new();
static QUANTIFIER: OnceLock<Regex> = OnceLock::new();
static ATOM: OnceLock<Regex> = OnceLock::new();

/// Two or more single-letter operands of either case joined by symbolic
/// binary operators, with optional negations and parentheses.
fn formal_span() -> &'static Regex {
    FORMAL_SPAN.get_or_init(|| {
        let operand = r"[(¬~!\s]*\b[A-Za-z]\d*\b[)\s]*";
        let operator = r"(?:→|->|=>|∧|&&|&|/\\|∨|\|\||\||\\/|≡|↔|<->|<=>)";
        Regex::new(&format!("{operand}(?:{operator}{operand})+")).expect("valid regex")
    })
}

fn negation_span() -> &'static Regex {
    NEGATION_SPAN.get_or_init(|| Regex::new(r"[¬~]\s*\b[A-Za-z]\d*\b").expect("valid regex"))
}

fn textual_span() -> &'static Regex {
    TEXTUAL_SPAN.get_or_init(|| Regex::new(r"\b[A-Za-z]\d*\s+(?i:implies|iff|if\s+and\s+only\s+if)\s+[A-Za-z]\d*\b").expect("valid regex"))
}

fn conditional() -> &'static Regex {
    CONDITIONAL.get_or_init(|| Regex::new(r"(?is)\bif\s+(.+?)\s+then\s+(.+)").expect("valid regex"))
}

fn atom() -> &'static Regex {
    ATOM.get_or_init(|| Regex::new(r"^[A-Za-z][0-9_']*$").expect("valid regex"))
}

/// Removes surrounding whitespace and trailing sentence punctuation.
pub(crate) fn strip_sentence(text: &str) -> &str {
    text.trim().trim_end_matches(['?', '.']).trim_end()
}

/// Returns `true` if `text` contains one of the symbolic operators or
/// constants.
pub(crate) fn has_formal_operator(text: &str) -> bool {
    FORMAL_OPERATORS.iter().any(|op| text.contains(op))
}

/// Returns `true` if `name` looks like a propositional atom, a letter
/// optionally followed by digits, underscores, or primes.
pub(crate) fn is_atom_like(name: &str) -> bool {
    atom().is_match(name)
}

/// Tries to read the whole problem as a formula.
///
/// The problem is accepted if it parses and either uses formal notation or
/// only consists of atom-like variables. This keeps plain words like `rain`
/// from being read as a single variable.
pub(crate) fn whole_statement(problem: &str, f: &FormulaFactory) -> Option<(String, EncodedFormula)> {
    let statement = strip_sentence(problem);
    let formula = f.parse(statement).ok()?;
    let accepted =
        has_formal_operator(statement) || formula.string_variables(f).iter().all(|name| is_atom_like(name));
    accepted.then(|| (statement.to_string(), formula))
}

/// Returns the first span of the problem that looks like a formula over
/// single-letter variables, if any.
pub(crate) fn embedded_statement(problem: &str) -> Option<&str> {
    [formal_span(), textual_span(), negation_span()]
        .into_iter()
        .find_map(|regex| regex.find(problem))
        .map(|span| span.as_str().trim())
}

/// Splits an `if ... then ...` sentence into antecedent and consequent.
pub(crate) fn find_conditional(problem: &str) -> Option<(String, String)> {
    let captures = conditional().captures(problem)?;
    let antecedent = captures.get(1)?.as_str().trim().trim_end_matches(',');
    let consequent = strip_sentence(captures.get(2)?.as_str());
    Some((antecedent.to_string(), consequent.to_string()))
}

/// Returns `true` if the problem contains the words `if` and `then`.
pub(crate) fn mentions_conditional(problem: &str) -> bool {
    let if_word = IF_WORD.get_or_init(|| Regex::new(r"(?i)\bif\b").expect("valid regex"));
    let then_word = THEN_WORD.get_or_init(|| Regex::new(r"(?i)\bthen\b").expect("valid regex"));
    if_word.is_match(problem) && then_word.is_match(problem)
}

/// Returns `true` if the problem contains one of the quantifier words `all`,
/// `some`, `every`, or `any`.
pub(crate) fn mentions_quantifier(problem: &str) -> bool {
    QUANTIFIER.get_or_init(|| Regex::new(r"(?i)\b(all|some|every|any)\b").expect("valid regex")).is_match(problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_sentence() {
        assert_eq!(strip_sentence("  P ∨ ¬P?  "), "P ∨ ¬P");
        assert_eq!(strip_sentence("A -> B."), "A -> B");
        assert_eq!(strip_sentence(""), "");
    }

    #[test]
    fn test_whole_statement() {
        let f = FormulaFactory::new();
        assert_eq!(whole_statement("P ∨ ¬P", &f).map(|(s, _)| s), Some("P ∨ ¬P".to_string()));
        assert!(whole_statement("rain → wet", &f).is_some());
        assert!(whole_statement("A", &f).is_some());
        assert!(whole_statement("p1 and not q'", &f).is_some());
        assert!(whole_statement("rain", &f).is_none());
        assert!(whole_statement("Socrates is a man", &f).is_none());
        assert!(whole_statement("If A then B", &f).is_none());
        assert!(whole_statement("", &f).is_none());
    }

    #[test]
    fn test_embedded_statement() {
        assert_eq!(embedded_statement("Is P ∨ ¬P a tautology?"), Some("P ∨ ¬P"));
        assert_eq!(embedded_statement("Check (A ∧ B) → C for me"), Some("(A ∧ B) → C"));
        assert_eq!(embedded_statement("Does A implies B hold?"), Some("A implies B"));
        assert_eq!(embedded_statement("Is A if and only if B true?"), Some("A if and only if B"));
        assert_eq!(embedded_statement("What is ¬Q?"), Some("¬Q"));
        assert_eq!(embedded_statement("Is p ∨ q true?"), Some("p ∨ q"));
        assert_eq!(embedded_statement("Does p implies q hold?"), Some("p implies q"));
        assert_eq!(embedded_statement("Check Result ∧ A"), None);
        assert_eq!(embedded_statement("Is it raining?"), None);
        assert_eq!(embedded_statement("If A then B"), None);
    }

    #[test]
    fn test_find_conditional() {
        assert_eq!(find_conditional("If A then B"), Some(("A".to_string(), "B".to_string())));
        assert_eq!(
            find_conditional("if it rains then the street is wet."),
            Some(("it rains".to_string(), "the street is wet".to_string()))
        );
        assert_eq!(find_conditional("If it rains, then it pours"), Some(("it rains".to_string(), "it pours".to_string())));
        assert_eq!(find_conditional("then if"), None);
        assert_eq!(find_conditional("A or B"), None);
    }

    #[test]
    fn test_mentions() {
        assert!(mentions_conditional("If it rains, then it pours"));
        assert!(!mentions_conditional("the iffy thenar"));
        assert!(mentions_quantifier("All men are mortal"));
        assert!(mentions_quantifier("Is there ANY cat?"));
        assert!(!mentions_quantifier("Socrates is tall"));
    }

    #[test]
    fn test_atom_like() {
        assert!(is_atom_like("P"));
        assert!(is_atom_like("a1"));
        assert!(is_atom_like("Q'"));
        assert!(!is_atom_like("rain"));
        assert!(!is_atom_like(""));
    }
}
