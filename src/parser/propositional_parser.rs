use pest::iterators::Pair;
use pest::Parser;

use crate::errors::ReasonError;
use crate::formulas::{EncodedFormula, FormulaFactory};

#[derive(Parser)]
#[grammar = "parser/propositional.pest"]
struct PropositionalParser;

pub fn parse(f: &FormulaFactory, input: &str) -> Result<EncodedFormula, ReasonError> {
    let parsed = PropositionalParser::parse(Rule::formula, input).map_err(|error| ReasonError::parse(input, error))?;

    let mut formula = f.verum();

    for x in parsed.flat_map(Pair::into_inner) {
        match x.as_rule() {
            Rule::implication => {
                formula = parse_implication(f, x);
            }
            Rule::EOI => (),
            _ => unreachable!(),
        }
    }

    Ok(formula)
}

/// Returns the operands of `pair`, leaving out the operator tokens between them.
fn operands(pair: Pair<'_, Rule>, rule: Rule) -> impl DoubleEndedIterator<Item = Pair<'_, Rule>> {
    pair.into_inner().filter(move |p| p.as_rule() == rule)
}

fn parse_implication(f: &FormulaFactory, implication: Pair<Rule>) -> EncodedFormula {
    operands(implication, Rule::equivalence)
        .rev()
        .map(|equivalence| parse_equivalence(f, equivalence))
        .reduce(|right, left| f.implication(left, right))
        .unwrap_or_else(|| f.verum())
}

fn parse_equivalence(f: &FormulaFactory, equivalence: Pair<Rule>) -> EncodedFormula {
    operands(equivalence, Rule::disjunction)
        .map(|disjunction| parse_disjunction(f, disjunction))
        .reduce(|left, right| f.equivalence(left, right))
        .unwrap_or_else(|| f.verum())
}

fn parse_disjunction(f: &FormulaFactory, disjunction: Pair<Rule>) -> EncodedFormula {
    f.or(operands(disjunction, Rule::conjunction).map(|conjunction| parse_conjunction(f, conjunction)))
}

fn parse_conjunction(f: &FormulaFactory, conjunction: Pair<Rule>) -> EncodedFormula {
    f.and(operands(conjunction, Rule::negation).map(|negation| parse_negation(f, negation)))
}

fn parse_negation(f: &FormulaFactory, negation: Pair<Rule>) -> EncodedFormula {
    let mut negations = 0;
    let mut form = f.verum();
    for x in negation.into_inner() {
        match x.as_rule() {
            Rule::not_op => negations += 1,
            Rule::constant => form = parse_constant(f, x),
            Rule::variable => form = f.variable(x.as_str()),
            Rule::implication => form = parse_implication(f, x),
            _ => unreachable!(),
        }
    }
    (0..negations).fold(form, |form, _| f.not(form))
}

fn parse_constant(f: &FormulaFactory, constant: Pair<Rule>) -> EncodedFormula {
    match constant.into_inner().next().map(|x| x.as_rule()) {
        Some(Rule::verum) => f.verum(),
        Some(Rule::falsum) => f.falsum(),
        _ => unreachable!(),
    }
}
