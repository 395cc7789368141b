use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CspError {
    #[error("a {family} problem needs at least {minimum} variables, got {got}")]
    InvalidSize {
        family: &'static str,
        minimum: usize,
        got: usize,
    },
    #[error("requested {requested} clauses but at most {maximum} distinct clauses exist")]
    TooManyClauses { requested: usize, maximum: u128 },
    #[error("value domain must satisfy low < high, got ({low}, {high})")]
    InvalidDomain { low: i8, high: i8 },
    #[error("a {family} clause needs exactly {arity} distinct variables")]
    InvalidScope { family: &'static str, arity: usize },
    #[error("draw budget of {budget} exhausted with {collected} of {requested} unique clauses")]
    SampleBudgetExhausted {
        budget: u128,
        collected: usize,
        requested: usize,
    },
}
