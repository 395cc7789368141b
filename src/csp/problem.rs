use indexmap::IndexSet;

use crate::csp::constraint::Constraint;
use crate::csp::ValueDomain;
use crate::error::CspError;

#[derive(Debug, Clone)]
pub struct Csp {
    pub domain: ValueDomain,
    pub variables: IndexSet<usize>,
    pub constraints: Vec<Constraint>,
}

impl Csp {
    pub fn new(domain: ValueDomain) -> Result<Csp, CspError> {
        domain.validate()?;
        Ok(Csp {
            domain,
            variables: IndexSet::new(),
            constraints: Vec::new(),
        })
    }

    pub fn add_variable(&mut self, v: usize) {
        self.variables.insert(v);
    }

    pub fn add_constraint(&mut self, constraint: Constraint) {
        for &v in constraint.variables() {
            self.variables.insert(v);
        }
        self.constraints.push(constraint);
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn check(&self, assignment: &[i8]) -> bool {
        self.constraints.iter().all(|c| c.check(assignment))
    }
}
