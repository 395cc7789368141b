use std::collections::BTreeSet;

use crate::csp::ValueDomain;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    variables: Vec<usize>,
    configurations: BTreeSet<Vec<i8>>,
    domain: ValueDomain,
}

impl Constraint {
    // variables must already be in canonical ascending order; equality and
    // hashing key on (variables, configurations, domain)
    pub fn from_configurations(
        variables: Vec<usize>,
        configurations: BTreeSet<Vec<i8>>,
        domain: ValueDomain,
    ) -> Constraint {
        debug_assert!(variables.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(configurations.iter().all(|c| c.len() == variables.len()));
        Constraint {
            variables,
            configurations,
            domain,
        }
    }

    pub fn variables(&self) -> &[usize] {
        &self.variables
    }

    pub fn configurations(&self) -> &BTreeSet<Vec<i8>> {
        &self.configurations
    }

    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    pub fn arity(&self) -> usize {
        self.variables.len()
    }

    pub fn check(&self, assignment: &[i8]) -> bool {
        let mut tuple = Vec::with_capacity(self.variables.len());
        for &v in &self.variables {
            match assignment.get(v) {
                Some(&value) => tuple.push(value),
                None => return false,
            }
        }
        self.configurations.contains(&tuple)
    }

    // negate the required value of one variable; satisfying combinations of
    // the other variables are untouched
    pub fn flip_variable(&mut self, v: usize) {
        let Some(pos) = self.variables.iter().position(|&u| u == v) else {
            return;
        };
        self.configurations = self
            .configurations
            .iter()
            .map(|config| {
                let mut config = config.clone();
                config[pos] = self.domain.flip(config[pos]);
                config
            })
            .collect();
    }
}
