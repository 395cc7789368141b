use std::collections::BTreeSet;

use crate::csp::constraint::Constraint;
use crate::csp::ValueDomain;
use crate::error::CspError;

// satisfied iff exactly 2 of the 4 literals are on; a pos variable is on when
// high, a neg variable is on when low
pub fn sat2in4(pos: &[usize], neg: &[usize], domain: ValueDomain) -> Result<Constraint, CspError> {
    domain.validate()?;
    let variables = sorted_scope("2in4", pos.iter().chain(neg).copied().collect(), 4)?;
    let negated: BTreeSet<usize> = neg.iter().copied().collect();

    let mut configurations = BTreeSet::new();
    for mask in 0u32..16 {
        let tuple: Vec<i8> = (0..4)
            .map(|bit| {
                if mask >> bit & 1 == 1 {
                    domain.high
                } else {
                    domain.low
                }
            })
            .collect();
        let on = variables
            .iter()
            .zip(&tuple)
            .filter(|&(v, &value)| domain.is_high(value) != negated.contains(v))
            .count();
        if on == 2 {
            configurations.insert(tuple);
        }
    }
    Ok(Constraint::from_configurations(
        variables,
        configurations,
        domain,
    ))
}

// satisfied iff an even number of the 3 variables are high; z = x xor y
// expressed as a satisfying set over the sorted scope
pub fn xor_gate(scope: &[usize], domain: ValueDomain) -> Result<Constraint, CspError> {
    domain.validate()?;
    let variables = sorted_scope("xor", scope.to_vec(), 3)?;

    let mut configurations = BTreeSet::new();
    for mask in 0u32..8 {
        if mask.count_ones() % 2 != 0 {
            continue;
        }
        let tuple: Vec<i8> = (0..3)
            .map(|bit| {
                if mask >> bit & 1 == 1 {
                    domain.high
                } else {
                    domain.low
                }
            })
            .collect();
        configurations.insert(tuple);
    }
    Ok(Constraint::from_configurations(
        variables,
        configurations,
        domain,
    ))
}

fn sorted_scope(
    family: &'static str,
    mut variables: Vec<usize>,
    arity: usize,
) -> Result<Vec<usize>, CspError> {
    variables.sort_unstable();
    if variables.len() != arity || variables.windows(2).any(|w| w[0] == w[1]) {
        return Err(CspError::InvalidScope { family, arity });
    }
    Ok(variables)
}
