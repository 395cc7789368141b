use indexmap::IndexSet;
use rand::seq::index;
use rand::Rng;

use crate::csp::problem::Csp;
use crate::csp::ValueDomain;
use crate::error::CspError;
use crate::factories::clause::{sat2in4, xor_gate};

// the six balanced 2-in-4 patterns: exactly two positions high
const CONFIGURATIONS_2IN4: [[u8; 4]; 6] = [
    [0, 0, 1, 1],
    [0, 1, 0, 1],
    [1, 0, 0, 1],
    [0, 1, 1, 0],
    [1, 0, 1, 0],
    [1, 1, 0, 0],
];

// the four even-parity xor patterns
const CONFIGURATIONS_XOR: [[u8; 3]; 4] = [[0, 0, 0], [0, 1, 1], [1, 0, 1], [1, 1, 0]];

pub fn random_2in4sat<R: Rng>(
    num_variables: usize,
    num_clauses: usize,
    domain: ValueDomain,
    satisfiable: bool,
    rng: &mut R,
) -> Result<Csp, CspError> {
    if num_variables < 4 {
        return Err(CspError::InvalidSize {
            family: "2in4",
            minimum: 4,
            got: num_variables,
        });
    }
    // 16 negation patterns per 4-subset
    let maximum = 16 * n_choose_k(num_variables, 4);
    if num_clauses as u128 > maximum {
        return Err(CspError::TooManyClauses {
            requested: num_clauses,
            maximum,
        });
    }

    let mut csp = Csp::new(domain)?;
    let mut constraints = IndexSet::new();
    let budget = draw_budget(num_clauses, maximum);
    let mut draws = 0u128;

    if satisfiable {
        let planted = plant_solution(num_variables, domain, rng);

        while constraints.len() < num_clauses {
            spend_draw(&mut draws, budget, constraints.len(), num_clauses)?;

            let scope = sample_scope(num_variables, 4, rng);
            let config = CONFIGURATIONS_2IN4[rng.random_range(0..CONFIGURATIONS_2IN4.len())];

            // negate exactly the variables whose planted value disagrees with
            // the chosen pattern
            let mut pos = Vec::with_capacity(4);
            let mut neg = Vec::with_capacity(4);
            for (idx, &v) in scope.iter().enumerate() {
                if (config[idx] == 1) == domain.is_high(planted[v]) {
                    pos.push(v);
                } else {
                    neg.push(v);
                }
            }

            let constraint = sat2in4(&pos, &neg, domain)?;
            debug_assert!(
                constraint.check(&planted),
                "planted solution must satisfy every generated clause"
            );
            constraints.insert(constraint);
        }
    } else {
        while constraints.len() < num_clauses {
            spend_draw(&mut draws, budget, constraints.len(), num_clauses)?;

            let scope = sample_scope(num_variables, 4, rng);

            // unbiased coin flip per variable, no hidden assignment
            let mut pos = Vec::with_capacity(4);
            let mut neg = Vec::with_capacity(4);
            for &v in &scope {
                if rng.random::<bool>() {
                    pos.push(v);
                } else {
                    neg.push(v);
                }
            }

            constraints.insert(sat2in4(&pos, &neg, domain)?);
        }
    }

    for constraint in constraints {
        csp.add_constraint(constraint);
    }
    // variables that never made it into a clause still belong to the instance
    for v in 0..num_variables {
        csp.add_variable(v);
    }
    Ok(csp)
}

pub fn random_xorsat<R: Rng>(
    num_variables: usize,
    num_clauses: usize,
    domain: ValueDomain,
    satisfiable: bool,
    rng: &mut R,
) -> Result<Csp, CspError> {
    if num_variables < 3 {
        return Err(CspError::InvalidSize {
            family: "xor",
            minimum: 3,
            got: num_variables,
        });
    }
    // 8 negation patterns per 3-subset
    let maximum = 8 * n_choose_k(num_variables, 3);
    if num_clauses as u128 > maximum {
        return Err(CspError::TooManyClauses {
            requested: num_clauses,
            maximum,
        });
    }

    let mut csp = Csp::new(domain)?;
    let mut constraints = IndexSet::new();
    let budget = draw_budget(num_clauses, maximum);
    let mut draws = 0u128;

    if satisfiable {
        let planted = plant_solution(num_variables, domain, rng);

        while constraints.len() < num_clauses {
            spend_draw(&mut draws, budget, constraints.len(), num_clauses)?;

            let scope = sample_scope(num_variables, 3, rng);
            let mut constraint = xor_gate(&scope, domain)?;

            // flip every variable whose planted value disagrees with the
            // chosen pattern
            let config = CONFIGURATIONS_XOR[rng.random_range(0..CONFIGURATIONS_XOR.len())];
            for (idx, &v) in scope.iter().enumerate() {
                if (config[idx] == 1) != domain.is_high(planted[v]) {
                    constraint.flip_variable(v);
                }
            }

            debug_assert!(
                constraint.check(&planted),
                "planted solution must satisfy every generated clause"
            );
            constraints.insert(constraint);
        }
    } else {
        while constraints.len() < num_clauses {
            spend_draw(&mut draws, budget, constraints.len(), num_clauses)?;

            let scope = sample_scope(num_variables, 3, rng);
            let mut constraint = xor_gate(&scope, domain)?;

            for &v in &scope {
                if rng.random::<bool>() {
                    constraint.flip_variable(v);
                }
            }

            constraints.insert(constraint);
        }
    }

    for constraint in constraints {
        csp.add_constraint(constraint);
    }
    // variables that never made it into a clause still belong to the instance
    for v in 0..num_variables {
        csp.add_variable(v);
    }
    Ok(csp)
}

fn plant_solution<R: Rng>(num_variables: usize, domain: ValueDomain, rng: &mut R) -> Vec<i8> {
    (0..num_variables)
        .map(|_| {
            if rng.random::<bool>() {
                domain.high
            } else {
                domain.low
            }
        })
        .collect()
}

fn sample_scope<R: Rng>(num_variables: usize, arity: usize, rng: &mut R) -> Vec<usize> {
    // distinct within one draw, sorted so equal scopes compare equal
    let mut scope = index::sample(rng, num_variables, arity).into_vec();
    scope.sort_unstable();
    scope
}

fn spend_draw(
    draws: &mut u128,
    budget: u128,
    collected: usize,
    requested: usize,
) -> Result<(), CspError> {
    if *draws >= budget {
        return Err(CspError::SampleBudgetExhausted {
            budget,
            collected,
            requested,
        });
    }
    *draws += 1;
    Ok(())
}

// collision allowance for the retry-until-unique loop; generous enough that
// any reachable request finishes with overwhelming probability
fn draw_budget(num_clauses: usize, maximum: u128) -> u128 {
    let requested = num_clauses as u128;
    if requested == 0 {
        return 0;
    }
    let per_draw = maximum / (maximum - requested + 1) + 1;
    requested.saturating_mul(per_draw).saturating_mul(64).max(4096)
}

fn n_choose_k(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let mut result: u128 = 1;
    for i in 0..k as u128 {
        // the running product is always an exact binomial, so the division is
        // exact; saturate only at astronomically large n
        result = result
            .checked_mul(n as u128 - i)
            .map(|r| r / (i + 1))
            .unwrap_or(u128::MAX);
    }
    result
}
