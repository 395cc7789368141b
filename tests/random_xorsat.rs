use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cspgen::csp::constraint::Constraint;
use cspgen::csp::problem::Csp;
use cspgen::csp::ValueDomain;
use cspgen::error::CspError;
use cspgen::factories::random::random_xorsat;

fn exists_satisfying(csp: &Csp, num_variables: usize) -> bool {
    let [low, high] = csp.domain.values();
    (0u32..1u32 << num_variables).any(|mask| {
        let assignment: Vec<i8> = (0..num_variables)
            .map(|v| if mask >> v & 1 == 1 { high } else { low })
            .collect();
        csp.check(&assignment)
    })
}

// an xor clause is one full parity class: all 4 tuples whose high-count has a
// fixed parity
fn is_parity_class(c: &Constraint) -> bool {
    if c.configurations().len() != 4 {
        return false;
    }
    let domain = c.domain();
    let parities: HashSet<usize> = c
        .configurations()
        .iter()
        .map(|config| config.iter().filter(|&&v| domain.is_high(v)).count() % 2)
        .collect();
    parities.len() == 1
}

fn high_parity(c: &Constraint) -> usize {
    let domain = c.domain();
    c.configurations()
        .iter()
        .map(|config| config.iter().filter(|&&v| domain.is_high(v)).count() % 2)
        .next()
        .unwrap_or(0)
}

#[test]
fn planted_instance_has_requested_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let csp = random_xorsat(9, 30, ValueDomain::BINARY, true, &mut rng).expect("generate");

    assert_eq!(csp.num_variables(), 9);
    assert_eq!(csp.num_constraints(), 30);
    let unique: HashSet<_> = csp.constraints.iter().collect();
    assert_eq!(unique.len(), 30);
    for c in &csp.constraints {
        assert_eq!(c.arity(), 3);
        assert!(c.variables().windows(2).all(|w| w[0] < w[1]));
        assert!(is_parity_class(c));
    }
}

#[test]
fn planted_instance_is_satisfiable() {
    for seed in 0..8 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let csp = random_xorsat(7, 20, ValueDomain::BINARY, true, &mut rng).expect("generate");
        assert!(exists_satisfying(&csp, 7), "seed {seed}");
    }
}

#[test]
fn planted_spin_instance_is_satisfiable() {
    for seed in 40..44 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let csp = random_xorsat(7, 15, ValueDomain::SPIN, true, &mut rng).expect("generate");
        assert!(exists_satisfying(&csp, 7), "seed {seed}");
    }
}

#[test]
fn zero_clauses_keeps_every_variable() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let csp = random_xorsat(6, 0, ValueDomain::BINARY, true, &mut rng).expect("generate");
    assert_eq!(csp.num_variables(), 6);
    assert_eq!(csp.num_constraints(), 0);
}

#[test]
fn two_variables_is_too_few() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = random_xorsat(2, 1, ValueDomain::BINARY, true, &mut rng).expect_err("reject");
    assert_eq!(
        err,
        CspError::InvalidSize {
            family: "xor",
            minimum: 3,
            got: 2,
        }
    );
}

#[test]
fn request_above_population_bound_is_rejected() {
    // 8 * C(5,3) = 80
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = random_xorsat(5, 81, ValueDomain::BINARY, true, &mut rng).expect_err("reject");
    assert_eq!(
        err,
        CspError::TooManyClauses {
            requested: 81,
            maximum: 80,
        }
    );
}

#[test]
fn planted_run_covers_every_scope_once() {
    // the planted solution pins one parity per 3-subset, so C(5,3) = 10
    // clauses are reachable and a request for all of them must cover every
    // scope exactly once
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let csp = random_xorsat(5, 10, ValueDomain::BINARY, true, &mut rng).expect("generate");

    assert_eq!(csp.num_constraints(), 10);
    let scopes: HashSet<Vec<usize>> = csp
        .constraints
        .iter()
        .map(|c| c.variables().to_vec())
        .collect();
    assert_eq!(scopes.len(), 10);
}

#[test]
fn unplanted_run_covers_both_parities_of_every_scope() {
    let mut rng = ChaCha8Rng::seed_from_u64(29);
    let csp = random_xorsat(5, 20, ValueDomain::BINARY, false, &mut rng).expect("generate");

    assert_eq!(csp.num_constraints(), 20);
    let mut per_scope: HashMap<Vec<usize>, HashSet<usize>> = HashMap::new();
    for c in &csp.constraints {
        per_scope
            .entry(c.variables().to_vec())
            .or_default()
            .insert(high_parity(c));
    }
    assert_eq!(per_scope.len(), 10);
    assert!(per_scope.values().all(|parities| parities.len() == 2));
}

#[test]
fn stated_bound_is_not_reachable_in_one_planted_run() {
    // the feasibility bound counts 8 polarity patterns per scope but a fixed
    // planted solution can only produce one parity class per scope
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let err = random_xorsat(5, 80, ValueDomain::BINARY, true, &mut rng).expect_err("stall");
    assert!(matches!(err, CspError::SampleBudgetExhausted { .. }));
}

#[test]
fn same_seed_replays_the_same_instance() {
    let mut a = ChaCha8Rng::seed_from_u64(123);
    let mut b = ChaCha8Rng::seed_from_u64(123);
    let first = random_xorsat(11, 40, ValueDomain::SPIN, true, &mut a).expect("generate");
    let second = random_xorsat(11, 40, ValueDomain::SPIN, true, &mut b).expect("generate");
    assert_eq!(first.constraints, second.constraints);
}
