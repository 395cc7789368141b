use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cspgen::csp::problem::Csp;
use cspgen::csp::ValueDomain;
use cspgen::factories::random::{random_2in4sat, random_xorsat};

#[derive(Debug, Parser)]
#[command(name = "cspgen")]
#[command(about = "Random 2-in-4 SAT and XOR-SAT benchmark instances")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Generate a random 2-in-4 SAT instance
    TwoInFour {
        #[arg(long)]
        vars: usize,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// use the spin domain {-1,+1} instead of binary {0,1}
        #[arg(long)]
        spin: bool,
        /// random polarities with no planted solution
        #[arg(long)]
        unsat: bool,
        #[arg(long)]
        list: bool,
    },
    /// Generate a random XOR-SAT instance
    Xorsat {
        #[arg(long)]
        vars: usize,
        #[arg(long)]
        clauses: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        spin: bool,
        #[arg(long)]
        unsat: bool,
        #[arg(long)]
        list: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::TwoInFour {
            vars,
            clauses,
            seed,
            spin,
            unsat,
            list,
        } => {
            let domain = pick_domain(spin);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let csp = random_2in4sat(vars, clauses, domain, !unsat, &mut rng)?;
            print_instance("2IN4SAT", &csp, seed, !unsat, list);
        }
        Cmd::Xorsat {
            vars,
            clauses,
            seed,
            spin,
            unsat,
            list,
        } => {
            let domain = pick_domain(spin);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let csp = random_xorsat(vars, clauses, domain, !unsat, &mut rng)?;
            print_instance("XORSAT", &csp, seed, !unsat, list);
        }
    }
    Ok(())
}

fn pick_domain(spin: bool) -> ValueDomain {
    if spin {
        ValueDomain::SPIN
    } else {
        ValueDomain::BINARY
    }
}

fn print_instance(family: &str, csp: &Csp, seed: u64, planted: bool, list: bool) {
    println!(
        "{} vars={} clauses={} domain=({},{}) planted={} seed={}",
        family,
        csp.num_variables(),
        csp.num_constraints(),
        csp.domain.low,
        csp.domain.high,
        planted,
        seed
    );
    if list {
        for (i, constraint) in csp.constraints.iter().enumerate() {
            println!(
                "c{} scope={:?} configs={}",
                i,
                constraint.variables(),
                constraint.configurations().len()
            );
        }
    }
}
