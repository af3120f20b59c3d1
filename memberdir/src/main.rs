use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use memberdir::logger::initialize_logger;
use memberdir::{
    HashStrategy, Member, keygen, loader, member_table, populate, populate_strict, report,
};
use probetable::{DEFAULT_CAPACITY, DuplicatePolicy, TableConfig, TableError};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Compare the new key against its home slot only
    HomeSlot,
    /// Scan the whole probe chain for the new key
    ProbeChain,
}

impl From<Policy> for DuplicatePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::HomeSlot => DuplicatePolicy::HomeSlot,
            Policy::ProbeChain => DuplicatePolicy::ProbeChain,
        }
    }
}

/// Load members into a linear probing table and report on collisions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Member file, one `name,phone,email,card_id` per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Members to generate when no input file is given
    #[arg(short = 'n', long, default_value_t = 50)]
    count: usize,

    /// Random leading digits of generated phone numbers
    #[arg(short, long, default_value_t = keygen::PHONE_DIGITS)]
    digits: usize,

    /// Seed for generated members
    #[arg(long)]
    seed: Option<u64>,

    /// Hash function used to compute home slots
    #[arg(short, long, value_enum, default_value_t = HashStrategy::FoldBoundary)]
    strategy: HashStrategy,

    /// Number of slots in the table, fixed for the whole run
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// How inserts detect a phone number that is already stored
    #[arg(short, long, value_enum, default_value_t = Policy::ProbeChain)]
    policy: Policy,

    /// Phone numbers to look up once the table is filled
    #[arg(short, long)]
    lookup: Vec<String>,

    /// Print the per slot probe histogram
    #[arg(long)]
    histogram: bool,

    /// Stop at the first member the table refuses instead of skipping it
    #[arg(long)]
    strict: bool,
}

fn generate(args: &Args) -> Vec<Member> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    keygen::random_members(&mut rng, args.count, args.digits)
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logger();
    let args = Args::parse();

    if args.capacity == 0 {
        return Err("capacity must be positive".into());
    }

    let members = match &args.input {
        Some(path) => loader::load_members(path)?,
        None => generate(&args),
    };

    let config = TableConfig::default()
        .with_capacity(args.capacity)
        .with_duplicate_policy(args.policy.into());
    let mut table = member_table(args.strategy, config);
    info!(
        "loading {} members with {} hashing into {} slots",
        members.len(),
        args.strategy,
        args.capacity
    );

    if args.strict {
        populate_strict(&mut table, members)?;
    } else {
        let summary = populate(&mut table, members);
        if !summary.rejected.is_empty() {
            println!("{} members skipped:", summary.rejected.len());
            for (phone, err) in &summary.rejected {
                println!("  {phone}: {err}");
            }
            println!();
        }
    }

    report::write_report(&mut io::stdout().lock(), &table, args.histogram)?;

    for phone in &args.lookup {
        match table.search(phone) {
            Ok(member) => println!("{phone}: {member}"),
            Err(TableError::EmptyTable) => println!("{phone}: directory is empty"),
            Err(err) => println!("{phone}: {err}"),
        }
    }

    Ok(())
}
