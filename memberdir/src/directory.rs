use log::info;
use probetable::{Keyed, ProbeTable, TableConfig, TableError};

use crate::error::Result;
use crate::hashing::HashStrategy;
use crate::member::Member;

/// A probe table of members keyed by phone number
pub type MemberTable<H> = ProbeTable<Member, H>;

/// Outcome of loading a batch of members into a table
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub inserted: usize,
    /// Phone numbers that were not stored, with the reason
    pub rejected: Vec<(String, TableError)>,
}

/// Empty member table hashed with `strategy`, sized by `config`
pub fn member_table(
    strategy: HashStrategy,
    config: TableConfig,
) -> MemberTable<impl Fn(&str) -> usize + Copy> {
    ProbeTable::with_config(config, strategy.hasher(config.capacity))
}

/// Inserts every member, skipping the ones the table refuses.
pub fn populate<H, I>(table: &mut MemberTable<H>, members: I) -> LoadSummary
where
    H: Fn(&str) -> usize,
    I: IntoIterator<Item = Member>,
{
    let mut summary = LoadSummary::default();

    for member in members {
        let phone = member.key().to_owned();
        match table.insert(member) {
            Ok(_) => summary.inserted += 1,
            Err(err) => summary.rejected.push((phone, err)),
        }
    }

    info!(
        "stored {} members, rejected {}, load factor {:.2}",
        summary.inserted,
        summary.rejected.len(),
        table.load_factor()
    );
    summary
}

/// Inserts members until the table refuses one, returning how many were
/// stored. The refused member and everything after it are dropped.
pub fn populate_strict<H, I>(table: &mut MemberTable<H>, members: I) -> Result<usize>
where
    H: Fn(&str) -> usize,
    I: IntoIterator<Item = Member>,
{
    let mut inserted = 0;
    for member in members {
        table.insert(member)?;
        inserted += 1;
    }

    info!("stored {inserted} members, load factor {:.2}", table.load_factor());
    Ok(inserted)
}
