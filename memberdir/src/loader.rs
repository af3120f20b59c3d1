use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{MemberError, Result};
use crate::member::Member;

/// Reads one member per line. Blank lines and lines starting with `#` are
/// skipped; the first bad line aborts the read with its 1-based number.
pub fn read_members<B: BufRead>(reader: B) -> Result<Vec<Member>> {
    let mut members = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let member = trimmed.parse::<Member>().map_err(|err| match err {
            MemberError::Malformed { reason, .. } => MemberError::Malformed {
                line: index + 1,
                reason,
            },
            other => MemberError::Malformed {
                line: index + 1,
                reason: other.to_string(),
            },
        })?;
        members.push(member);
    }

    Ok(members)
}

/// Loads members from a text file, see `read_members`
pub fn load_members(path: &Path) -> Result<Vec<Member>> {
    let file = File::open(path)?;
    let members = read_members(BufReader::new(file))?;
    debug!("loaded {} members from {}", members.len(), path.display());
    Ok(members)
}
