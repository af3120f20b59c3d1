use std::fmt;
use std::str::FromStr;

use probetable::Keyed;

use crate::error::{MemberError, Result};

/// Returns true for phone numbers written as `DDD-DDD-DDDD`
pub fn is_phone_number(phone: &str) -> bool {
    let bytes = phone.as_bytes();
    bytes.len() == 12
        && bytes.iter().enumerate().all(|(i, b)| match i {
            3 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Returns true for non-empty, all digit card identifiers
pub fn is_card_id(card_id: &str) -> bool {
    !card_id.is_empty() && card_id.bytes().all(|b| b.is_ascii_digit())
}

/// A directory member, stored in the table under its phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    phone: String,
    email: String,
    card_id: String,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        card_id: impl Into<String>,
    ) -> Result<Self> {
        let phone = phone.into();
        if !is_phone_number(&phone) {
            return Err(MemberError::InvalidPhone(phone));
        }
        let card_id = card_id.into();
        if !is_card_id(&card_id) {
            return Err(MemberError::InvalidCardId(card_id));
        }

        Ok(Self {
            name: name.into(),
            phone,
            email: email.into(),
            card_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }
}

impl Keyed for Member {
    fn key(&self) -> &str {
        &self.phone
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.name, self.phone, self.email, self.card_id
        )
    }
}

/// Parses `name,phone,email,card_id`; surrounding whitespace on each field
/// is ignored. Malformed lines are reported with line 0, the loader fills
/// in the real line number.
impl FromStr for Member {
    type Err = MemberError;

    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, phone, email, card_id] = fields.as_slice() else {
            return Err(MemberError::Malformed {
                line: 0,
                reason: format!("expected 4 comma separated fields, found {}", fields.len()),
            });
        };

        if name.is_empty() {
            return Err(MemberError::Malformed {
                line: 0,
                reason: "empty name".to_string(),
            });
        }

        Member::new(*name, *phone, *email, *card_id)
    }
}
