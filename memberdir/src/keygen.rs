//! Random phone numbers and synthetic members for exercising the table.

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::member::Member;

/// Digits in a `DDD-DDD-DDDD` phone number
pub const PHONE_DIGITS: usize = 10;

/// Digits in a generated card identifier
pub const CARD_DIGITS: usize = 16;

const FIRST_NAMES: [&str; 8] = ["Ada", "Ben", "Chloe", "Dev", "Emma", "Farid", "Grace", "Hiro"];
const LAST_NAMES: [&str; 6] = ["Smith", "Nguyen", "Patel", "Garcia", "Kowalski", "Okafor"];

fn format_phone(digits: &str) -> String {
    format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// Phone number whose first `significant` digits are random and the rest
/// zero. `significant` is clamped to `PHONE_DIGITS`.
pub fn random_phone<R: Rng>(rng: &mut R, significant: usize) -> String {
    let significant = significant.min(PHONE_DIGITS);
    let digits: String = (0..PHONE_DIGITS)
        .map(|i| {
            if i < significant {
                char::from(b'0' + rng.random_range(0..10u8))
            } else {
                '0'
            }
        })
        .collect();

    format_phone(&digits)
}

/// Number of distinct phones `random_phone` can produce
pub fn key_space(significant: usize) -> usize {
    10usize.pow(significant.min(PHONE_DIGITS) as u32)
}

/// `count` distinct phone numbers, clamped to the size of the key space.
pub fn unique_phones<R: Rng>(rng: &mut R, count: usize, significant: usize) -> Vec<String> {
    let count = count.min(key_space(significant));
    let mut seen = FxHashSet::default();
    let mut phones = Vec::with_capacity(count);

    while phones.len() < count {
        let phone = random_phone(rng, significant);
        if seen.insert(phone.clone()) {
            phones.push(phone);
        }
    }

    phones
}

/// Members with distinct random phone numbers and made up names, emails
/// and 16 digit card ids.
pub fn random_members<R: Rng>(
    rng: &mut R,
    count: usize,
    significant: usize,
) -> Vec<Member> {
    unique_phones(rng, count, significant)
        .into_iter()
        .enumerate()
        .filter_map(|(i, phone)| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            let email = format!("{}.{}{i}@example.com", first.to_lowercase(), last.to_lowercase());
            let card_id: String = (0..CARD_DIGITS)
                .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
                .collect();

            // phones come out of random_phone, always well formed
            Member::new(format!("{first} {last}"), phone, email, card_id).ok()
        })
        .collect()
}
