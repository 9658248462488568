//! Task identifier generation.
//!
//! Ids are the concatenation of three base-36 parts:
//!
//! - the current Unix time in milliseconds,
//! - a per-process sequence number,
//! - a random 32-bit suffix.
//!
//! The time and random parts are zero-padded to a fixed width, so the three
//! parts never run into each other and the sequence number alone makes every
//! id produced by one process distinct. The time and random parts keep ids
//! from other sessions apart.

use chrono::Utc;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

const TIME_WIDTH: usize = 9;
const SALT_WIDTH: usize = 7;

pub fn new_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let salt: u32 = rand::rng().random();

    format!(
        "{:0>time$}{}{:0>salt$}",
        to_base36(millis),
        to_base36(seq),
        to_base36(salt as u64),
        time = TIME_WIDTH,
        salt = SALT_WIDTH
    )
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::with_capacity(13);
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}
