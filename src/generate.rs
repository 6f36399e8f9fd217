use rand::Rng;

use crate::chart::{Beat, Lane, Note};

const NAME_PREFIX: &str = "rand-map-";
const NAME_HEX_LEN: usize = 10;
const HEX_ALPHABET: &[u8] = b"0123456789abcdef";

/// Draw one lane uniformly at random.
pub fn random_lane<R: Rng>(rng: &mut R) -> Lane {
    Lane::ALL[rng.gen_range(0..Lane::ALL.len())]
}

pub fn random_note<R: Rng>(rng: &mut R) -> Note {
    Note {
        lane: random_lane(rng),
    }
}

/// One beat holding a single random note.
pub fn random_beat<R: Rng>(rng: &mut R) -> Beat {
    vec![random_note(rng)]
}

/// `count` independently sampled beats, in order.
pub fn random_beat_sequence<R: Rng>(rng: &mut R, count: u32) -> Vec<Beat> {
    (0..count).map(|_| random_beat(rng)).collect()
}

/// A fresh chart name: `rand-map-` plus ten lowercase hex characters drawn
/// with replacement. Collisions (~1 in 16^10) are not mitigated.
pub fn random_chart_name<R: Rng>(rng: &mut R) -> String {
    let mut name = String::with_capacity(NAME_PREFIX.len() + NAME_HEX_LEN);
    name.push_str(NAME_PREFIX);
    for _ in 0..NAME_HEX_LEN {
        let idx = rng.gen_range(0..HEX_ALPHABET.len());
        name.push(HEX_ALPHABET[idx] as char);
    }
    name
}
