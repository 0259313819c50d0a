//! NEXTHASH-256
//! ------------
//! A 256-bit Merkle-Damgård hash built around a dual-half ARX core with
//! multiplicative cross-mixing. Each 64-byte block expands into a 24-word
//! schedule (SHA-2 style linear recurrence plus an odd-forced product term)
//! and is folded into a 512-bit chaining state over 24 rounds; the two
//! 256-bit halves are entangled by four 32-bit products every round and
//! interleaved every fourth round. Blocks chain Davies-Meyer style.
//!
//! * State  : 16 x 32-bit words (512 bit)
//! * Block  : 64 bytes          (512 bit)
//! * Rounds : 24
//! * Output : 32 bytes          (256 bit)
//!
//! All word arithmetic wraps modulo 2^32; every multi-byte integer on the
//! wire (block words, length field, digest words) is big-endian.
//!
//! Security NOTE: this is an original, non-standardized construction. The
//! [`analysis`] module reports its diffusion figures; reported numbers are
//! not a proof of cryptographic strength. Wait for independent public
//! cryptanalysis before production use.

pub mod analysis;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Constants & parameters
// ---------------------------------------------------------------------------

const ROUNDS: usize = 24;
const BLOCK_BYTES: usize = 64;
const STATE_WORDS: usize = 16;
const SCHEDULE_WORDS: usize = 24;
const DIGEST_BYTES: usize = 32;

/// Byte offset inside the last padded block where the length field starts.
const LENGTH_OFFSET: usize = 56;

/// Longest message whose bit count still fits the 8-byte length field.
const MAX_MESSAGE_BYTES: u64 = u64::MAX / 8;

/// Initial chaining state: first 32 fractional bits of sqrt(p) for the
/// first 16 primes 2..53. The first eight words coincide with the SHA-256
/// IV; the same rule is simply extended to fill 16 words. *Changing this
/// table changes the hash*.
const IV: [u32; STATE_WORDS] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
    0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
    0xcbbb9d5d, 0x629a292a, 0x9159015a, 0x152fecd8,
    0x67332667, 0x8eb44a87, 0xdb0c2e0d, 0x47b5481d,
];

/// Round constants: first 32 fractional bits of cbrt(p) for the first 24
/// primes 2..89 (the first 24 entries of the SHA-256 K table).
const K: [u32; ROUNDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5,
    0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3,
    0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc,
    0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
];

/// XORed into `K[t]` for the lower-half compression so the two halves never
/// consume the same round constant.
const LOWER_RC_MASK: u32 = 0x5a5a5a5a;

/// Half-interleaving permutation applied after every fourth round:
/// `[a..h, i..p]` becomes `[a,i,b,j,c,k,d,l,e,m,f,n,g,o,h,p]`. Breaks the
/// lag-8 self-similarity of the two-half layout down to lag 1.
const INTERLEAVE: [usize; STATE_WORDS] = [0, 8, 1, 9, 2, 10, 3, 11, 4, 12, 5, 13, 6, 14, 7, 15];

// ---------------------------------------------------------------------------
// Word primitives
// ---------------------------------------------------------------------------

#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[inline(always)]
fn sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

// ---------------------------------------------------------------------------
// Padding
// ---------------------------------------------------------------------------

/// Materialize the padded form of `msg`: the message, a single `0x80`
/// marker, the shortest zero fill reaching 56 bytes (mod 64), then the
/// original bit length as an 8-byte big-endian integer.
///
/// The one-shot [`nexthash`] never allocates this buffer; it consumes full
/// blocks straight from the input and builds only the one or two tail
/// blocks on the stack. Both paths produce the identical block sequence.
///
/// # Panics
/// If the bit count of `msg` does not fit the 8-byte length field.
pub fn pad(msg: &[u8]) -> Vec<u8> {
    assert!(
        msg.len() as u64 <= MAX_MESSAGE_BYTES,
        "message of {} bytes overflows the 64-bit length field",
        msg.len()
    );
    let mut padded = Vec::with_capacity(msg.len() + 2 * BLOCK_BYTES);
    padded.extend_from_slice(msg);
    padded.push(0x80);
    while padded.len() % BLOCK_BYTES != LENGTH_OFFSET {
        padded.push(0x00);
    }
    padded.extend_from_slice(&((msg.len() as u64) * 8).to_be_bytes());
    debug_assert!(padded.len() % BLOCK_BYTES == 0);
    padded
}

// ---------------------------------------------------------------------------
// Message schedule
// ---------------------------------------------------------------------------

/// Expand one 64-byte block into the 24-word schedule. Words 0-15 are the
/// big-endian parse of the block; words 16-23 add a SHA-2 linear recurrence
/// to a product of two earlier words. The `| 1` forces both multiplicands
/// odd, so the product term can never collapse to zero.
fn expand_schedule(block: &[u8]) -> [u32; SCHEDULE_WORDS] {
    debug_assert_eq!(block.len(), BLOCK_BYTES);
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    for idx in 16..SCHEDULE_WORDS {
        let linear = small_sigma1(w[idx - 2])
            .wrapping_add(w[idx - 7])
            .wrapping_add(small_sigma0(w[idx - 15]))
            .wrapping_add(w[idx - 16]);
        let nonlinear = (w[idx - 3] | 1).wrapping_mul(w[idx - 10] | 1);
        w[idx] = linear.wrapping_add(nonlinear);
    }
    w
}

// ---------------------------------------------------------------------------
// Round / compression engine
// ---------------------------------------------------------------------------

/// Absorb one block into the chaining state: 24 rounds over a working copy,
/// then a word-wise Davies-Meyer feed-forward into `state`.
fn compress(state: &mut [u32; STATE_WORDS], w: &[u32; SCHEDULE_WORDS]) {
    let mut s = *state;
    for t in 0..ROUNDS {
        let [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p] = s;

        // Upper half: SHA-2 style compression terms.
        let t1 = h
            .wrapping_add(sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = sigma0(a).wrapping_add(maj(a, b, c));

        // Cross-half products: each multiplies an upper-half word XOR a
        // lower-half word, entangling the halves nonlinearly every round.
        let m1 = (a ^ i).wrapping_mul(e ^ m);
        let m2 = (b ^ j).wrapping_mul(f ^ n);
        let m3 = (c ^ k).wrapping_mul(g ^ o);
        let m4 = (d ^ l).wrapping_mul(h ^ p);

        // Lower half: same structure, round constant decorrelated by mask.
        let t3 = p
            .wrapping_add(sigma1(m))
            .wrapping_add(ch(m, n, o))
            .wrapping_add(K[t] ^ LOWER_RC_MASK)
            .wrapping_add(w[t]);
        let t4 = sigma0(i).wrapping_add(maj(i, j, k));

        s = [
            t1.wrapping_add(t2).wrapping_add(m1),
            a,
            b,
            c.wrapping_add(m2),
            d.wrapping_add(t1),
            e,
            f,
            g.wrapping_add(m3),
            t3.wrapping_add(t4).wrapping_add(m1),
            i,
            j,
            k.wrapping_add(m4),
            l.wrapping_add(t3),
            m,
            n,
            o.wrapping_add(m2 ^ m3),
        ];

        if t % 4 == 3 {
            let prev = s;
            for (dst, &src) in s.iter_mut().zip(INTERLEAVE.iter()) {
                *dst = prev[src];
            }
        }
    }
    for (chained, worked) in state.iter_mut().zip(s) {
        *chained = chained.wrapping_add(worked);
    }
}

// ---------------------------------------------------------------------------
// Finalization
// ---------------------------------------------------------------------------

/// Fold the 16-word state down to the 8 output words and serialize them
/// big-endian. Pass 2 reads every lane from the pass-1 snapshot; writing in
/// place would make lanes 3..8 depend on already-updated lane values and
/// the digest on loop order.
fn finalize(state: &[u32; STATE_WORDS]) -> [u8; DIGEST_BYTES] {
    let mut folded = [0u32; 8];
    for (idx, slot) in folded.iter_mut().enumerate() {
        let upper = state[idx];
        let lower = state[idx + 8];
        let x = upper ^ lower;
        *slot = x
            .wrapping_add((upper | 1).wrapping_mul(lower.rotate_left(13) | 1))
            .wrapping_add(x.rotate_right(idx as u32 + 1));
    }

    let snapshot = folded;
    for (idx, slot) in folded.iter_mut().enumerate() {
        *slot = snapshot[idx]
            .wrapping_add((snapshot[(idx + 1) % 8] | 1).wrapping_mul(snapshot[(idx + 5) % 8] | 1))
            .wrapping_add(snapshot[(idx + 3) % 8].rotate_right(7));
    }

    let mut digest = [0u8; DIGEST_BYTES];
    for (bytes, word) in digest.chunks_exact_mut(4).zip(folded) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

// ---------------------------------------------------------------------------
// Public hashing API
// ---------------------------------------------------------------------------

/// Compute the NEXTHASH-256 digest of `msg`.
///
/// Pure and deterministic: identical input always yields the identical
/// 32-byte digest, and no state survives the call. Text callers hash the
/// UTF-8 encoding via `s.as_bytes()`.
///
/// # Panics
/// If the bit count of `msg` does not fit the 8-byte length field of the
/// padding (messages beyond 2^64 - 1 bits).
pub fn nexthash(msg: &[u8]) -> [u8; DIGEST_BYTES] {
    assert!(
        msg.len() as u64 <= MAX_MESSAGE_BYTES,
        "message of {} bytes overflows the 64-bit length field",
        msg.len()
    );
    let mut state = IV;

    let mut blocks = msg.chunks_exact(BLOCK_BYTES);
    for block in blocks.by_ref() {
        compress(&mut state, &expand_schedule(block));
    }

    // Tail: at most two further blocks carry the 0x80 marker, the zero
    // fill and the 8-byte big-endian bit length.
    let rem = blocks.remainder();
    let mut tail = [0u8; 2 * BLOCK_BYTES];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    let tail_len = if rem.len() < LENGTH_OFFSET {
        BLOCK_BYTES
    } else {
        2 * BLOCK_BYTES
    };
    let bit_len = (msg.len() as u64) * 8;
    tail[tail_len - 8..tail_len].copy_from_slice(&bit_len.to_be_bytes());
    for block in tail[..tail_len].chunks_exact(BLOCK_BYTES) {
        compress(&mut state, &expand_schedule(block));
    }

    finalize(&state)
}

/// [`nexthash`] as a 64-character lowercase hex string.
pub fn nexthash_hex(msg: &[u8]) -> String {
    hex::encode(nexthash(msg))
}

/// Hash many independent messages in parallel using Rayon (feature
/// `parallel`). Each computation owns disjoint state, so this is a plain
/// data-parallel map.
#[cfg(feature = "parallel")]
pub fn nexthash_batch(messages: &[&[u8]]) -> Vec<[u8; DIGEST_BYTES]> {
    messages.par_iter().map(|m| nexthash(m)).collect()
}
