// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Polynomial string hashes evaluated with Horner's method.
//!
//! For an input `s` of length `n` and a multiplier `m` the digest is
//!
//! ```text
//!     m^(n-1) * s[0] + m^(n-2) * s[1] + ... + m * s[n-2] + s[n-1]   (mod 2^64)
//! ```
//!
//! computed incrementally as `h = m * h + s[i]` starting from `h = 0`. Two multipliers are provided,
//! 31 (the hash from K&R) and 127, each in a direct-multiplication form and in a form which uses
//! `m * h = (h << k) - h` for `m = 2^k - 1`. Both forms wrap modulo 2^64 and agree on every input.
//!
//! Warning: None of these are cryptographic hash functions.

use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;

/// Digest of a polynomial hash.
pub type Digest = u64;

/// A single step of Horner's method.
pub trait HornerStep {
    /// The multiplier `m` in `h = m * h + byte`.
    const MULTIPLIER: u64;

    /// Fold one byte into the running value.
    fn step(h: Digest, byte: u8) -> Digest;
}

/// Horner step computing `M * h` with a multiplication.
pub struct Polynomial<const M: u64>;

impl<const M: u64> HornerStep for Polynomial<M> {
    const MULTIPLIER: u64 = M;

    #[inline(always)]
    fn step(h: Digest, byte: u8) -> Digest {
        M.wrapping_mul(h).wrapping_add(byte as Digest)
    }
}

/// Horner step computing `(2^K - 1) * h` as `(h << K) - h`.
///
/// Bits shifted out at the top are dropped and the subtraction wraps, so this is the same
/// residue modulo 2^64 as the multiplication.
pub struct ShiftSubtract<const K: u32>;

impl<const K: u32> HornerStep for ShiftSubtract<K> {
    const MULTIPLIER: u64 = (1u64 << K) - 1;

    #[inline(always)]
    fn step(h: Digest, byte: u8) -> Digest {
        (h << K).wrapping_sub(h).wrapping_add(byte as Digest)
    }
}

/// Continue a Horner evaluation from `h` over `data`.
#[inline]
pub fn horner<S: HornerStep>(h: Digest, data: &[u8]) -> Digest {
    data.iter().fold(h, |h, &byte| S::step(h, byte))
}

/// Trait implemented by hash functions providing a 64 bit digest.
pub trait HashFunction: Default {
    /// Create a new hash function of the given type
    fn new() -> Self {
        Self::default()
    }

    /// Process the given data, and update the internal of the hash function.
    fn update<Data: AsRef<[u8]>>(&mut self, data: Data);

    /// Retrieve result and consume hash function.
    fn finalize(self) -> Digest;

    /// Compute the digest of the given data and consume the hash function.
    fn digest<Data: AsRef<[u8]>>(data: Data) -> Digest {
        let mut h = Self::default();
        h.update(data);
        h.finalize()
    }

    /// Compute a single digest from all slices in the iterator in order and consume the hash function.
    fn digest_iterator<K: AsRef<[u8]>, I: Iterator<Item = K>>(iter: I) -> Digest {
        let mut h = Self::default();
        iter.into_iter().for_each(|chunk| h.update(chunk.as_ref()));
        h.finalize()
    }
}

/// Streaming polynomial hash. Updating with `a` and then `b` gives the digest of `a || b`.
pub struct HornerHash<S: HornerStep> {
    state: Digest,
    step: PhantomData<S>,
}

impl<S: HornerStep> Default for HornerHash<S> {
    fn default() -> Self {
        Self {
            state: 0,
            step: PhantomData,
        }
    }
}

impl<S: HornerStep> Clone for HornerHash<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            step: PhantomData,
        }
    }
}

impl<S: HornerStep> fmt::Debug for HornerHash<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HornerHash")
            .field("multiplier", &S::MULTIPLIER)
            .field("state", &self.state)
            .finish()
    }
}

impl<S: HornerStep> HashFunction for HornerHash<S> {
    fn update<Data: AsRef<[u8]>>(&mut self, data: Data) {
        self.state = horner::<S>(self.state, data.as_ref());
    }

    fn finalize(self) -> Digest {
        self.state
    }
}

/// The hash function from K&R, multiplier 31.
pub type KrHash = HornerHash<Polynomial<31>>;

/// [KrHash] using a shift and a subtraction instead of a multiplication.
pub type FasterKrHash = HornerHash<ShiftSubtract<5>>;

/// Same recurrence as [KrHash] with multiplier 127.
pub type NewHash = HornerHash<Polynomial<127>>;

/// [NewHash] using a shift and a subtraction instead of a multiplication.
pub type FasterNewHash = HornerHash<ShiftSubtract<7>>;

pub fn kr_hash<Data: AsRef<[u8]>>(data: Data) -> Digest {
    KrHash::digest(data)
}

pub fn faster_kr_hash<Data: AsRef<[u8]>>(data: Data) -> Digest {
    FasterKrHash::digest(data)
}

pub fn new_hash<Data: AsRef<[u8]>>(data: Data) -> Digest {
    NewHash::digest(data)
}

pub fn faster_new_hash<Data: AsRef<[u8]>>(data: Data) -> Digest {
    FasterNewHash::digest(data)
}

/// The hash functions of this module, in reporting order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Kr,
    FasterKr,
    New,
    FasterNew,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Kr,
        HashAlgorithm::FasterKr,
        HashAlgorithm::New,
        HashAlgorithm::FasterNew,
    ];

    /// Human readable name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Kr => "K&R Hash",
            HashAlgorithm::FasterKr => "K&R Hash (faster)",
            HashAlgorithm::New => "New Hash",
            HashAlgorithm::FasterNew => "New Hash (faster)",
        }
    }

    pub fn multiplier(&self) -> u64 {
        match self {
            HashAlgorithm::Kr => Polynomial::<31>::MULTIPLIER,
            HashAlgorithm::FasterKr => ShiftSubtract::<5>::MULTIPLIER,
            HashAlgorithm::New => Polynomial::<127>::MULTIPLIER,
            HashAlgorithm::FasterNew => ShiftSubtract::<7>::MULTIPLIER,
        }
    }

    /// Whether the multiplication is replaced by a shift and a subtraction.
    pub fn is_shift_optimized(&self) -> bool {
        matches!(self, HashAlgorithm::FasterKr | HashAlgorithm::FasterNew)
    }

    pub fn digest<Data: AsRef<[u8]>>(&self, data: Data) -> Digest {
        match self {
            HashAlgorithm::Kr => kr_hash(data),
            HashAlgorithm::FasterKr => faster_kr_hash(data),
            HashAlgorithm::New => new_hash(data),
            HashAlgorithm::FasterNew => faster_new_hash(data),
        }
    }

    /// Hash a null-terminated string. Only the bytes before the terminator are hashed.
    pub fn digest_c_str(&self, s: &CStr) -> Digest {
        self.digest(s.to_bytes())
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
