//! AES-128 block cipher core
//!
//! This module implements the AES-128 substitution-permutation network as
//! specified in FIPS 197, with the byte diffusion arithmetic routed through
//! the [`Gf256`] field capability handed in at construction time.
//!
//! The round-key schedule is expanded fresh inside every encrypt/decrypt
//! call, held in a zeroizing buffer, and dropped when the call returns —
//! nothing key-dependent is cached across invocations. The S-boxes and
//! round constants are fixed public tables shared process-wide.

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::field::Gf256;
use crate::types::SecretBytes;
use common::security::SecretBuffer;
use params::utils::cipher::{AES128_KEY_SIZE, AES128_NK, AES128_ROUNDS, AES_BLOCK_SIZE, AES_NB};
use rand::{CryptoRng, RngCore};
use std::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of 32-bit words in the expanded AES-128 key schedule
const SCHEDULE_WORDS: usize = AES_NB * (AES128_ROUNDS + 1);

/// Expanded key schedule size in bytes
const SCHEDULE_BYTES: usize = SCHEDULE_WORDS * 4;

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// AES forward S-box (FIPS 197, figure 7)
const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// AES inverse S-box (FIPS 197, figure 14)
const INV_SBOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

/// Converts 4 bytes to a u32 in big-endian order
#[inline(always)]
fn bytes_to_u32(bytes: &[u8]) -> u32 {
    ((bytes[0] as u32) << 24) | ((bytes[1] as u32) << 16) | ((bytes[2] as u32) << 8) | (bytes[3] as u32)
}

/// Converts a u32 to 4 bytes in big-endian order
#[inline(always)]
fn u32_to_bytes(word: u32) -> [u8; 4] {
    [
        (word >> 24) as u8,
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
    ]
}

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rotate_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Substitutes each byte in a word using the AES S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let bytes = u32_to_bytes(word);
    let sub_bytes = [
        SBOX[bytes[0] as usize],
        SBOX[bytes[1] as usize],
        SBOX[bytes[2] as usize],
        SBOX[bytes[3] as usize],
    ];
    bytes_to_u32(&sub_bytes)
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// Expanded AES-128 round keys, derived fresh for every call.
///
/// The schedule is immutable once generated and zeroized when dropped; its
/// lifetime is one encrypt or decrypt invocation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeySchedule {
    bytes: SecretBuffer<SCHEDULE_BYTES>,
}

impl RoundKeySchedule {
    /// Number of 32-bit words in the schedule (Nb × (Nr + 1))
    pub const WORDS: usize = SCHEDULE_WORDS;

    /// Read one 32-bit schedule word
    pub fn word(&self, index: usize) -> Result<u32> {
        validate::max_length("round key word index", index + 1, Self::WORDS)?;
        let bytes = self.bytes.as_ref();
        Ok(bytes_to_u32(&bytes[index * 4..(index + 1) * 4]))
    }

    /// The 16-byte round key for one round
    fn round_key(&self, round: usize) -> &[u8] {
        let offset = round * AES_BLOCK_SIZE;
        &self.bytes.as_ref()[offset..offset + AES_BLOCK_SIZE]
    }
}

/// AES-128 block cipher holding its finite-field capability.
#[derive(Clone, Copy, Debug, Default)]
pub struct Aes128 {
    field: Gf256,
}

impl Aes128 {
    /// Construct the cipher over the given GF(2⁸) capability.
    pub fn new(field: Gf256) -> Self {
        Aes128 { field }
    }

    /// Expand a 16-byte key into the 44-word round-key schedule.
    ///
    /// Words at positions aligned to the key length are byte-rotated,
    /// substituted through the S-box, and folded with a round constant
    /// before the XOR with the word Nk positions back; all other words
    /// take the previous word directly.
    pub fn key_expansion(&self, key: &[u8]) -> Result<RoundKeySchedule> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;

        let mut words = [0u32; SCHEDULE_WORDS];

        for i in 0..AES128_NK {
            words[i] = bytes_to_u32(&key[i * 4..(i + 1) * 4]);
        }

        for i in AES128_NK..SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % AES128_NK == 0 {
                temp = sub_word(rotate_word(temp)) ^ RCON[i / AES128_NK];
            }
            words[i] = words[i - AES128_NK] ^ temp;
        }

        let mut schedule_bytes = [0u8; SCHEDULE_BYTES];
        for (i, word) in words.iter().enumerate() {
            schedule_bytes[i * 4..(i + 1) * 4].copy_from_slice(&u32_to_bytes(*word));
        }
        words.zeroize();

        Ok(RoundKeySchedule {
            bytes: SecretBuffer::new(schedule_bytes),
        })
    }

    /// SubBytes step
    fn sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = SBOX[*byte as usize];
        }
        // ensure no reordering around the table walk
        compiler_fence(Ordering::SeqCst);
    }

    /// ShiftRows step: row r rotates left by r positions
    fn shift_rows(state: &mut [u8; 16]) {
        let mut temp = [0u8; 16];
        temp.copy_from_slice(state);
        state[0] = temp[0];
        state[4] = temp[4];
        state[8] = temp[8];
        state[12] = temp[12];
        state[1] = temp[5];
        state[5] = temp[9];
        state[9] = temp[13];
        state[13] = temp[1];
        state[2] = temp[10];
        state[6] = temp[14];
        state[10] = temp[2];
        state[14] = temp[6];
        state[3] = temp[15];
        state[7] = temp[3];
        state[11] = temp[7];
        state[15] = temp[11];
    }

    /// MixColumns step: column mixing by {2, 3} over the held field
    fn mix_columns(&self, state: &mut [u8; 16]) {
        let f = self.field;
        for c in 0..4 {
            let i = c * 4;
            let s0 = state[i];
            let s1 = state[i + 1];
            let s2 = state[i + 2];
            let s3 = state[i + 3];
            state[i] = f.mul(s0, 2) ^ f.mul(s1, 3) ^ s2 ^ s3;
            state[i + 1] = s0 ^ f.mul(s1, 2) ^ f.mul(s2, 3) ^ s3;
            state[i + 2] = s0 ^ s1 ^ f.mul(s2, 2) ^ f.mul(s3, 3);
            state[i + 3] = f.mul(s0, 3) ^ s1 ^ s2 ^ f.mul(s3, 2);
        }
    }

    /// AddRoundKey step
    fn add_round_key(state: &mut [u8; 16], round_key_bytes: &[u8]) {
        for i in 0..16 {
            state[i] ^= round_key_bytes[i];
        }
    }

    /// Inverse SubBytes
    fn inv_sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = INV_SBOX[*byte as usize];
        }
        compiler_fence(Ordering::SeqCst);
    }

    /// Inverse ShiftRows: row r rotates right by r positions
    fn inv_shift_rows(state: &mut [u8; 16]) {
        let mut temp = [0u8; 16];
        temp.copy_from_slice(state);
        state[0] = temp[0];
        state[4] = temp[4];
        state[8] = temp[8];
        state[12] = temp[12];
        state[1] = temp[13];
        state[5] = temp[1];
        state[9] = temp[5];
        state[13] = temp[9];
        state[2] = temp[10];
        state[6] = temp[14];
        state[10] = temp[2];
        state[14] = temp[6];
        state[3] = temp[7];
        state[7] = temp[11];
        state[11] = temp[15];
        state[15] = temp[3];
    }

    /// Inverse MixColumns: column mixing by {9, 11, 13, 14} over the field
    fn inv_mix_columns(&self, state: &mut [u8; 16]) {
        let f = self.field;
        for c in 0..4 {
            let i = c * 4;
            let s0 = state[i];
            let s1 = state[i + 1];
            let s2 = state[i + 2];
            let s3 = state[i + 3];
            state[i] = f.mul(s0, 14) ^ f.mul(s1, 11) ^ f.mul(s2, 13) ^ f.mul(s3, 9);
            state[i + 1] = f.mul(s0, 9) ^ f.mul(s1, 14) ^ f.mul(s2, 11) ^ f.mul(s3, 13);
            state[i + 2] = f.mul(s0, 13) ^ f.mul(s1, 9) ^ f.mul(s2, 14) ^ f.mul(s3, 11);
            state[i + 3] = f.mul(s0, 11) ^ f.mul(s1, 13) ^ f.mul(s2, 9) ^ f.mul(s3, 14);
        }
    }

    /// Run the forward round pipeline over one 16-byte state.
    fn encrypt_block(&self, state: &mut [u8; 16], schedule: &RoundKeySchedule) {
        // Initial whitening
        Self::add_round_key(state, schedule.round_key(0));

        for round in 1..AES128_ROUNDS {
            Self::sub_bytes(state);
            Self::shift_rows(state);
            self.mix_columns(state);
            Self::add_round_key(state, schedule.round_key(round));
        }

        // Final round omits MixColumns
        Self::sub_bytes(state);
        Self::shift_rows(state);
        Self::add_round_key(state, schedule.round_key(AES128_ROUNDS));
    }

    /// Run the inverse round pipeline over one 16-byte state.
    fn decrypt_block(&self, state: &mut [u8; 16], schedule: &RoundKeySchedule) {
        Self::add_round_key(state, schedule.round_key(AES128_ROUNDS));

        for round in (1..AES128_ROUNDS).rev() {
            Self::inv_shift_rows(state);
            Self::inv_sub_bytes(state);
            Self::add_round_key(state, schedule.round_key(round));
            self.inv_mix_columns(state);
        }

        // Whitening is reversed last
        Self::inv_shift_rows(state);
        Self::inv_sub_bytes(state);
        Self::add_round_key(state, schedule.round_key(0));
    }

    /// Validate inputs, then run `f` over each block with a fresh schedule.
    fn process(
        &self,
        context: &'static str,
        data: &[u8],
        key: &[u8],
        f: fn(&Self, &mut [u8; 16], &RoundKeySchedule),
    ) -> Result<Vec<u8>> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        validate::block_aligned(context, data.len(), AES_BLOCK_SIZE)?;

        let schedule = self.key_expansion(key)?;

        let mut out = Vec::with_capacity(data.len());
        for chunk in data.chunks_exact(AES_BLOCK_SIZE) {
            let mut state = [0u8; 16];
            state.copy_from_slice(chunk);
            f(self, &mut state, &schedule);
            out.extend_from_slice(&state);
        }
        compiler_fence(Ordering::SeqCst);
        Ok(out)
    }
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;
    type Key = SecretBytes<16>;

    fn encrypt(&self, plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        self.process("AES plaintext", plaintext, key, Self::encrypt_block)
    }

    fn decrypt(&self, ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        self.process("AES ciphertext", ciphertext, key, Self::decrypt_block)
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        let mut key_data = [0u8; AES128_KEY_SIZE];
        rng.fill_bytes(&mut key_data);
        SecretBytes::new(key_data)
    }
}

#[cfg(test)]
mod tests;
