//! Password-Based Key Derivation Function 2 (PBKDF2)
//!
//! This module implements PBKDF2 as specified in RFC 8018 / PKCS #5.
//! PBKDF2 applies a pseudorandom function (HMAC over a configurable hash)
//! to the input password along with a salt value and repeats the process
//! many times to produce a derived key.
//!
//! The output is a pure function of (password, salt, iterations, length,
//! hash); there is no hidden state and the iteration loop never exits
//! early based on derived values.

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use crate::kdf::{KdfAlgorithm, KdfOperation, KeyDerivationFunction};
use crate::mac::hmac::Hmac;
use crate::types::salt::Pbkdf2Compatible;
use crate::types::Salt;
use common::security::SecretVec;
use params::utils::kdf::{DEFAULT_SALT_SIZE, PBKDF2_DEFAULT_ITERATIONS, PBKDF2_DEFAULT_KEY_LENGTH};
use rand::{CryptoRng, RngCore};
use std::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Largest block count RFC 8018 permits: the block index is a 32-bit word.
const MAX_BLOCKS: usize = 0xFFFF_FFFF;

/// Type-level constants for the PBKDF2 algorithm
pub enum Pbkdf2Algorithm<H: HashFunction> {
    /// Phantom field for the hash function
    _Hash(PhantomData<H>),
}

impl<H: HashFunction> KdfAlgorithm for Pbkdf2Algorithm<H> {
    const MIN_SALT_SIZE: usize = DEFAULT_SALT_SIZE;
    const DEFAULT_OUTPUT_SIZE: usize = PBKDF2_DEFAULT_KEY_LENGTH;
    const ALGORITHM_ID: &'static str = "PBKDF2";

    fn name() -> String {
        format!("{}-{}", Self::ALGORITHM_ID, H::name())
    }
}

/// Parameters for PBKDF2
#[derive(Clone, Zeroize)]
pub struct Pbkdf2Params<const S: usize = 16> {
    /// Salt value
    pub salt: Salt<S>,

    /// Number of iterations
    pub iterations: u32,

    /// Length of derived key in bytes
    pub key_length: usize,
}

impl<const S: usize> Default for Pbkdf2Params<S>
where
    Salt<S>: Pbkdf2Compatible,
{
    fn default() -> Self {
        Self {
            salt: Salt::<S>::zeroed(), // filled with random data by callers
            iterations: PBKDF2_DEFAULT_ITERATIONS,
            key_length: PBKDF2_DEFAULT_KEY_LENGTH,
        }
    }
}

/// PBKDF2 implementation over an HMAC-based PRF
///
/// PBKDF2 can be used with any pseudorandom function; this implementation
/// uses HMAC with a configurable hash function.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pbkdf2<H: HashFunction + Clone, const S: usize = 16> {
    /// The hash function type
    _hash_type: PhantomData<H>,

    /// PBKDF2 parameters
    params: Pbkdf2Params<S>,
}

impl<H: HashFunction + Clone, const S: usize> Pbkdf2<H, S> {
    /// Core PBKDF2 as defined in RFC 8018 Section 5.2, with secure handling
    /// of the key material in flight.
    ///
    /// # Arguments
    /// * `password` - The password to derive the key from
    /// * `salt` - The salt value
    /// * `iterations` - The number of iterations
    /// * `key_length` - The length of the derived key in bytes
    pub fn pbkdf2(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let secure_password = SecretVec::from_slice(password);
        Self::pbkdf2_internal(&secure_password, salt, iterations, key_length)
    }

    /// PBKDF2 returning a plain `Vec<u8>` for callers that manage their own
    /// buffer hygiene.
    pub fn pbkdf2_secure(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Vec<u8>> {
        let result = Self::pbkdf2(password, salt, iterations, key_length)?;
        Ok(result.to_vec())
    }

    fn pbkdf2_internal(
        password: &SecretVec,
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        // Strict parameter validation before any work
        validate::parameter(
            iterations > 0,
            "iterations",
            "PBKDF2 iteration count must be > 0",
        )?;

        validate::parameter(
            key_length > 0,
            "key_length",
            "PBKDF2 output length must be > 0",
        )?;

        let hash_len = H::output_size();

        // RFC 8018 section 5.2: at most (2^32 - 1) blocks of PRF output
        let block_count = key_length.div_ceil(hash_len);
        if block_count > MAX_BLOCKS {
            return Err(Error::DerivedKeyTooLong {
                context: "PBKDF2",
                requested: key_length,
                max: MAX_BLOCKS * hash_len,
            });
        }

        let mut result = Zeroizing::new(Vec::with_capacity(key_length));

        // Each block is calculated independently using the F function
        for block_index in 1..=block_count {
            let block =
                Self::pbkdf2_f(password.as_ref(), salt, iterations, block_index as u32)?;

            // The last block may be partial
            let to_copy = if block_index == block_count {
                let remainder = key_length % hash_len;
                if remainder == 0 {
                    hash_len
                } else {
                    remainder
                }
            } else {
                hash_len
            };

            result.extend_from_slice(&block[..to_copy]);
        }

        Ok(result)
    }

    /// F function for PBKDF2 as defined in RFC 8018.
    ///
    /// Computes F(P, S, c, i) = U_1 XOR U_2 XOR ... XOR U_c
    /// where U_1 = PRF(P, S || INT_32_BE(i))
    ///       U_j = PRF(P, U_{j-1})
    fn pbkdf2_f(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        block_index: u32,
    ) -> Result<Zeroizing<Vec<u8>>> {
        // U_1 = PRF(P, S || INT_32_BE(i))
        let mut hmac = Hmac::<H>::new(password)?;
        hmac.update(salt)?;
        hmac.update(&block_index.to_be_bytes())?;
        let mut prev = Zeroizing::new(hmac.finalize()?);

        // XOR-accumulate every iteration's output into the block result
        let mut output = Zeroizing::new(prev.to_vec());

        for _ in 1..iterations {
            let mut hmac = Hmac::<H>::new(password)?;
            hmac.update(&prev)?;
            prev = Zeroizing::new(hmac.finalize()?);

            for i in 0..output.len() {
                output[i] ^= prev[i];
            }
        }

        Ok(output)
    }

    /// Build an instance around explicit parameters
    pub fn with_params(params: Pbkdf2Params<S>) -> Self {
        Self {
            _hash_type: PhantomData,
            params,
        }
    }

    /// The configured parameters
    pub fn params(&self) -> &Pbkdf2Params<S> {
        &self.params
    }
}

impl<H: HashFunction + Clone, const S: usize> KeyDerivationFunction for Pbkdf2<H, S>
where
    Salt<S>: Pbkdf2Compatible,
{
    type Algorithm = Pbkdf2Algorithm<H>;
    type Salt = Salt<S>;

    fn new() -> Self {
        Self {
            _hash_type: PhantomData,
            params: Pbkdf2Params::default(),
        }
    }

    fn derive_key(&self, input: &[u8], salt: Option<&[u8]>, length: usize) -> Result<Vec<u8>> {
        let effective_salt = match salt {
            Some(s) => s,
            None => self.params.salt.as_ref(),
        };

        let effective_length = if length > 0 {
            length
        } else {
            self.params.key_length
        };

        Self::pbkdf2_secure(
            input,
            effective_salt,
            self.params.iterations,
            effective_length,
        )
    }

    fn builder(&self) -> impl KdfOperation<'_, Self::Algorithm> {
        Pbkdf2Builder {
            kdf: self,
            ikm: None,
            salt: None,
            iterations: self.params.iterations,
            length: self.params.key_length,
        }
    }

    fn generate_salt<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Salt {
        Salt::random(rng)
    }
}

/// PBKDF2 builder implementation
pub struct Pbkdf2Builder<'a, H: HashFunction + Clone, const S: usize = 16> {
    kdf: &'a Pbkdf2<H, S>,
    ikm: Option<&'a [u8]>,
    salt: Option<&'a [u8]>,
    iterations: u32,
    length: usize,
}

impl<H: HashFunction + Clone, const S: usize> Pbkdf2Builder<'_, H, S> {
    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

impl<'a, H: HashFunction + Clone, const S: usize> KdfOperation<'a, Pbkdf2Algorithm<H>>
    for Pbkdf2Builder<'a, H, S>
where
    Salt<S>: Pbkdf2Compatible,
{
    fn with_ikm(mut self, ikm: &'a [u8]) -> Self {
        self.ikm = Some(ikm);
        self
    }

    fn with_salt(mut self, salt: &'a [u8]) -> Self {
        self.salt = Some(salt);
        self
    }

    fn with_output_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    fn derive(self) -> Result<Vec<u8>> {
        let ikm = self.ikm.ok_or_else(|| {
            Error::param("input_keying_material", "Input keying material is required")
        })?;

        let salt = match self.salt {
            Some(s) => s,
            None => self.kdf.params.salt.as_ref(),
        };

        Pbkdf2::<H, S>::pbkdf2_secure(ikm, salt, self.iterations, self.length)
    }

    fn derive_array<const N: usize>(self) -> Result<[u8; N]> {
        validate::length("PBKDF2 output", self.length, N)?;

        let vec = self.derive()?;

        let mut array = [0u8; N];
        array.copy_from_slice(&vec);
        Ok(array)
    }
}

#[cfg(test)]
mod tests;
