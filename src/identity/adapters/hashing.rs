//! Argon2id credential hasher.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash as PhcString, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use crate::config::CredentialConfig;
use crate::identity::{
    domain::PasswordHash,
    ports::{CredentialHasher, HashingError},
};

/// Hashes passwords with Argon2id and a random 16-byte salt.
#[derive(Debug, Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
}

impl Argon2CredentialHasher {
    /// Creates a hasher using the given cost parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HashingError::InvalidParameters`] when Argon2 rejects the
    /// parameters.
    pub fn from_config(config: &CredentialConfig) -> Result<Self, HashingError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|err| HashingError::InvalidParameters(err.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, HashingError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| HashingError::Hash(err.to_string()))?;
        Ok(PasswordHash::new(encoded.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, HashingError> {
        let parsed = PhcString::new(hash.as_str())
            .map_err(|err| HashingError::MalformedHash(err.to_string()))?;
        // Cost parameters are read back from the PHC string, so hashes made
        // with other settings still verify.
        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(HashingError::MalformedHash(err.to_string())),
        }
    }
}
