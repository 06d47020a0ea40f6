use crate::error::{Result, WalletError};
use ring::rand::{SecureRandom, SystemRandom};

/// Supplier of cryptographically secure random bytes for key generation
pub trait EntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;
}

/// Operating-system randomness via `ring`
pub struct SystemEntropy {
    rng: SystemRandom,
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEntropy {
    pub fn new() -> SystemEntropy {
        SystemEntropy {
            rng: SystemRandom::new(),
        }
    }
}

impl EntropySource for SystemEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        self.rng.fill(dest).map_err(|e| {
            WalletError::EntropySourceFailure(format!("system random source unavailable: {e}"))
        })
    }
}
