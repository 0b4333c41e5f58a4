//! Factory that creates and indexes distributor instances.

use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::error::DistributorError;
use crate::state::Distributor;

/// Owns every distributor it creates, in creation order (zero-indexed).
#[derive(Clone, Debug)]
pub struct DistributorFactory {
    /// Namespaces instance addresses so separate factories never collide.
    key: Pubkey,
    distributors: Vec<Distributor>,
}

impl DistributorFactory {
    pub fn new(key: Pubkey) -> Self {
        Self {
            key,
            distributors: Vec::new(),
        }
    }

    pub fn key(&self) -> Pubkey {
        self.key
    }

    /// Create a distributor administered by `signer`. Open to any caller.
    pub fn create(&mut self, signer: &Pubkey) -> Result<u64> {
        let index = u64::try_from(self.distributors.len())
            .map_err(|_| DistributorError::MathOverflow)?;
        let (address, bump) = Pubkey::find_program_address(
            &[DISTRIBUTOR_SEED, self.key.as_ref(), &index.to_le_bytes()],
            &crate::ID,
        );

        self.distributors
            .push(Distributor::new(address, bump, index, *signer));

        msg!("distributor #{} created at {}", index, address);
        emit!(DistributorCreated {
            factory: self.key,
            distributor: address,
            index,
            admin: *signer,
        });

        Ok(index)
    }

    pub fn lookup(&self, index: u64) -> Result<&Distributor> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.distributors.get(i))
            .ok_or_else(|| error!(DistributorError::InstanceNotFound))
    }

    pub fn lookup_mut(&mut self, index: u64) -> Result<&mut Distributor> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.distributors.get_mut(i))
            .ok_or_else(|| error!(DistributorError::InstanceNotFound))
    }

    /// Address of the instance at `index`.
    pub fn index_for_instance(&self, index: u64) -> Result<Pubkey> {
        self.lookup(index).map(Distributor::address)
    }

    pub fn find_by_address(&self, address: &Pubkey) -> Option<&Distributor> {
        self.distributors.iter().find(|d| d.address == *address)
    }

    pub fn find_by_address_mut(&mut self, address: &Pubkey) -> Option<&mut Distributor> {
        self.distributors.iter_mut().find(|d| d.address == *address)
    }

    pub fn len(&self) -> usize {
        self.distributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distributors.is_empty()
    }
}

#[event]
pub struct DistributorCreated {
    pub factory: Pubkey,
    pub distributor: Pubkey,
    pub index: u64,
    pub admin: Pubkey,
}
