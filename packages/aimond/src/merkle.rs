//! Cumulative allocation merkle trees.
//!
//! Leaf: `sha256(canonical_address ‖ amount as 32-byte big-endian)`.
//! Node: `sha256(min(a, b) ‖ max(a, b))`, so proofs carry no left/right flags.
//! An odd node at the end of a level is promoted to the next level unchanged.
//! Roots & proof elements travel as 64 character hex strings.

use std::convert::TryInto;

use cosmwasm_std::{CanonicalAddr, StdError, StdResult, Uint128};
use sha2::{Digest, Sha256};

pub type Hash = [u8; 32];

/// Hashes an (address, cumulative amount) allocation into a leaf
pub fn leaf_hash(account: &CanonicalAddr, amount: Uint128) -> Hash {
    let mut amount_be = [0u8; 32];
    amount_be[16..].copy_from_slice(&amount.u128().to_be_bytes());

    let mut hasher = Sha256::new();
    hasher.update(account.as_slice());
    hasher.update(amount_be);
    hasher.finalize().into()
}

/// Hashes a pair of nodes, position independent
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    let mut hasher = Sha256::new();
    hasher.update(first);
    hasher.update(second);
    hasher.finalize().into()
}

/// Folds `proof` into `leaf` and compares against `root`
pub fn verify_proof(proof: &[Hash], root: &Hash, leaf: Hash) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));

    &computed == root
}

/// Decodes a 32 byte hex string
pub fn decode_hash(hex_str: &str) -> StdResult<Hash> {
    let bytes = hex::decode(hex_str.trim_start_matches("0x"))
        .map_err(|err| StdError::generic_err(format!("Invalid hex: {}", err)))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        StdError::generic_err(format!("Expected 32 bytes, got {}", bytes.len()))
    })
}

pub fn encode_hash(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Tree builder for off-chain tooling & tests. Leaves keep their input order.
pub struct MerkleTree {
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<Hash>) -> Self {
        let mut levels = vec![leaves];

        while levels[levels.len() - 1].len() > 1 {
            let next = levels[levels.len() - 1]
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => hash_pair(a, b),
                    //Odd node out
                    _ => pair[0],
                })
                .collect::<Vec<Hash>>();
            levels.push(next);
        }

        MerkleTree { levels }
    }

    /// Root of the tree, all zeros when empty
    pub fn root(&self) -> Hash {
        self.levels[self.levels.len() - 1]
            .first()
            .copied()
            .unwrap_or([0u8; 32])
    }

    /// Sibling path for the leaf at `index`, None when out of range
    pub fn proof(&self, mut index: usize) -> Option<Vec<Hash>> {
        if index >= self.levels[0].len() {
            return None;
        }

        let mut proof = vec![];
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            index /= 2;
        }

        Some(proof)
    }
}
