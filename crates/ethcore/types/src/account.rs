// Copyright 2015-2020 Parity Technologies (UK) Ltd.
// This file is part of OpenEthereum.

// OpenEthereum is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// OpenEthereum is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with OpenEthereum.  If not, see <http://www.gnu.org/licenses/>.

//! A single, flat account record as held by the world state.

use ethereum_types::{H256, U256};

use crate::hash::{KECCAK_EMPTY, KECCAK_NULL_RLP};

/// An account as seen by the creation orchestrator: a nonce, a wei balance,
/// and the two content hashes (code, storage) that pin it to the trie.
///
/// `Account` carries no history and no trie proof; it is the logical value
/// a `state::Backend` returns for an address, not its on-disk encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Number of transactions sent (EOA) or contracts created (contract account).
    pub nonce: U256,
    /// Balance in wei.
    pub balance: U256,
    /// Hash of the account's code. `KECCAK_EMPTY` for an account with no code.
    pub code_hash: H256,
    /// Root of the account's storage trie. `KECCAK_NULL_RLP` for empty storage.
    pub storage_root: H256,
}

impl Account {
    /// A brand-new account with zero nonce and balance and no code or storage,
    /// as created by `Executive::create` Step 3.1 before any value is transferred.
    pub fn new_blank() -> Self {
        Account {
            nonce: U256::zero(),
            balance: U256::zero(),
            code_hash: KECCAK_EMPTY,
            storage_root: KECCAK_NULL_RLP,
        }
    }

    /// True iff this account has no deployed code.
    pub fn is_simple(&self) -> bool {
        self.code_hash == KECCAK_EMPTY
    }

    /// True iff this is a simple account with zero nonce and zero balance.
    pub fn is_empty(&self) -> bool {
        self.is_simple() && self.nonce.is_zero() && self.balance.is_zero()
    }
}

impl Default for Account {
    fn default() -> Self {
        Account::new_blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_account_is_simple_and_empty() {
        let account = Account::new_blank();
        assert!(account.is_simple());
        assert!(account.is_empty());
    }

    #[test]
    fn account_with_code_is_not_simple() {
        let mut account = Account::new_blank();
        account.code_hash = H256::from_low_u64_be(0xbeef);
        assert!(!account.is_simple());
        assert!(!account.is_empty());
    }

    #[test]
    fn account_with_nonzero_nonce_is_not_empty() {
        let mut account = Account::new_blank();
        account.nonce = U256::from(1);
        assert!(account.is_simple());
        assert!(!account.is_empty());
    }
}
