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

//! `State<B>`: the world state handle, `σ`, as the orchestrator sees it.
//!
//! Every mutator takes `self` by value and returns the new `State<B>` —
//! the Yellow Paper's `σ → σ'` read literally. Internally this is a
//! `Rc<B>` clone-on-write: as long as the caller still holds the old
//! `State<B>` (keeping its `Rc` alive), a mutator is forced to clone the
//! backend before writing, so the old handle is untouched and a revert is
//! simply "drop the new handle, keep the old one". If the old handle has
//! already been dropped, the same mutator mutates in place.

use std::rc::Rc;

use common_types::{hash::keccak, Account};
use ethereum_types::{Address, U256};

use crate::backend::Backend;

#[derive(Debug, Clone)]
pub struct State<B: Backend> {
    inner: Rc<B>,
}

impl<B: Backend> State<B> {
    pub fn new(backend: B) -> Self {
        State {
            inner: Rc::new(backend),
        }
    }

    /// The account at `address`, or a blank one if it does not yet exist.
    pub fn get(&self, address: &Address) -> Account {
        self.inner.get_account(address).unwrap_or_default()
    }

    pub fn exists(&self, address: &Address) -> bool {
        self.inner.get_account(address).is_some()
    }

    /// EIP-161 "exists and is not an empty account" — used to decide
    /// collision vs. benign-reuse when an address is already present.
    pub fn exists_and_not_null(&self, address: &Address) -> bool {
        self.inner
            .get_account(address)
            .map(|account| !account.is_empty())
            .unwrap_or(false)
    }

    pub fn code(&self, address: &Address) -> Option<std::sync::Arc<Vec<u8>>> {
        self.inner.get_code(address)
    }

    pub fn is_simple_account(account: &Account) -> bool {
        account.is_simple()
    }

    /// Install `account` at `address`, overwriting whatever was there.
    pub fn put(mut self, address: Address, account: Account) -> Self {
        Rc::make_mut(&mut self.inner).set_account(address, account);
        self
    }

    /// Move `value` wei from `from` to `to`. Caller must guarantee
    /// `from`'s balance is at least `value`; violating that is a
    /// programmer error, not a recoverable failure.
    pub fn transfer(mut self, from: &Address, to: &Address, value: U256) -> Self {
        let mut from_account = self.get(from);
        let mut to_account = self.get(to);
        from_account.balance = from_account
            .balance
            .checked_sub(value)
            .expect("caller must guarantee sender balance >= value");
        to_account.balance = to_account
            .balance
            .checked_add(value)
            .expect("balance overflow");

        let backend = Rc::make_mut(&mut self.inner);
        backend.set_account(*from, from_account);
        backend.set_account(*to, to_account);
        self
    }

    pub fn increment_nonce(mut self, address: &Address) -> Self {
        let mut account = self.get(address);
        account.nonce = account.nonce + U256::one();
        Rc::make_mut(&mut self.inner).set_account(*address, account);
        self
    }

    /// Deposit `code` as the runtime code at `address`, updating its `code_hash`.
    pub fn put_code(mut self, address: &Address, code: Vec<u8>) -> Self {
        let code_hash = keccak(&code);
        let mut account = self.get(address);
        account.code_hash = code_hash;

        let backend = Rc::make_mut(&mut self.inner);
        backend.set_account(*address, account);
        backend.set_code(*address, std::sync::Arc::new(code));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    fn addr(n: u64) -> Address {
        Address::from_low_u64_be(n)
    }

    #[test]
    fn put_then_get_round_trips() {
        let state = State::new(MemoryBackend::new());
        let account = Account {
            nonce: U256::from(1),
            balance: U256::from(100),
            ..Account::new_blank()
        };
        let state = state.put(addr(1), account.clone());
        assert_eq!(state.get(&addr(1)), account);
    }

    #[test]
    fn transfer_moves_balance_both_ways() {
        let state = State::new(MemoryBackend::new());
        let state = state.put(
            addr(1),
            Account {
                balance: U256::from(100),
                ..Account::new_blank()
            },
        );
        let state = state.transfer(&addr(1), &addr(2), U256::from(40));
        assert_eq!(state.get(&addr(1)).balance, U256::from(60));
        assert_eq!(state.get(&addr(2)).balance, U256::from(40));
    }

    #[test]
    fn mutating_the_new_handle_leaves_the_old_handle_untouched() {
        let original = State::new(MemoryBackend::new()).put(
            addr(1),
            Account {
                balance: U256::from(100),
                ..Account::new_blank()
            },
        );
        let mutated = original.clone().transfer(&addr(1), &addr(2), U256::from(40));

        assert_eq!(original.get(&addr(1)).balance, U256::from(100));
        assert_eq!(mutated.get(&addr(1)).balance, U256::from(60));
    }

    #[test]
    fn increment_nonce_bumps_by_one() {
        let state = State::new(MemoryBackend::new());
        let state = state.increment_nonce(&addr(1));
        assert_eq!(state.get(&addr(1)).nonce, U256::one());
    }

    #[test]
    fn put_code_sets_hash_and_stores_bytes() {
        let state = State::new(MemoryBackend::new());
        let state = state.put_code(&addr(1), vec![0x60, 0x00]);
        let account = state.get(&addr(1));
        assert_ne!(account.code_hash, common_types::hash::KECCAK_EMPTY);
    }

    #[test]
    fn nonexistent_account_is_blank_and_absent() {
        let state = State::new(MemoryBackend::new());
        assert!(!state.exists(&addr(1)));
        assert_eq!(state.get(&addr(1)), Account::new_blank());
    }
}
