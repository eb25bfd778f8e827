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

//! A plain in-memory `Backend`, good enough for tests and for tooling that
//! does not need a persistent trie (cf. `ethrun`'s `WorldState`).

use std::collections::HashMap;
use std::sync::Arc;

use common_types::Account;
use ethereum_types::Address;

use crate::backend::Backend;

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    accounts: HashMap<Address, Account>,
    code: HashMap<Address, Arc<Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }
}

impl Backend for MemoryBackend {
    fn get_account(&self, address: &Address) -> Option<Account> {
        self.accounts.get(address).cloned()
    }

    fn set_account(&mut self, address: Address, account: Account) {
        self.accounts.insert(address, account);
    }

    fn get_code(&self, address: &Address) -> Option<Arc<Vec<u8>>> {
        self.code.get(address).cloned()
    }

    fn set_code(&mut self, address: Address, code: Arc<Vec<u8>>) {
        self.code.insert(address, code);
    }
}
