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

//! The storage backend `State<B>` wraps. `Backend` is the trie/database
//! seam: swap in a Merkle-Patricia-trie-backed implementation without
//! touching `State<B>` or the orchestrator built on top of it.

use std::sync::Arc;

use common_types::Account;
use ethereum_types::Address;

pub trait Backend: Clone {
    fn get_account(&self, address: &Address) -> Option<Account>;
    fn set_account(&mut self, address: Address, account: Account);
    fn get_code(&self, address: &Address) -> Option<Arc<Vec<u8>>>;
    fn set_code(&mut self, address: Address, code: Arc<Vec<u8>>);
}
