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

//! The enclosing block's header fields, as seen by `BLOCKHASH`, `COINBASE`,
//! `TIMESTAMP` and friends. Supplied by the caller, not derived by this crate.

use std::sync::Arc;

use ethereum_types::{Address, H256, U256};

/// Read-only view of the enclosing block, independent of any particular
/// chain client so the orchestrator can be driven by a fixture in tests.
pub trait BlockProvider {
    fn number(&self) -> u64;
    fn author(&self) -> Address;
    fn timestamp(&self) -> u64;
    fn difficulty(&self) -> U256;
    fn gas_limit(&self) -> U256;
    /// The hash of the block `distance` below the current one, or `None`
    /// once `distance` exceeds the 256-block `BLOCKHASH` window.
    fn block_hash(&self, distance: u64) -> Option<H256>;
}

/// A concrete, fixture-friendly `BlockProvider`: the header fields plus the
/// last 256 ancestor hashes, most recent first.
#[derive(Debug, Clone, Default)]
pub struct EnvInfo {
    pub number: u64,
    pub author: Address,
    pub timestamp: u64,
    pub difficulty: U256,
    pub gas_limit: U256,
    pub last_hashes: Arc<Vec<H256>>,
}

impl BlockProvider for EnvInfo {
    fn number(&self) -> u64 {
        self.number
    }

    fn author(&self) -> Address {
        self.author
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn difficulty(&self) -> U256 {
        self.difficulty
    }

    fn gas_limit(&self) -> U256 {
        self.gas_limit
    }

    fn block_hash(&self, distance: u64) -> Option<H256> {
        if distance == 0 || distance > 256 {
            return None;
        }
        self.last_hashes.get((distance - 1) as usize).copied()
    }
}
