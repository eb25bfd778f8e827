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

//! The execution environment handed to the interpreter for a single frame:
//! everything `init_code` can observe (`ADDRESS`, `CALLER`, `CALLVALUE`,
//! `BLOCKHASH`, ...) plus the account interface it runs against.

use ethereum_types::{Address, U256};
use state::{Backend, State};

use crate::env_info::BlockProvider;
use crate::schedule::EraConfig;

/// One interpreter frame's view of the world: opcode-visible parameters,
/// the enclosing block, and the account interface the frame reads and
/// writes through.
pub struct ExecEnv<'a, B: Backend> {
    pub address: Address,
    pub originator: Address,
    pub gas_price: U256,
    pub data: Vec<u8>,
    pub sender: Address,
    pub value_in_wei: U256,
    pub machine_code: Vec<u8>,
    pub stack_depth: usize,
    pub block: &'a dyn BlockProvider,
    pub account_interface: State<B>,
    pub config: &'a EraConfig,
}
