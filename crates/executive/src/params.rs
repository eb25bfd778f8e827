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

//! The call frame `Executive::create` is handed, and the shape of what it
//! hands back — both the `ok` and the `error` arm carry the same triple of
//! (state, gas left, sub-state), per the Yellow Paper's treatment of a
//! failed creation as "consume the gas and keep going", not "throw".

use ethereum_types::{Address, U256};
use state::Backend;
use vm::{BlockProvider, EraConfig, Substate};

use crate::error::CreationError;

/// One creation call frame, built by a transaction applier (`stack_depth ==
/// 0`) or by a `CREATE`/`CREATE2` opcode handler (`stack_depth >= 1`).
pub struct CreationParams<'a, B: Backend> {
    pub state: state::State<B>,
    pub sender: Address,
    pub originator: Address,
    pub available_gas: U256,
    pub gas_price: U256,
    pub endowment: U256,
    pub init_code: Vec<u8>,
    pub stack_depth: usize,
    pub block: &'a dyn BlockProvider,
    pub config: &'a EraConfig,
}

/// The (state, gas, sub-state) triple common to both outcomes.
pub struct CreationResult<B: Backend> {
    pub state: state::State<B>,
    pub gas_left: U256,
    pub sub_state: Substate,
}

/// An `error` outcome: a reason plus the same triple an `ok` outcome carries
/// (on every error path here, `state` is the caller's original handle and
/// `sub_state` is empty — see `CreationError`'s doc comment).
pub struct CreationFailure<B: Backend> {
    pub kind: CreationError,
    pub result: CreationResult<B>,
}

pub type CreationOutcome<B> = Result<CreationResult<B>, CreationFailure<B>>;

/// One message-call frame. `Executive::call` is a minimal stand-in kept
/// only so `Executive` composes the way the teacher's does (a `create`/
/// `call` pair sharing one state handle and one VM facade) — it performs
/// the value transfer and, if the destination has code, defers to the VM;
/// it does not implement call-specific gas accounting (out of scope).
pub struct CallParams<'a, B: Backend> {
    pub state: state::State<B>,
    pub sender: Address,
    pub receiver: Address,
    pub originator: Address,
    pub available_gas: U256,
    pub gas_price: U256,
    pub value: U256,
    pub data: Vec<u8>,
    pub stack_depth: usize,
    pub block: &'a dyn BlockProvider,
    pub config: &'a EraConfig,
}
