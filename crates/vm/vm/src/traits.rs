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

//! The interpreter facade. `Executive::create` treats the interpreter as an
//! external collaborator it drives but does not implement: hand it a gas
//! budget and an `ExecEnv`, get back the gas left over, the accumulated
//! sub-state, and one of three outcomes.

use ethereum_types::U256;
use state::Backend;

use crate::exec_env::ExecEnv;
use crate::substate::Substate;

/// How a frame's interpretation concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VMOutput {
    /// Ordinary stop/return. For a `CREATE` frame this is the init code's
    /// returned runtime code, prior to the deposit-gas charge and size check.
    Code(Vec<u8>),
    /// `REVERT`: state changes made during this frame are to be discarded,
    /// but the returned bytes are preserved as the call's return data.
    Revert(Vec<u8>),
    /// An exceptional halt (out-of-gas, invalid opcode, stack over/underflow,
    /// bad jump destination, ...). No return data is preserved.
    Failure,
}

/// The boundary between the creation/call orchestrator and the bytecode
/// interpreter, parameterized over the world-state backend so a test double
/// can stand in for the real interpreter.
pub trait Vm<B: Backend> {
    /// Execute `env.machine_code` with `gas` available. Returns remaining
    /// gas, the sub-state accumulated during the run, and the outcome.
    fn execute(&self, gas: U256, env: &mut ExecEnv<B>) -> (U256, Substate, VMOutput);
}
