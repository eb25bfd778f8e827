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

//! Parameters a `CALL` or `CREATE` passes down to the interpreter.

use std::sync::Arc;

use ethereum_types::{Address, U256};

/// How a call carries value: a real balance transfer (`CALL`) or an
/// apparent value that is never actually moved (`DELEGATECALL`/`CALLCODE`,
/// where the callee observes `msg.value` but no balance changes hands).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionValue {
    Transfer(U256),
    Apparent(U256),
}

impl ActionValue {
    pub fn value(&self) -> U256 {
        match *self {
            ActionValue::Transfer(v) | ActionValue::Apparent(v) => v,
        }
    }

    pub fn transfer(value: U256) -> Self {
        ActionValue::Transfer(value)
    }
}

/// The opcode (if any) that gave rise to this action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallType {
    /// Not a call — this `ActionParams` describes a `CREATE`/`CREATE2`.
    None,
    Call,
    CallCode,
    DelegateCall,
    StaticCall,
}

/// Whether `code` was supplied separately from `data`, or the two are the
/// same buffer (init code for a `CREATE`, where code and input are one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsType {
    Separate,
    Embedded,
}

/// Everything the interpreter needs to run one call or creation frame.
#[derive(Debug, Clone)]
pub struct ActionParams {
    /// Address whose code is executed.
    pub code_address: Address,
    /// Address whose storage is read and written (`address == code_address`
    /// except under `DELEGATECALL`/`CALLCODE`).
    pub address: Address,
    /// Immediate caller.
    pub sender: Address,
    /// Transaction originator (`ORIGIN`).
    pub origin: Address,
    /// Gas made available to this frame.
    pub gas: U256,
    pub gas_price: U256,
    pub value: ActionValue,
    /// Init code (`CREATE`) or runtime code (`CALL`), if known ahead of execution.
    pub code: Option<Arc<Vec<u8>>>,
    pub code_hash: Option<ethereum_types::H256>,
    /// Call input / constructor arguments.
    pub data: Option<Vec<u8>>,
    pub call_type: CallType,
    pub params_type: ParamsType,
}

impl ActionParams {
    /// Parameters for executing `init_code` against a freshly derived
    /// contract address, as assembled by `Executive::create` Step 3.3.
    pub fn for_create(
        sender: Address,
        new_address: Address,
        origin: Address,
        gas: U256,
        gas_price: U256,
        value: U256,
        init_code: Vec<u8>,
    ) -> Self {
        let code = Arc::new(init_code);
        ActionParams {
            code_address: new_address,
            address: new_address,
            sender,
            origin,
            gas,
            gas_price,
            value: ActionValue::Transfer(value),
            code: Some(code.clone()),
            code_hash: None,
            data: None,
            call_type: CallType::None,
            params_type: ParamsType::Embedded,
        }
    }
}
