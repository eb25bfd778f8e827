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

//! Why a creation failed. Every variant here still carries a full
//! `CreationResult` (see `params.rs`) — "failed" is a tag on the outcome,
//! not a reason to throw the state and gas accounting away.

use std::error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationError {
    /// The derived address is already occupied by a non-simple account, or
    /// one with a nonzero nonce.
    Collision,
    /// The derived address is occupied by a simple, nonce-0 account and
    /// this is a top-level creation transaction.
    BenignExistingCollisionAtTopLevel,
    /// The interpreter halted exceptionally (out of gas, bad jump, stack
    /// over/underflow, invalid opcode, depth overflow).
    VmExceptionalHalt,
    /// The interpreter executed `REVERT`.
    Revert,
    /// Init code returned successfully but left too little gas to pay the
    /// code-deposit cost, under an era that treats this as fatal.
    InsufficientDeployGas,
    /// Deployed code size met or exceeded the era's code-size limit.
    CodeSizeExceeded,
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CreationError::Collision => write!(f, "contract address collision"),
            CreationError::BenignExistingCollisionAtTopLevel => {
                write!(f, "address already holds an empty account at top level")
            }
            CreationError::VmExceptionalHalt => write!(f, "vm exceptional halt during init code"),
            CreationError::Revert => write!(f, "init code reverted"),
            CreationError::InsufficientDeployGas => {
                write!(f, "insufficient gas to pay the code-deposit cost")
            }
            CreationError::CodeSizeExceeded => write!(f, "deployed code exceeds the size limit"),
        }
    }
}

impl error::Error for CreationError {}
