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

//! Errors raised at the VM boundary, as distinct from the interpreter's own
//! exceptional halts (which surface as `VMOutput::Failure`, not `Error`).

use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A state-mutating opcode was attempted inside a `STATICCALL`.
    MutableCallInStaticContext,
    /// Call or creation depth exceeded the configured maximum.
    OutOfDepth,
    /// Any other internal invariant violation, carrying a description.
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::MutableCallInStaticContext => {
                write!(f, "mutable call in static context")
            }
            Error::OutOfDepth => write!(f, "call/create depth exceeded"),
            Error::Internal(ref s) => write!(f, "internal error: {}", s),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
