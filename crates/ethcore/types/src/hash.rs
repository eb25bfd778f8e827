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

//! Keccak-256 helpers shared by the rest of this crate.

pub use keccak_hash::keccak;

/// `keccak256([])`, the `code_hash` sentinel for an account with no code.
pub use keccak_hash::KECCAK_EMPTY;

/// `keccak256(rlp(""))`, the `storage_root` sentinel for an account with empty storage.
pub use keccak_hash::KECCAK_NULL_RLP;
