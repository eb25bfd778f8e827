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

//! Accumulator for facts gathered during one execution that outlive it:
//! addresses touched, addresses scheduled for deletion, and gas refunds.
//! Merging two sub-states is a union; it is always safe to merge a child's
//! sub-state into its parent's, whether or not the child's call succeeded.

use std::collections::HashSet;

use ethereum_types::{Address, U256};

/// Facts accumulated alongside the world state during execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substate {
    /// Addresses read or written, tracked for EIP-161 "touched but empty" deletion.
    pub touched: HashSet<Address>,
    /// Addresses that executed `SELFDESTRUCT` and are to be deleted at the
    /// end of the enclosing transaction.
    pub suicides: HashSet<Address>,
    /// Gas refunded to the sender at the end of the enclosing transaction
    /// (e.g. for `SSTORE` clearing a slot).
    pub refunds: U256,
}

impl Substate {
    pub fn new() -> Self {
        Substate::default()
    }

    pub fn touch(&mut self, address: Address) {
        self.touched.insert(address);
    }

    pub fn is_empty(&self) -> bool {
        self.touched.is_empty() && self.suicides.is_empty() && self.refunds.is_zero()
    }

    /// Union `other` into `self`. Always correct to call regardless of
    /// whether the execution that produced `other` succeeded, reverted, or
    /// failed: touched-address and suicide bookkeeping survives a revert.
    pub fn accrue(&mut self, other: Substate) {
        self.touched.extend(other.touched);
        self.suicides.extend(other.suicides);
        self.refunds = self.refunds + other.refunds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accrue_unions_all_three_fields() {
        let mut a = Substate::new();
        a.touch(Address::from_low_u64_be(1));
        a.refunds = U256::from(10);

        let mut b = Substate::new();
        b.touch(Address::from_low_u64_be(2));
        b.suicides.insert(Address::from_low_u64_be(2));
        b.refunds = U256::from(5);

        a.accrue(b);

        assert_eq!(a.touched.len(), 2);
        assert_eq!(a.suicides.len(), 1);
        assert_eq!(a.refunds, U256::from(15));
    }

    #[test]
    fn fresh_substate_is_empty() {
        assert!(Substate::new().is_empty());
    }
}
