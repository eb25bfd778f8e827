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

//! Era configuration for contract creation.
//!
//! Unlike the interpreter's flat `Schedule` (one struct, every knob always
//! present), `EraConfig` is a tagged variant: each hard fork wraps its
//! immediate predecessor as a `fallback` and only the forks that actually
//! change a given knob implement it directly. Every accessor short-circuits
//! on the variant that owns the knob and recurses into `fallback` otherwise.
//! `Frontier` carries no fallback — it is the recursion's base case.

/// Gas charged per byte of deployed runtime code (Yellow Paper `G_codedeposit`).
pub const G_CODEDEPOSIT: usize = 200;

/// EIP-170: contracts of this size or larger are rejected at deployment.
pub const CODE_SIZE_LIMIT: usize = 24576;

/// Era-specific predicates and costs consumed by the creation orchestrator.
///
/// Each variant other than `Frontier` boxes the `EraConfig` it was forked
/// from; a later era is free to change one knob and inherit the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EraConfig {
    /// The original Ethereum mainnet rules.
    Frontier,
    /// Homestead: exhausting the code-deposit gas now fails creation outright
    /// instead of silently depositing empty code.
    Homestead { fallback: Box<EraConfig> },
    /// EIP-150: raises the intrinsic gas cost of `CREATE` and a handful of
    /// other opcodes; no change to the three predicates the orchestrator reads.
    Eip150 { fallback: Box<EraConfig> },
    /// EIP-158/161: new contracts start with nonce 1, and deployed code at or
    /// above `CODE_SIZE_LIMIT` is rejected.
    Eip158 { fallback: Box<EraConfig> },
    /// Byzantium and later: carried here only for `Schedule` snapshotting
    /// (`REVERT`, static calls); no change to the creation predicates.
    Byzantium { fallback: Box<EraConfig> },
}

impl EraConfig {
    pub fn homestead() -> Self {
        EraConfig::Homestead {
            fallback: Box::new(EraConfig::Frontier),
        }
    }

    pub fn eip150() -> Self {
        EraConfig::Eip150 {
            fallback: Box::new(EraConfig::homestead()),
        }
    }

    pub fn eip158() -> Self {
        EraConfig::Eip158 {
            fallback: Box::new(EraConfig::eip150()),
        }
    }

    pub fn byzantium() -> Self {
        EraConfig::Byzantium {
            fallback: Box::new(EraConfig::eip158()),
        }
    }

    /// Whether the newly created contract's nonce is bumped from 0 to 1
    /// before its init code runs. EIP-161, active from EIP-158 onward.
    pub fn increment_nonce_on_create(&self) -> bool {
        match self {
            EraConfig::Frontier => false,
            EraConfig::Eip158 { .. } => true,
            EraConfig::Homestead { fallback }
            | EraConfig::Eip150 { fallback }
            | EraConfig::Byzantium { fallback } => fallback.increment_nonce_on_create(),
        }
    }

    /// Whether exhausting the code-deposit gas fails creation outright
    /// (Homestead onward) rather than depositing empty code (Frontier).
    pub fn fail_contract_creation_lack_of_gas(&self) -> bool {
        match self {
            EraConfig::Frontier => false,
            EraConfig::Homestead { .. } => true,
            EraConfig::Eip150 { fallback }
            | EraConfig::Eip158 { fallback }
            | EraConfig::Byzantium { fallback } => fallback.fail_contract_creation_lack_of_gas(),
        }
    }

    /// Whether deployed code of the given size is rejected. EIP-170,
    /// active from EIP-158 onward at `CODE_SIZE_LIMIT + 1` bytes.
    pub fn limit_contract_code_size(&self, size: usize) -> bool {
        match self {
            EraConfig::Frontier => false,
            EraConfig::Eip158 { .. } => size >= CODE_SIZE_LIMIT + 1,
            EraConfig::Homestead { fallback }
            | EraConfig::Eip150 { fallback }
            | EraConfig::Byzantium { fallback } => fallback.limit_contract_code_size(size),
        }
    }

    /// Whether the `REVERT` opcode is available. Byzantium onward.
    pub fn have_revert(&self) -> bool {
        match self {
            EraConfig::Byzantium { .. } => true,
            EraConfig::Frontier => false,
            EraConfig::Homestead { fallback }
            | EraConfig::Eip150 { fallback }
            | EraConfig::Eip158 { fallback } => fallback.have_revert(),
        }
    }

    /// Whether `STATICCALL` and its read-only-context enforcement are
    /// available. Byzantium onward, forked independently of `have_revert`.
    pub fn have_static_call(&self) -> bool {
        match self {
            EraConfig::Byzantium { .. } => true,
            EraConfig::Frontier => false,
            EraConfig::Homestead { fallback }
            | EraConfig::Eip150 { fallback }
            | EraConfig::Eip158 { fallback } => fallback.have_static_call(),
        }
    }

    /// A human-readable era name, used in logging.
    pub fn name(&self) -> &'static str {
        match self {
            EraConfig::Frontier => "Frontier",
            EraConfig::Homestead { .. } => "Homestead",
            EraConfig::Eip150 { .. } => "EIP150",
            EraConfig::Eip158 { .. } => "EIP158",
            EraConfig::Byzantium { .. } => "Byzantium",
        }
    }
}

/// A flat snapshot of era knobs an interpreter would actually meter against,
/// bridging `EraConfig`'s tagged-variant delegation to the single-struct
/// shape an opcode dispatch loop wants. The creation orchestrator itself
/// never reads this; it is scaffolding for an embedding VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub have_revert: bool,
    pub have_static_call: bool,
    pub max_depth: usize,
    /// EIP-150's 63/64 rule: gas forwarded to a sub-call is capped at
    /// `available - available / sub_gas_cap_divisor`.
    pub sub_gas_cap_divisor: u64,
}

impl EraConfig {
    pub fn to_schedule(&self) -> Schedule {
        Schedule {
            have_revert: self.have_revert(),
            have_static_call: self.have_static_call(),
            max_depth: 1024,
            sub_gas_cap_divisor: if matches!(self, EraConfig::Frontier) { 1 } else { 64 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_defaults() {
        let cfg = EraConfig::Frontier;
        assert!(!cfg.fail_contract_creation_lack_of_gas());
        assert!(!cfg.increment_nonce_on_create());
        assert!(!cfg.limit_contract_code_size(1_000_000));
    }

    #[test]
    fn homestead_fails_on_insufficient_deploy_gas() {
        let cfg = EraConfig::homestead();
        assert!(cfg.fail_contract_creation_lack_of_gas());
        assert!(!cfg.increment_nonce_on_create());
        assert!(!cfg.limit_contract_code_size(1_000_000));
    }

    #[test]
    fn eip150_inherits_homestead_knobs_unchanged() {
        let cfg = EraConfig::eip150();
        assert!(cfg.fail_contract_creation_lack_of_gas());
        assert!(!cfg.increment_nonce_on_create());
    }

    #[test]
    fn eip158_adds_nonce_on_create_and_code_size_limit() {
        let cfg = EraConfig::eip158();
        assert!(cfg.fail_contract_creation_lack_of_gas());
        assert!(cfg.increment_nonce_on_create());
        assert!(!cfg.limit_contract_code_size(CODE_SIZE_LIMIT));
        assert!(cfg.limit_contract_code_size(CODE_SIZE_LIMIT + 1));
    }

    #[test]
    fn byzantium_inherits_eip158_creation_knobs_and_adds_revert() {
        let cfg = EraConfig::byzantium();
        assert!(cfg.increment_nonce_on_create());
        assert!(cfg.limit_contract_code_size(CODE_SIZE_LIMIT + 1));
        assert!(cfg.have_revert());
        assert!(cfg.have_static_call());
    }

    #[test]
    fn have_static_call_is_forked_independently_of_have_revert() {
        assert!(!EraConfig::eip158().have_static_call());
        assert!(!EraConfig::eip158().have_revert());
        assert!(EraConfig::byzantium().have_static_call());
    }

    #[test]
    fn schedule_snapshot_reflects_era() {
        assert!(!EraConfig::Frontier.to_schedule().have_revert);
        assert!(!EraConfig::Frontier.to_schedule().have_static_call);
        assert!(EraConfig::byzantium().to_schedule().have_revert);
        assert!(EraConfig::byzantium().to_schedule().have_static_call);
        assert_eq!(EraConfig::Frontier.to_schedule().sub_gas_cap_divisor, 1);
        assert_eq!(EraConfig::eip158().to_schedule().sub_gas_cap_divisor, 64);
    }
}
