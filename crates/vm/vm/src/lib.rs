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

//! The VM boundary: action parameters, era configuration, sub-state
//! bookkeeping and the facade the creation/call orchestrator drives.

pub mod access_list;
pub mod action_params;
pub mod env_info;
pub mod error;
pub mod exec_env;
pub mod schedule;
pub mod substate;
pub mod traits;

pub use access_list::AccessList;
pub use action_params::{ActionParams, ActionValue, CallType, ParamsType};
pub use env_info::{BlockProvider, EnvInfo};
pub use error::{Error, Result};
pub use exec_env::ExecEnv;
pub use schedule::{EraConfig, Schedule};
pub use substate::Substate;
pub use traits::{Vm, VMOutput};
