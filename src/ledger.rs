//! Invocation runtime.
//!
//! A [`Ledger`] owns the committed world state and runs each call as one
//! invocation against a [`TxStub`] overlay. `submit` applies the overlay's
//! write set only when the operation succeeded; `evaluate` never applies it.

use log::{debug, info, warn};

use crate::access_policy::{AccessPolicy, PolicyPreset};
use crate::contract_config::ContractConfig;
use crate::contract_error::ContractError;
use crate::contract_router::dispatch;
use crate::identity::ClientIdentity;
use crate::invocation::InvocationContext;
use crate::operation::Operation;
use crate::tx_stub::TxStub;
use crate::world_state::{WorldState, WriteSet};

pub struct Ledger<S: WorldState> {
    state: S,
    config: ContractConfig,
    policy: AccessPolicy,
}

impl<S: WorldState> Ledger<S> {
    pub fn new(state: S, config: ContractConfig) -> Result<Self, ContractError> {
        config.validate()?;
        let policy = config.access_policy();

        if config.access_policy == PolicyPreset::Observed {
            let open: Vec<&str> = policy.ungated().into_iter().map(Operation::name).collect();
            warn!(
                "observed access policy leaves {} open to every org; use the strict preset to gate them",
                open.join(", ")
            );
        }
        info!(
            "ledger ready: authorized org {}, {:?} keys, {:?} seeding",
            config.authorized_org, config.key_scheme, config.seed_mode
        );

        Ok(Ledger { state, config, policy })
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    /// Runs `operation` and commits its writes if it succeeds.
    pub fn submit(&mut self, caller: &dyn ClientIdentity, operation: &str, args: &[String]) -> Result<String, ContractError> {
        let operation = Operation::from_name(operation)?;
        let (payload, writes) = self.execute(caller, operation, args)?;

        let written = writes.len();
        if written > 0 {
            self.state.apply_writes(writes).map_err(|e| {
                warn!("{operation}: commit of {written} key(s) failed: {e}");
                e
            })?;
        }
        let kind = if operation.is_write() { "write" } else { "query" };
        info!("{operation} ({kind}): committed {written} key(s)");
        Ok(payload)
    }

    /// Runs `operation` as a query: its writes, if any, are discarded.
    pub fn evaluate(&self, caller: &dyn ClientIdentity, operation: &str, args: &[String]) -> Result<String, ContractError> {
        let operation = Operation::from_name(operation)?;
        let (payload, writes) = self.execute(caller, operation, args)?;
        if !writes.is_empty() {
            debug!("{operation}: evaluated, {} buffered write(s) discarded", writes.len());
        }
        Ok(payload)
    }

    fn execute(
        &self,
        caller: &dyn ClientIdentity,
        operation: Operation,
        args: &[String],
    ) -> Result<(String, WriteSet), ContractError> {
        let mut stub = TxStub::new(&self.state);
        let payload = {
            let mut ctx = InvocationContext::new(
                &mut stub,
                &self.policy,
                caller,
                self.config.key_scheme,
                self.config.seed_mode,
            );
            dispatch(&mut ctx, operation, args)
        };

        match payload {
            Ok(payload) => Ok((payload, stub.into_writes())),
            Err(e) => {
                debug!("{operation}: aborted, {} buffered write(s) dropped: {e}", stub.pending_writes());
                Err(e)
            }
        }
    }
}
