use crate::access_policy::AccessPolicy;
use crate::case_record::CaseRecord;
use crate::contract_config::{KeyScheme, SeedMode};
use crate::contract_error::ContractError;
use crate::identity::ClientIdentity;
use crate::operation::Operation;
use crate::personnel_record::PersonnelRecord;
use crate::record_engine::RecordEngine;
use crate::world_state::WorldState;

/// Everything one invocation may touch: the state it runs against, the
/// caller, and the policy the caller is checked against.
pub struct InvocationContext<'a, W: WorldState> {
    state: &'a mut W,
    policy: &'a AccessPolicy,
    caller: &'a dyn ClientIdentity,
    key_scheme: KeyScheme,
    seed_mode: SeedMode,
}

impl<'a, W: WorldState> InvocationContext<'a, W> {
    pub fn new(
        state: &'a mut W,
        policy: &'a AccessPolicy,
        caller: &'a dyn ClientIdentity,
        key_scheme: KeyScheme,
        seed_mode: SeedMode,
    ) -> Self {
        InvocationContext {
            state,
            policy,
            caller,
            key_scheme,
            seed_mode,
        }
    }

    pub fn authorize(&self, operation: Operation) -> Result<(), ContractError> {
        self.policy.authorize(operation, self.caller)
    }

    pub fn seed_mode(&self) -> SeedMode {
        self.seed_mode
    }

    pub fn personnel(&mut self) -> RecordEngine<'_, W, PersonnelRecord> {
        RecordEngine::new(self.state, self.key_scheme)
    }

    pub fn cases(&mut self) -> RecordEngine<'_, W, CaseRecord> {
        RecordEngine::new(self.state, self.key_scheme)
    }
}
