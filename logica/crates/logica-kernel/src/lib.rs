//! The Mary kernel (spec §4.6): partitioned per-speaker memory, a sealed
//! variable registry, the request bus, and the hash-chained ledger. Single
//! threaded and strictly sequential (spec §5) — every public method takes
//! `&mut self` and runs to completion before returning.

mod error;
mod expression;
mod ledger;
mod request;
mod speaker;

pub use error::{KernelError, KernelResult};
pub use expression::{ExpressionKey, ExpressionRecord, ExpressionVersion};
pub use ledger::{LedgerEntry, GENESIS_HASH};
pub use request::{PendingRequest, RequestState};
pub use speaker::{SpeakerRecord, SpeakerState};

use expression::expression_key;
use indexmap::IndexMap;
use logica_value::{Status, Value};
use rustc_hash::FxHashMap;
use tracing::{info, trace};

pub const ROOT_ID: u64 = 0;
pub const ROOT_NAME: &str = "root";

pub struct InspectSpeaker {
    pub id: u64,
    pub name: String,
    pub state: SpeakerState,
    pub variables: Vec<String>,
}

pub struct Kernel {
    speakers: Vec<SpeakerRecord>,
    name_to_id: FxHashMap<String, u64>,
    partitions: FxHashMap<u64, IndexMap<String, Value>>,
    write_history: FxHashMap<(u64, String), Vec<u64>>,
    sealed: std::collections::HashSet<(u64, String)>,
    ledger: Vec<LedgerEntry>,
    requests: Vec<PendingRequest>,
    next_request_id: u64,
    expressions: FxHashMap<ExpressionKey, Vec<usize>>,
    expression_log: Vec<ExpressionRecord>,
    clock: u64,
}

impl Default for Kernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel {
    pub fn new() -> Self {
        let root = SpeakerRecord {
            id: ROOT_ID,
            name: ROOT_NAME.to_string(),
            created_at: 0,
            state: SpeakerState::Alive,
        };
        let mut name_to_id = FxHashMap::default();
        name_to_id.insert(ROOT_NAME.to_string(), ROOT_ID);
        let mut partitions = FxHashMap::default();
        partitions.insert(ROOT_ID, IndexMap::new());

        let mut kernel = Kernel {
            speakers: vec![root],
            name_to_id,
            partitions,
            write_history: FxHashMap::default(),
            sealed: std::collections::HashSet::new(),
            ledger: Vec::new(),
            requests: Vec::new(),
            next_request_id: 0,
            expressions: FxHashMap::default(),
            expression_log: Vec::new(),
            clock: 0,
        };
        kernel.append_ledger_entry(ROOT_ID, "boot", "boot", "active", None);
        kernel
    }

    fn tick(&mut self) -> u64 {
        let t = self.clock;
        self.clock += 1;
        t
    }

    fn append_ledger_entry(
        &mut self,
        speaker_id: u64,
        operation: &str,
        action: &str,
        status: &str,
        break_reason: Option<String>,
    ) -> u64 {
        let entry_id = self.ledger.len() as u64;
        let prev_hash = self
            .ledger
            .last()
            .map(|e| e.entry_hash.clone())
            .unwrap_or_else(|| GENESIS_HASH.to_string());
        let timestamp = self.tick();
        let entry_hash =
            ledger::compute_hash(entry_id, speaker_id, operation, action, timestamp, &prev_hash);
        trace!(entry_id, operation, action, "ledger append");
        self.ledger.push(LedgerEntry {
            entry_id,
            speaker_id,
            operation: operation.to_string(),
            action: action.to_string(),
            status: status.to_string(),
            timestamp,
            prev_hash,
            entry_hash,
            break_reason,
        });
        entry_id
    }

    fn speaker_id(&self, name: &str) -> KernelResult<u64> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| KernelError::UnknownSpeaker(name.to_string()))
    }

    fn require_alive(&self, name: &str) -> KernelResult<u64> {
        let id = self.speaker_id(name)?;
        match self.speakers[id as usize].state {
            SpeakerState::Alive => Ok(id),
            SpeakerState::Suspended => Err(KernelError::SpeakerSuspended(name.to_string())),
        }
    }

    // --- speaker lifecycle ---------------------------------------------

    pub fn create_speaker(&mut self, caller: &str, name: &str) -> KernelResult<u64> {
        let caller_id = self.require_alive(caller)?;
        let id = self.speakers.len() as u64;
        let created_at = self.clock;
        self.speakers.push(SpeakerRecord {
            id,
            name: name.to_string(),
            created_at,
            state: SpeakerState::Alive,
        });
        self.name_to_id.insert(name.to_string(), id);
        self.partitions.insert(id, IndexMap::new());
        self.append_ledger_entry(caller_id, "create_speaker", name, "active", None);
        info!(speaker = name, "speaker created");
        Ok(id)
    }

    pub fn suspend_speaker(&mut self, caller: &str, target: &str) -> KernelResult<()> {
        let caller_id = self.speaker_id(caller)?;
        if caller_id != ROOT_ID {
            return Err(KernelError::NotRoot);
        }
        let target_id = self.speaker_id(target)?;
        self.speakers[target_id as usize].state = SpeakerState::Suspended;
        self.append_ledger_entry(caller_id, "suspend_speaker", target, "active", None);
        Ok(())
    }

    pub fn is_alive(&self, name: &str) -> bool {
        self.speaker_id(name)
            .map(|id| self.speakers[id as usize].state == SpeakerState::Alive)
            .unwrap_or(false)
    }

    // --- partitioned memory ----------------------------------------------

    pub fn write(&mut self, caller: &str, var: &str, value: Value) -> KernelResult<()> {
        let caller_id = self.require_alive(caller)?;
        if self.sealed.contains(&(caller_id, var.to_string())) {
            return Err(KernelError::SealedVariable {
                owner: caller.to_string(),
                name: var.to_string(),
            });
        }
        let display = value.display_string();
        self.partitions
            .get_mut(&caller_id)
            .expect("partition exists for every registered speaker")
            .insert(var.to_string(), value);
        let entry_id =
            self.append_ledger_entry(caller_id, "write", &format!("{var}={display}"), "active", None);
        self.write_history
            .entry((caller_id, var.to_string()))
            .or_default()
            .push(entry_id);
        Ok(())
    }

    pub fn read(&mut self, caller: &str, owner: &str, var: &str) -> KernelResult<Value> {
        let caller_id = self.speaker_id(caller)?;
        let owner_id = self.speaker_id(owner)?;
        let value = self
            .partitions
            .get(&owner_id)
            .and_then(|p| p.get(var))
            .cloned()
            .unwrap_or(Value::None);
        self.append_ledger_entry(caller_id, "read", &format!("{owner}.{var}"), "active", None);
        Ok(value)
    }

    pub fn list_vars(&self, owner: &str) -> KernelResult<Vec<String>> {
        let owner_id = self.speaker_id(owner)?;
        Ok(self
            .partitions
            .get(&owner_id)
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default())
    }

    pub fn seal(&mut self, speaker: &str, var: &str) -> KernelResult<()> {
        let speaker_id = self.speaker_id(speaker)?;
        self.sealed.insert((speaker_id, var.to_string()));
        self.append_ledger_entry(speaker_id, "seal", var, "active", None);
        Ok(())
    }

    pub fn is_sealed(&self, speaker: &str, var: &str) -> bool {
        self.speaker_id(speaker)
            .map(|id| self.sealed.contains(&(id, var.to_string())))
            .unwrap_or(false)
    }

    // --- submitted expressions -------------------------------------------

    /// Evaluates `condition_fn` and, if it holds, `action_fn`; records the
    /// resulting `Expression{status, version}` and supersedes any earlier
    /// submission with the same (speaker, condition_label, action) key.
    pub fn submit(
        &mut self,
        speaker: &str,
        condition_label: &str,
        action: &str,
        mut condition_fn: impl FnMut() -> bool,
        mut action_fn: impl FnMut() -> bool,
    ) -> KernelResult<ExpressionRecord> {
        let speaker_id = self.speaker_id(speaker)?;
        let status = if !condition_fn() {
            Status::Inactive
        } else if action_fn() {
            Status::Active
        } else {
            Status::Broken
        };

        let key = expression_key(speaker, condition_label, action);
        if let Some(indices) = self.expressions.get(&key) {
            if let Some(&last) = indices.last() {
                self.expression_log[last].version = ExpressionVersion::Superseded;
            }
        }
        let record = ExpressionRecord {
            speaker: speaker.to_string(),
            condition_label: condition_label.to_string(),
            action: action.to_string(),
            status,
            version: ExpressionVersion::Current,
        };
        let index = self.expression_log.len();
        self.expression_log.push(record.clone());
        self.expressions.entry(key).or_default().push(index);

        self.append_ledger_entry(speaker_id, "submit", action, status.name(), None);
        Ok(record)
    }

    /// Repeats `action_fn` while `loop_condition` holds, up to `loop_max`
    /// iterations; exceeding the bound reports `broken`.
    pub fn submit_loop(
        &mut self,
        speaker: &str,
        action: &str,
        mut action_fn: impl FnMut() -> bool,
        mut loop_condition: impl FnMut() -> bool,
        loop_max: u32,
    ) -> KernelResult<(Status, u32)> {
        let speaker_id = self.speaker_id(speaker)?;
        let mut iterations = 0u32;
        while iterations < loop_max && loop_condition() {
            action_fn();
            iterations += 1;
        }
        let (status, break_reason) = if iterations >= loop_max && loop_condition() {
            (Status::Broken, Some("max iterations exceeded".to_string()))
        } else {
            (Status::Active, None)
        };
        self.append_ledger_entry(speaker_id, "submit_loop", action, status.name(), break_reason);
        Ok((status, iterations))
    }

    // --- request bus -------------------------------------------------------

    pub fn request(&mut self, from: &str, to: &str, action: &str) -> KernelResult<u64> {
        let from_id = self.speaker_id(from)?;
        self.speaker_id(to)?;
        let id = self.next_request_id;
        self.next_request_id += 1;
        let created_at = self.clock;
        self.requests.push(PendingRequest {
            id,
            from: from.to_string(),
            to: to.to_string(),
            action: action.to_string(),
            state: RequestState::Pending,
            created_at,
        });
        self.append_ledger_entry(from_id, "request", &format!("{from}->{to}:{action}"), "pending", None);
        Ok(id)
    }

    pub fn respond(&mut self, responder: &str, request_id: u64, accept: bool) -> KernelResult<()> {
        let responder_id = self.speaker_id(responder)?;
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(KernelError::UnknownRequest(request_id))?;
        if request.to != responder {
            return Err(KernelError::NotAddressee {
                request: request_id,
                responder: responder.to_string(),
            });
        }
        if request.state != RequestState::Pending {
            return Err(KernelError::RequestAlreadyResolved(request_id));
        }
        request.state = if accept {
            RequestState::Accepted
        } else {
            RequestState::Refused
        };
        let status = if accept { "accepted" } else { "refused" };
        self.append_ledger_entry(responder_id, "respond", &format!("#{request_id}"), status, None);
        Ok(())
    }

    pub fn pending_requests(&self, speaker: &str) -> Vec<&PendingRequest> {
        self.requests
            .iter()
            .filter(|r| r.to == speaker && r.state == RequestState::Pending)
            .collect()
    }

    // --- inspection ----------------------------------------------------

    pub fn inspect_speaker(&self, target: &str) -> KernelResult<InspectSpeaker> {
        let id = self.speaker_id(target)?;
        let record = &self.speakers[id as usize];
        let variables = self
            .partitions
            .get(&id)
            .map(|p| p.keys().cloned().collect())
            .unwrap_or_default();
        Ok(InspectSpeaker {
            id,
            name: record.name.clone(),
            state: record.state,
            variables,
        })
    }

    pub fn inspect_variable(&self, owner: &str, var: &str) -> KernelResult<Option<Value>> {
        let owner_id = self.speaker_id(owner)?;
        Ok(self.partitions.get(&owner_id).and_then(|p| p.get(var)).cloned())
    }

    pub fn variable_history(&self, owner: &str, var: &str) -> KernelResult<Vec<u64>> {
        let owner_id = self.speaker_id(owner)?;
        Ok(self
            .write_history
            .get(&(owner_id, var.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    // --- ledger ----------------------------------------------------------

    pub fn ledger_read(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    pub fn ledger_search(&self, operation: &str) -> Vec<&LedgerEntry> {
        self.ledger.iter().filter(|e| e.operation == operation).collect()
    }

    /// Recomputes every entry's hash and checks the `prev_hash` linkage
    /// (spec invariant I2/I3; any tampered field or broken link fails this).
    pub fn ledger_verify(&self) -> bool {
        self.ledger_verify_report().is_ok()
    }

    /// Same check as [`Kernel::ledger_verify`] but names the first broken
    /// entry, for the `verify ledger` statement's `BROKEN: <reason>` output.
    pub fn ledger_verify_report(&self) -> Result<(), String> {
        let mut expected_prev = GENESIS_HASH.to_string();
        for entry in &self.ledger {
            if entry.prev_hash != expected_prev {
                return Err(format!("entry #{} has a broken prev_hash link", entry.entry_id));
            }
            if entry.recomputed_hash() != entry.entry_hash {
                return Err(format!("entry #{} hash does not match its recorded fields", entry.entry_id));
            }
            expected_prev = entry.entry_hash.clone();
        }
        Ok(())
    }

    pub fn speaker_name(&self, id: u64) -> Option<&str> {
        self.speakers.get(id as usize).map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_entry_is_genesis_linked() {
        let kernel = Kernel::new();
        assert_eq!(kernel.ledger_read().len(), 1);
        assert_eq!(kernel.ledger_read()[0].prev_hash, GENESIS_HASH);
        assert!(kernel.ledger_verify());
    }

    #[test]
    fn create_speaker_registers_and_logs() {
        let mut kernel = Kernel::new();
        let id = kernel.create_speaker("root", "J").unwrap();
        assert_eq!(id, 1);
        assert!(kernel.is_alive("J"));
        assert!(kernel.ledger_verify());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "J").unwrap();
        kernel.write("J", "x", Value::Int(42)).unwrap();
        let value = kernel.read("root", "J", "x").unwrap();
        assert_eq!(value, Value::Int(42));
    }

    #[test]
    fn sealed_variable_rejects_write() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "J").unwrap();
        kernel.write("J", "g", Value::Int(92)).unwrap();
        kernel.seal("J", "g").unwrap();
        let err = kernel.write("J", "g", Value::Int(100)).unwrap_err();
        assert_eq!(
            err,
            KernelError::SealedVariable {
                owner: "J".to_string(),
                name: "g".to_string()
            }
        );
    }

    #[test]
    fn tamper_breaks_verification() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "J").unwrap();
        kernel.write("J", "x", Value::Int(1)).unwrap();
        assert!(kernel.ledger_verify());
        kernel.ledger[1].action = "x=999".to_string();
        assert!(!kernel.ledger_verify());
    }

    #[test]
    fn request_respond_only_addressee() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "A").unwrap();
        kernel.create_speaker("root", "B").unwrap();
        let id = kernel.request("A", "B", "help").unwrap();
        let err = kernel.respond("A", id, true).unwrap_err();
        assert_eq!(
            err,
            KernelError::NotAddressee {
                request: id,
                responder: "A".to_string()
            }
        );
        kernel.respond("B", id, true).unwrap();
        assert!(kernel.pending_requests("B").is_empty());
    }

    #[test]
    fn submit_marks_earlier_as_superseded() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "J").unwrap();
        let first = kernel.submit("J", "cond", "act", || true, || true).unwrap();
        assert_eq!(first.version, ExpressionVersion::Current);
        let second = kernel.submit("J", "cond", "act", || true, || true).unwrap();
        assert_eq!(second.version, ExpressionVersion::Current);
        assert_eq!(kernel.expression_log[0].version, ExpressionVersion::Superseded);
    }

    #[test]
    fn submit_loop_reports_broken_on_exhaustion() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "J").unwrap();
        let (status, iterations) = kernel
            .submit_loop("J", "act", || true, || true, 3)
            .unwrap();
        assert_eq!(status, Status::Broken);
        assert_eq!(iterations, 3);
    }

    #[test]
    fn submit_loop_completes_when_condition_clears() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "J").unwrap();
        let mut remaining = 2;
        let (status, iterations) = kernel
            .submit_loop(
                "J",
                "act",
                || true,
                || {
                    if remaining > 0 {
                        remaining -= 1;
                        true
                    } else {
                        false
                    }
                },
                10,
            )
            .unwrap();
        assert_eq!(status, Status::Active);
        assert_eq!(iterations, 2);
    }

    #[test]
    fn only_root_may_suspend() {
        let mut kernel = Kernel::new();
        kernel.create_speaker("root", "A").unwrap();
        kernel.create_speaker("root", "B").unwrap();
        assert_eq!(kernel.suspend_speaker("A", "B").unwrap_err(), KernelError::NotRoot);
        kernel.suspend_speaker("root", "B").unwrap();
        assert!(!kernel.is_alive("B"));
    }
}
