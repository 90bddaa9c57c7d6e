//! # Outbox Service

use crate::config::OutboxConfig;
use crate::domain::{OutboxError, OutboxEvent, OutboxStatus};
use crate::ports::OutboxApi;
use shared_types::{short_hex, Address, DomainId, Hash, MAX_LEAVES};
use std::collections::HashMap;
use tracing::{debug, info, warn};
use xd_01_message_codec::{encode, hash_leaf, Message};
use xd_02_merkle_accumulator::{AccumulatorError, IncrementalMerkle};
use xd_03_validator_manager::Checkpoint;

/// Outbox for one origin domain.
#[derive(Debug)]
pub struct Outbox {
    config: OutboxConfig,
    tree: IncrementalMerkle,
    status: OutboxStatus,
    validator_manager: Option<Address>,
    checkpoints: HashMap<Hash, u64>,
    latest_checkpoint: Option<Checkpoint>,
    events: Vec<OutboxEvent>,
}

impl Outbox {
    /// Uninitialized outbox.
    pub fn new(config: OutboxConfig) -> Self {
        Self {
            config,
            tree: IncrementalMerkle::new(),
            status: OutboxStatus::Active,
            validator_manager: None,
            checkpoints: HashMap::new(),
            latest_checkpoint: None,
            events: Vec::new(),
        }
    }

    /// Accumulator state.
    pub fn tree(&self) -> &IncrementalMerkle {
        &self.tree
    }

    /// Bound validator manager.
    pub fn validator_manager(&self) -> Option<Address> {
        self.validator_manager
    }

    /// Events not yet drained.
    pub fn events(&self) -> &[OutboxEvent] {
        &self.events
    }

    /// Take all recorded events.
    pub fn drain_events(&mut self) -> Vec<OutboxEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_active(&self) -> Result<(), OutboxError> {
        if self.validator_manager.is_none() {
            return Err(OutboxError::NotInitialized);
        }
        if !self.status.is_active() {
            return Err(OutboxError::Failed);
        }
        Ok(())
    }
}

impl OutboxApi for Outbox {
    fn initialize(&mut self, validator_manager: Address) -> Result<(), OutboxError> {
        if self.validator_manager.is_some() {
            return Err(OutboxError::AlreadyInitialized);
        }
        self.validator_manager = Some(validator_manager);
        info!(
            "[xd-04] Outbox on domain {} bound to validator manager {}",
            self.config.domain, validator_manager
        );
        Ok(())
    }

    fn dispatch(
        &mut self,
        caller: Address,
        destination: DomainId,
        recipient: Address,
        body: Vec<u8>,
    ) -> Result<u64, OutboxError> {
        self.ensure_active()?;

        let max = self.config.body_limit();
        if body.len() > max {
            return Err(OutboxError::MessageTooLarge {
                len: body.len(),
                max,
            });
        }
        if self.tree.is_full() {
            return Err(AccumulatorError::TreeFull {
                capacity: MAX_LEAVES,
            }
            .into());
        }

        let message = Message::new(self.config.domain, caller, destination, recipient, body);
        let leaf = hash_leaf(&message, self.tree.count());
        let (root, leaf_index) = self.tree.append(leaf)?;

        debug!(
            "[xd-04] Dispatched leaf {} ({}) to domain {}, root {}",
            leaf_index,
            short_hex(&leaf),
            destination,
            short_hex(&root)
        );

        self.events.push(OutboxEvent::Dispatch {
            hash: leaf,
            leaf_index,
            destination,
            root,
            message: encode(&message),
        });

        Ok(leaf_index)
    }

    fn fail(&mut self, caller: Address) -> Result<(), OutboxError> {
        if self.validator_manager != Some(caller) {
            warn!(
                "[xd-04] Rejected fail() from {} on domain {}",
                caller, self.config.domain
            );
            return Err(OutboxError::Unauthorized { caller });
        }

        if self.status.fail() {
            warn!(
                "[xd-04] Outbox on domain {} FAILED after {} messages",
                self.config.domain,
                self.tree.count()
            );
            self.events.push(OutboxEvent::Failed);
        }
        Ok(())
    }

    fn checkpoint(&mut self) -> Result<Checkpoint, OutboxError> {
        self.ensure_active()?;

        let count = self.tree.count();
        if count == 0 {
            return Err(OutboxError::EmptyTree);
        }

        let checkpoint = Checkpoint::new(self.tree.root(), count - 1);
        self.checkpoints.insert(checkpoint.root, checkpoint.index);
        self.latest_checkpoint = Some(checkpoint);
        self.events.push(OutboxEvent::Checkpoint {
            root: checkpoint.root,
            index: checkpoint.index,
        });

        info!("[xd-04] Domain {} committed {}", self.config.domain, checkpoint);
        Ok(checkpoint)
    }

    fn is_checkpoint(&self, root: &Hash, index: u64) -> bool {
        self.checkpoints.get(root) == Some(&index)
    }

    fn latest_checkpoint(&self) -> Option<Checkpoint> {
        self.latest_checkpoint
    }

    fn count(&self) -> u64 {
        self.tree.count()
    }

    fn root(&self) -> Hash {
        self.tree.root()
    }

    fn status(&self) -> OutboxStatus {
        self.status
    }

    fn domain(&self) -> DomainId {
        self.config.domain
    }
}
