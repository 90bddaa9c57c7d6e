//! # Inbox Service

use crate::adapters::InMemoryRecipients;
use crate::config::InboxConfig;
use crate::domain::{invariant_checkpoint_advances, InboxError, InboxEvent};
use crate::ports::{InboxApi, RecipientRegistry};
use shared_types::{short_hex, DomainId, Hash};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use xd_01_message_codec::{hash_encoded_leaf, MessageView};
use xd_02_merkle_accumulator::{branch_root, ProofPath};
use xd_03_validator_manager::{Checkpoint, CheckpointVerifier, SignatureBytes};

/// Inbox for one `(origin, destination)` pair.
pub struct Inbox<R: RecipientRegistry = InMemoryRecipients> {
    config: InboxConfig,
    verifier: Arc<dyn CheckpointVerifier>,
    recipients: R,
    latest_checkpoint: Option<Checkpoint>,
    processed: HashSet<u64>,
    events: Vec<InboxEvent>,
}

impl<R: RecipientRegistry> Inbox<R> {
    /// Create an inbox verifying checkpoints with `verifier` and delivering
    /// to `recipients`.
    pub fn new(config: InboxConfig, verifier: Arc<dyn CheckpointVerifier>, recipients: R) -> Self {
        info!(
            "[xd-05] Inbox for {} -> {} started",
            config.origin, config.destination
        );
        Self {
            config,
            verifier,
            recipients,
            latest_checkpoint: None,
            processed: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Origin domain served.
    pub fn origin(&self) -> DomainId {
        self.config.origin
    }

    /// Local domain.
    pub fn destination(&self) -> DomainId {
        self.config.destination
    }

    /// Recipient registry.
    pub fn recipients_mut(&mut self) -> &mut R {
        &mut self.recipients
    }

    /// Events not yet drained.
    pub fn events(&self) -> &[InboxEvent] {
        &self.events
    }

    /// Take all recorded events.
    pub fn drain_events(&mut self) -> Vec<InboxEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<R: RecipientRegistry> InboxApi for Inbox<R> {
    fn cache_checkpoint(
        &mut self,
        root: Hash,
        index: u64,
        signatures: &[SignatureBytes],
    ) -> Result<(), InboxError> {
        let checkpoint = Checkpoint::new(root, index);

        self.verifier
            .verify_checkpoint(self.config.origin, &checkpoint, signatures)
            .map_err(InboxError::Verification)?;
        invariant_checkpoint_advances(self.latest_checkpoint.as_ref(), index)?;

        self.latest_checkpoint = Some(checkpoint);
        self.events.push(InboxEvent::CheckpointCached { root, index });
        info!("[xd-05] Cached {} from domain {}", checkpoint, self.config.origin);
        Ok(())
    }

    fn process(
        &mut self,
        message: &[u8],
        proof: &ProofPath,
        leaf_index: u64,
    ) -> Result<(), InboxError> {
        let checkpoint = self.latest_checkpoint.ok_or(InboxError::NoCheckpoint)?;
        if leaf_index > checkpoint.index {
            return Err(InboxError::IndexTooHigh {
                leaf_index,
                checkpoint_index: checkpoint.index,
            });
        }

        let view = MessageView::new(message)?;
        if view.origin() != self.config.origin || view.destination() != self.config.destination {
            return Err(InboxError::DomainMismatch {
                origin: view.origin(),
                destination: view.destination(),
                expected_origin: self.config.origin,
                expected_destination: self.config.destination,
            });
        }

        if self.processed.contains(&leaf_index) {
            return Err(InboxError::AlreadyProcessed(leaf_index));
        }

        let leaf = hash_encoded_leaf(message, leaf_index);
        let computed = branch_root(&leaf, proof, leaf_index);
        if computed != checkpoint.root {
            debug!(
                "[xd-05] Proof for leaf {} reconstructs {}, expected {}",
                leaf_index,
                short_hex(&computed),
                short_hex(&checkpoint.root)
            );
            return Err(InboxError::InvalidProof { computed });
        }

        let recipient_address = view.recipient();
        let recipient = self
            .recipients
            .get_mut(&recipient_address)
            .ok_or(InboxError::UnknownRecipient(recipient_address))?;

        if let Err(e) = recipient.handle(view.origin(), view.sender(), view.body()) {
            warn!(
                "[xd-05] Handler {} failed on leaf {}: {:#}",
                recipient_address, leaf_index, e
            );
            return Err(InboxError::HandlerFailed {
                recipient: recipient_address,
                reason: format!("{e:#}"),
            });
        }

        self.processed.insert(leaf_index);
        self.events.push(InboxEvent::Processed { leaf_index });
        info!(
            "[xd-05] Processed leaf {} ({}) for {}",
            leaf_index,
            short_hex(&leaf),
            recipient_address
        );
        Ok(())
    }

    fn latest_checkpoint(&self) -> Option<Checkpoint> {
        self.latest_checkpoint
    }

    fn is_processed(&self, leaf_index: u64) -> bool {
        self.processed.contains(&leaf_index)
    }

    fn processed_count(&self) -> usize {
        self.processed.len()
    }
}
