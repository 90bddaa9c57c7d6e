//! # Relayer Agent
//!
//! Drains outbox events, mirrors the tree, requests checkpoints, gathers
//! quorum signatures and forwards checkpoint and message packets.
//!
//! Packets for one checkpoint are sent checkpoint first, then every pending
//! message it covers with a proof against that exact root. The inbox only
//! keeps the latest root, so a proof is always built against the checkpoint
//! sent just before it.

use crate::adapters::{CheckpointSigner, RelaySender};
use crate::algorithms::{MerkleTreeBuilder, SignatureCollector};
use crate::config::RelayerConfig;
use crate::domain::{RelayPacket, RelayReport, RelayerError};
use shared_types::{short_hex, Hash};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use xd_03_validator_manager::{Checkpoint, SignedCheckpoint, ValidatorManager};
use xd_04_outbox::{Outbox, OutboxApi, OutboxEvent};
use xd_telemetry::{
    metric_inc, HistogramTimer, MESSAGES_DISPATCHED, OUTBOX_FAILURES, PROOF_BUILD_DURATION,
};

/// Origin-side relayer.
pub struct Relayer {
    config: RelayerConfig,
    builder: MerkleTreeBuilder,
    validators: Arc<ValidatorManager>,
    signers: Vec<CheckpointSigner>,
    sender: RelaySender,
    /// Dispatched but not yet covered by a relayed checkpoint.
    pending: BTreeMap<u64, Vec<u8>>,
    last_checkpoint: Option<Checkpoint>,
    halted: bool,
}

impl Relayer {
    /// Create a relayer.
    ///
    /// `validators` supplies the set snapshot signatures are collected
    /// against; `signers` are the validator agents attesting to the origin.
    pub fn new(
        config: RelayerConfig,
        validators: Arc<ValidatorManager>,
        signers: Vec<CheckpointSigner>,
        sender: RelaySender,
    ) -> Self {
        Self {
            config: config.normalized(),
            builder: MerkleTreeBuilder::new(),
            validators,
            signers,
            sender,
            pending: BTreeMap::new(),
            last_checkpoint: None,
            halted: false,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &RelayerConfig {
        &self.config
    }

    /// Locally mirrored tree.
    pub fn builder(&self) -> &MerkleTreeBuilder {
        &self.builder
    }

    /// Messages waiting for a checkpoint.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Latest checkpoint forwarded.
    pub fn last_checkpoint(&self) -> Option<Checkpoint> {
        self.last_checkpoint
    }

    /// Whether the outbox reported a failure.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Drain `outbox`, checkpoint it when enough messages are pending, and
    /// forward everything that became provable.
    #[instrument(skip_all, fields(origin = self.config.origin_domain))]
    pub async fn poll(&mut self, outbox: &mut Outbox) -> Result<RelayReport, RelayerError> {
        let mut report = RelayReport::default();
        self.handle_events(outbox.drain_events(), &mut report).await?;

        if self.checkpoint_due(outbox) {
            match outbox.checkpoint() {
                Ok(checkpoint) => debug!("[xd-06] Requested {}", checkpoint),
                Err(e) => warn!("[xd-06] Checkpoint request refused: {}", e),
            }
            self.handle_events(outbox.drain_events(), &mut report).await?;
        }

        if report != RelayReport::default() {
            info!(
                "[xd-06] Relayed {} checkpoints and {} messages ({} dispatched, {} pending)",
                report.checkpoints,
                report.messages,
                report.dispatched,
                self.pending.len()
            );
        }
        Ok(report)
    }

    /// Apply outbox events.
    ///
    /// Every dispatch is mirrored before any checkpoint is acted on, so a
    /// checkpoint that cannot be relayed never leaves the local tree behind
    /// the outbox. The first checkpoint error is returned once the whole
    /// batch has been applied.
    pub async fn handle_events(
        &mut self,
        events: Vec<OutboxEvent>,
        report: &mut RelayReport,
    ) -> Result<(), RelayerError> {
        let mut rest = Vec::with_capacity(events.len());
        for event in events {
            match event {
                OutboxEvent::Dispatch {
                    hash,
                    leaf_index,
                    message,
                    ..
                } => {
                    self.builder.ingest(leaf_index, hash)?;
                    self.pending.insert(leaf_index, message);
                    metric_inc!(MESSAGES_DISPATCHED);
                    report.dispatched += 1;
                }
                other => rest.push(other),
            }
        }

        let mut first_error = None;
        for event in rest {
            match event {
                OutboxEvent::Checkpoint { root, index } => {
                    if let Err(e) = self.relay_checkpoint_batch(root, index, report).await {
                        warn!("[xd-06] Checkpoint at index {} not relayed: {}", index, e);
                        first_error.get_or_insert(e);
                    }
                }
                OutboxEvent::Failed => {
                    if !self.halted {
                        error!(
                            "[xd-06] Outbox on domain {} failed, no further checkpoints",
                            self.config.origin_domain
                        );
                        metric_inc!(OUTBOX_FAILURES);
                    }
                    self.halted = true;
                    report.outbox_failed = true;
                }
                OutboxEvent::Dispatch { .. } => {}
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn relay_checkpoint_batch(
        &mut self,
        root: Hash,
        index: u64,
        report: &mut RelayReport,
    ) -> Result<(), RelayerError> {
        if self.relay_checkpoint(Checkpoint::new(root, index)).await? {
            report.checkpoints += 1;
        }
        // Also picks up messages left behind by an earlier failed send.
        if self.last_checkpoint.map(|c| c.index) == Some(index) {
            report.messages += self.relay_covered(index).await?;
        }
        Ok(())
    }

    fn checkpoint_due(&self, outbox: &Outbox) -> bool {
        if self.halted || !outbox.status().is_active() {
            return false;
        }
        let covered = self.last_checkpoint.map_or(0, |c| c.index + 1);
        outbox.count().saturating_sub(covered) >= self.config.checkpoint_interval
    }

    /// Sign and send a checkpoint. `Ok(false)` if it does not advance the
    /// last one sent.
    async fn relay_checkpoint(&mut self, checkpoint: Checkpoint) -> Result<bool, RelayerError> {
        if self.builder.root_at(checkpoint.index) != Some(checkpoint.root) {
            return Err(RelayerError::CheckpointMismatch {
                index: checkpoint.index,
            });
        }
        if let Some(last) = self.last_checkpoint {
            if checkpoint.index <= last.index {
                debug!("[xd-06] Skipping {}, already relayed index {}", checkpoint, last.index);
                return Ok(false);
            }
        }

        let signed = self.collect_signatures(checkpoint)?;
        self.sender.send(RelayPacket::Checkpoint(signed)).await?;
        self.last_checkpoint = Some(checkpoint);
        debug!("[xd-06] Sent {} root {}", checkpoint, short_hex(&checkpoint.root));
        Ok(true)
    }

    fn collect_signatures(&self, checkpoint: Checkpoint) -> Result<SignedCheckpoint, RelayerError> {
        let mut collector = SignatureCollector::new(
            self.validators.snapshot(),
            self.config.origin_domain,
            checkpoint,
        );

        for signer in &self.signers {
            if collector.is_complete() {
                break;
            }
            let signature = signer.sign(&checkpoint)?;
            if let Err(e) = collector.add(signature) {
                warn!(
                    "[xd-06] Dropping signature of 0x{}: {}",
                    hex::encode(signer.address()),
                    e
                );
            }
        }

        collector.finish()
    }

    /// Send every pending message at or below `index`. A message leaves
    /// `pending` only once its packet is on the channel.
    async fn relay_covered(&mut self, index: u64) -> Result<usize, RelayerError> {
        let covered: Vec<u64> = self.pending.range(..=index).map(|(i, _)| *i).collect();

        let mut sent = 0;
        for leaf_index in covered {
            let proof = {
                let _timer = HistogramTimer::new(&PROOF_BUILD_DURATION);
                self.builder.get_proof(leaf_index, index)?
            };
            let Some(message) = self.pending.get(&leaf_index).cloned() else {
                continue;
            };
            self.sender
                .send(RelayPacket::Message {
                    message,
                    proof: proof.path,
                    leaf_index,
                })
                .await?;
            self.pending.remove(&leaf_index);
            sent += 1;
        }
        Ok(sent)
    }
}

impl std::fmt::Debug for Relayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Relayer")
            .field("config", &self.config)
            .field("builder", &self.builder.to_string())
            .field("pending", &self.pending.len())
            .field("last_checkpoint", &self.last_checkpoint)
            .field("halted", &self.halted)
            .finish()
    }
}
