//! # Destination Delivery
//!
//! Applies relay packets to an inbox. Rejections are logged and counted;
//! packets whose recipient handler failed are handed back for a later retry.

use crate::adapters::RelayReceiver;
use crate::algorithms::MerkleTreeBuilder;
use crate::domain::{DeliveryReport, RelayPacket};
use tracing::{debug, instrument, warn};
use xd_05_inbox::{Inbox, InboxApi, InboxError, RecipientRegistry};
use xd_telemetry::{
    metric_inc, CHECKPOINTS_CACHED, CHECKPOINT_REJECTIONS, LATEST_CHECKPOINT_INDEX,
    MESSAGES_PROCESSED, PROCESS_REJECTIONS,
};

/// Apply one packet.
pub fn apply_packet<R: RecipientRegistry>(
    inbox: &mut Inbox<R>,
    packet: &RelayPacket,
) -> Result<(), InboxError> {
    match packet {
        RelayPacket::Checkpoint(signed) => {
            inbox.cache_checkpoint(signed.root(), signed.index(), &signed.signatures)
        }
        RelayPacket::Message {
            message,
            proof,
            leaf_index,
        } => inbox.process(message, proof, *leaf_index),
    }
}

/// Consume packets until every sender is gone.
#[instrument(skip_all)]
pub async fn deliver<R: RecipientRegistry>(
    inbox: &mut Inbox<R>,
    receiver: &mut RelayReceiver,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();
    while let Some(packet) = receiver.recv().await {
        record(inbox, packet, &mut report);
    }
    debug!(
        "[xd-06] Delivery finished: {} checkpoints, {} messages, {} rejected, {} to retry",
        report.checkpoints_cached,
        report.messages_processed,
        report.rejected,
        report.retryable.len()
    );
    report
}

/// Re-apply packets previously returned as retryable.
///
/// The inbox only keeps its latest root, so each message is first proven
/// again against that root from `builder`, a mirror of the origin tree.
/// A message the mirror cannot prove is retried with its old proof.
#[instrument(skip_all, fields(packets = packets.len()))]
pub fn redeliver<R: RecipientRegistry>(
    inbox: &mut Inbox<R>,
    packets: Vec<RelayPacket>,
    builder: &MerkleTreeBuilder,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();
    for packet in packets {
        let packet = match inbox.latest_checkpoint() {
            Some(latest) => reprove(packet, builder, latest.index),
            None => packet,
        };
        record(inbox, packet, &mut report);
    }
    report
}

fn reprove(packet: RelayPacket, builder: &MerkleTreeBuilder, root_index: u64) -> RelayPacket {
    match packet {
        RelayPacket::Message {
            message,
            proof,
            leaf_index,
        } => match builder.get_proof(leaf_index, root_index) {
            Ok(fresh) => RelayPacket::Message {
                message,
                proof: fresh.path,
                leaf_index,
            },
            Err(e) => {
                debug!("[xd-06] Keeping old proof for leaf {}: {}", leaf_index, e);
                RelayPacket::Message {
                    message,
                    proof,
                    leaf_index,
                }
            }
        },
        checkpoint => checkpoint,
    }
}

fn record<R: RecipientRegistry>(inbox: &mut Inbox<R>, packet: RelayPacket, report: &mut DeliveryReport) {
    let is_checkpoint = matches!(packet, RelayPacket::Checkpoint(_));

    match apply_packet(inbox, &packet) {
        Ok(()) => {
            if let RelayPacket::Checkpoint(signed) = &packet {
                metric_inc!(CHECKPOINTS_CACHED);
                LATEST_CHECKPOINT_INDEX.set(signed.index() as i64);
                report.checkpoints_cached += 1;
            } else {
                metric_inc!(MESSAGES_PROCESSED);
                report.messages_processed += 1;
            }
        }
        Err(e) if e.is_retryable() => {
            warn!("[xd-06] Delivery deferred: {}", e);
            metric_inc!(PROCESS_REJECTIONS, &[rejection_reason(&e)]);
            report.retryable.push(packet);
        }
        Err(e) => {
            warn!("[xd-06] Packet rejected: {}", e);
            let reason = rejection_reason(&e);
            if is_checkpoint {
                metric_inc!(CHECKPOINT_REJECTIONS, &[reason]);
            } else {
                metric_inc!(PROCESS_REJECTIONS, &[reason]);
            }
            report.rejected += 1;
        }
    }
}

/// Metric label for a rejection.
pub fn rejection_reason(err: &InboxError) -> &'static str {
    match err {
        InboxError::Verification(_) => "signatures",
        InboxError::StaleCheckpoint { .. } => "stale",
        InboxError::NoCheckpoint => "no_checkpoint",
        InboxError::IndexTooHigh { .. } => "index_too_high",
        InboxError::Malformed(_) => "malformed",
        InboxError::DomainMismatch { .. } => "domain_mismatch",
        InboxError::AlreadyProcessed(_) => "already_processed",
        InboxError::InvalidProof { .. } => "invalid_proof",
        InboxError::UnknownRecipient(_) => "unknown_recipient",
        InboxError::HandlerFailed { .. } => "handler_failed",
    }
}
