//! # xd-relayer
//!
//! Runs one origin outbox, one destination inbox and the relayer between
//! them in a single process. Every line read from stdin is dispatched as a
//! message body; delivered bodies are logged by the destination recipient.
//!
//! ```text
//! echo "hello" | XD_ORIGIN_DOMAIN=celo XD_DESTINATION_DOMAIN=alfajores xd-relayer
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Load `RelayerConfig` and `TelemetryConfig` from the environment
//! 2. Install the tracing subscriber and register metrics
//! 3. Generate `XD_VALIDATORS` validator keys (default 3) and the manager
//! 4. Initialize the outbox and the inbox
//! 5. Relay stdin until EOF while delivering concurrently
//! 6. Retry deferred deliveries against the final checkpoint

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use shared_crypto::{keccak256, ValidatorKeyPair};
use shared_types::{name_from_domain_id, short_hex, Address, DomainId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use xd_01_message_codec::{message_id, Message};
use xd_03_validator_manager::{ValidatorManager, ValidatorSet};
use xd_04_outbox::{Outbox, OutboxApi, OutboxConfig};
use xd_05_inbox::{InMemoryRecipients, Inbox, InboxApi, InboxConfig, MessageRecipient};
use xd_06_relayer::{
    deliver, redeliver, relay_channel, CheckpointSigner, MerkleTreeBuilder, Relayer,
    RelayerConfig, RelayerError,
};
use xd_telemetry::{gather, init_telemetry, TelemetryConfig};

fn manager_address() -> Address {
    Address::new(keccak256(b"xd-relayer/manager"))
}

fn sender_address() -> Address {
    Address::new(keccak256(b"xd-relayer/sender"))
}

fn recipient_address() -> Address {
    Address::new(keccak256(b"xd-relayer/recipient"))
}

fn domain_label(domain: DomainId) -> String {
    name_from_domain_id(domain).unwrap_or_else(|| domain.to_string())
}

fn validator_count() -> usize {
    env::var("XD_VALIDATORS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(3)
        .max(1)
}

/// Destination recipient that logs what it receives.
struct LogRecipient;

impl MessageRecipient for LogRecipient {
    fn handle(&mut self, origin: DomainId, sender: Address, body: &[u8]) -> anyhow::Result<()> {
        info!(
            "[xd-06] Delivered from {} ({}): {}",
            domain_label(origin),
            sender,
            String::from_utf8_lossy(body)
        );
        Ok(())
    }
}

/// Dispatch stdin lines and relay them. Returns the mirrored tree for
/// re-proving deferred packets.
async fn relay_stdin(mut relayer: Relayer, outbox: &mut Outbox) -> Result<MerkleTreeBuilder> {
    let origin = relayer.config().origin_domain;
    let destination = relayer.config().destination_domain;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let body = line.trim_end().as_bytes().to_vec();
        if body.is_empty() {
            continue;
        }
        let message = Message::new(
            origin,
            sender_address(),
            destination,
            recipient_address(),
            body.clone(),
        );
        match outbox.dispatch(sender_address(), destination, recipient_address(), body) {
            Ok(index) => info!(
                "[xd-06] Dispatched {} as leaf {}",
                short_hex(&message_id(&message)),
                index
            ),
            Err(e) => {
                warn!("[xd-06] Dispatch refused: {}", e);
                continue;
            }
        }

        match relayer.poll(outbox).await {
            Ok(_) => {}
            Err(RelayerError::ChannelClosed) => return Err(RelayerError::ChannelClosed.into()),
            Err(e) => warn!("[xd-06] Poll failed, retrying with the next message: {}", e),
        }
    }

    // Cover what the checkpoint interval left pending.
    if relayer.pending() > 0 {
        outbox.checkpoint()?;
        relayer.poll(outbox).await?;
    }
    Ok(relayer.builder().clone())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = RelayerConfig::from_env();
    let telemetry = TelemetryConfig::from_env().with_route(
        &domain_label(config.origin_domain),
        &domain_label(config.destination_domain),
    );
    init_telemetry(&telemetry)?;

    let keys: Vec<_> = (0..validator_count())
        .map(|_| ValidatorKeyPair::generate())
        .collect();
    let set = ValidatorSet::with_default_threshold(keys.iter().map(|k| k.address()).collect())?;
    info!(
        "[xd-06] Relaying {} with {} validators, threshold {}",
        telemetry.display_name(),
        set.len(),
        set.threshold()
    );
    let manager = Arc::new(ValidatorManager::new(manager_address(), set));

    let mut outbox = Outbox::new(OutboxConfig::for_domain(config.origin_domain));
    outbox.initialize(manager_address())?;
    let mut inbox = Inbox::new(
        InboxConfig::new(config.origin_domain, config.destination_domain),
        manager.clone(),
        InMemoryRecipients::new().with(recipient_address(), LogRecipient),
    );

    let (sender, mut receiver) = relay_channel(config.channel_capacity);
    let signers = keys
        .into_iter()
        .map(|k| CheckpointSigner::new(k, config.origin_domain))
        .collect();
    let relayer = Relayer::new(config, manager, signers, sender);

    let (relayed, mut report) = tokio::join!(
        relay_stdin(relayer, &mut outbox),
        deliver(&mut inbox, &mut receiver)
    );
    let builder = relayed?;

    if !report.retryable.is_empty() {
        let retried = redeliver(&mut inbox, std::mem::take(&mut report.retryable), &builder);
        report.messages_processed += retried.messages_processed;
        report.rejected += retried.rejected;
        if !retried.retryable.is_empty() {
            warn!("[xd-06] {} messages still undelivered", retried.retryable.len());
        }
    }

    info!(
        "[xd-06] Done: {} dispatched, {} delivered, {} rejected",
        outbox.count(),
        inbox.processed_count(),
        report.rejected
    );

    if telemetry.dump_metrics {
        println!("{}", gather()?);
    }
    Ok(())
}
