//! # Relayer Integration
//!
//! The relayer agent carrying traffic from an outbox to an inbox through
//! the async channel, including a channel that duplicates and reorders.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;
    use xd_03_validator_manager::{ValidatorManager, ValidatorSet};
    use xd_04_outbox::{Outbox, OutboxApi, OutboxConfig};
    use xd_05_inbox::{InMemoryRecipients, Inbox, InboxApi, InboxConfig, MockRecipient};
    use xd_06_relayer::{
        deliver, redeliver, relay_channel, CheckpointSigner, DeliveryReport, RelayPacket, Relayer,
        RelayerConfig,
    };

    struct Sides {
        outbox: Outbox,
        inbox: Inbox,
        recipient: MockRecipient,
        manager: Arc<ValidatorManager>,
        signers: Vec<CheckpointSigner>,
    }

    fn sides(validators: u8, threshold: u32) -> Sides {
        let keys = validator_keys(validators);
        let set = ValidatorSet::new(keys.iter().map(|k| k.address()).collect(), threshold).unwrap();
        let manager = Arc::new(ValidatorManager::new(manager_address(), set));

        let mut outbox = Outbox::new(OutboxConfig::for_domain(ORIGIN));
        outbox.initialize(manager_address()).unwrap();

        let recipient = MockRecipient::new();
        let inbox = Inbox::new(
            InboxConfig::new(ORIGIN, DESTINATION),
            manager.clone(),
            InMemoryRecipients::new().with(recipient_address(), recipient.clone()),
        );

        let signers = keys
            .into_iter()
            .map(|k| CheckpointSigner::new(k, ORIGIN))
            .collect();

        Sides {
            outbox,
            inbox,
            recipient,
            manager,
            signers,
        }
    }

    fn dispatch(outbox: &mut Outbox, body: &[u8]) {
        outbox
            .dispatch(sender_address(), DESTINATION, recipient_address(), body.to_vec())
            .unwrap();
    }

    #[tokio::test]
    async fn test_relayer_delivers_concurrently() {
        let Sides {
            mut outbox,
            mut inbox,
            recipient,
            manager,
            signers,
        } = sides(4, 3);

        let config = RelayerConfig {
            checkpoint_interval: 2,
            channel_capacity: 4,
            ..RelayerConfig::new(ORIGIN, DESTINATION)
        };
        let (tx, mut rx) = relay_channel(config.channel_capacity);
        let mut relayer = Relayer::new(config, manager, signers, tx);

        let destination = tokio::spawn(async move {
            let report = deliver(&mut inbox, &mut rx).await;
            (inbox, report)
        });

        for round in 0..5u8 {
            dispatch(&mut outbox, &[round, 0]);
            dispatch(&mut outbox, &[round, 1]);
            relayer.poll(&mut outbox).await.unwrap();
        }
        assert_eq!(relayer.pending(), 0);
        drop(relayer);

        let (inbox, report) = timeout(Duration::from_secs(5), destination)
            .await
            .expect("delivery finished")
            .unwrap();
        assert_eq!(report.checkpoints_cached, 5);
        assert_eq!(report.messages_processed, 10);
        assert_eq!(report.rejected, 0);
        assert_eq!(inbox.processed_count(), 10);
        assert_eq!(inbox.latest_checkpoint().map(|c| c.index), Some(9));
        assert_eq!(recipient.delivered().len(), 10);
    }

    #[tokio::test]
    async fn test_duplicating_channel_delivers_once() {
        let Sides {
            mut outbox,
            mut inbox,
            recipient,
            manager,
            signers,
        } = sides(3, 2);

        let (tx, mut rx) = relay_channel(64);
        let mut relayer = Relayer::new(RelayerConfig::for_testing(), manager, signers, tx);
        for body in [b"x".as_slice(), b"y", b"z"] {
            dispatch(&mut outbox, body);
        }
        relayer.poll(&mut outbox).await.unwrap();
        drop(relayer);

        let mut packets = Vec::new();
        while let Some(packet) = rx.recv().await {
            packets.push(packet);
        }
        assert!(matches!(packets[0], RelayPacket::Checkpoint(_)));

        // Every packet twice, messages in reverse.
        let (checkpoint, messages) = packets.split_at(1);
        let (dup_tx, mut dup_rx) = relay_channel(64);
        for packet in checkpoint.iter().chain(messages.iter().rev()) {
            dup_tx.send(packet.clone()).await.unwrap();
            dup_tx.send(packet.clone()).await.unwrap();
        }
        drop(dup_tx);

        let report = deliver(&mut inbox, &mut dup_rx).await;
        assert_eq!(report.checkpoints_cached, 1);
        assert_eq!(report.messages_processed, 3);
        assert_eq!(report.rejected, 4);
        assert_eq!(recipient.delivered().len(), 3);
    }

    async fn deliver_all(inbox: &mut Inbox, packets: Vec<RelayPacket>) -> DeliveryReport {
        let (tx, mut rx) = relay_channel(packets.len().max(1));
        for packet in packets {
            tx.send(packet).await.unwrap();
        }
        drop(tx);
        deliver(inbox, &mut rx).await
    }

    #[tokio::test]
    async fn test_failed_handler_retried_later() {
        let Sides {
            mut outbox,
            mut inbox,
            recipient,
            manager,
            signers,
        } = sides(1, 1);

        let (tx, mut rx) = relay_channel(8);
        let mut relayer = Relayer::new(RelayerConfig::for_testing(), manager, signers, tx);
        dispatch(&mut outbox, b"flaky");
        relayer.poll(&mut outbox).await.unwrap();
        let builder = relayer.builder().clone();
        drop(relayer);

        recipient.set_failing(true);
        let report = deliver(&mut inbox, &mut rx).await;
        assert_eq!(report.retryable.len(), 1);
        assert!(!inbox.is_processed(0));

        recipient.set_failing(false);
        let retried = redeliver(&mut inbox, report.retryable, &builder);
        assert_eq!(retried.messages_processed, 1);
        assert!(inbox.is_processed(0));
    }

    #[tokio::test]
    async fn test_retry_survives_newer_checkpoint() {
        let Sides {
            mut outbox,
            mut inbox,
            recipient,
            manager,
            signers,
        } = sides(1, 1);

        let (tx, mut rx) = relay_channel(8);
        let mut relayer = Relayer::new(RelayerConfig::for_testing(), manager, signers, tx);
        dispatch(&mut outbox, b"flaky");
        relayer.poll(&mut outbox).await.unwrap();
        dispatch(&mut outbox, b"later");
        relayer.poll(&mut outbox).await.unwrap();
        let builder = relayer.builder().clone();
        drop(relayer);

        let mut packets = Vec::new();
        while let Some(packet) = rx.recv().await {
            packets.push(packet);
        }
        assert_eq!(packets.len(), 4);
        let second_batch = packets.split_off(2);

        recipient.set_failing(true);
        let first = deliver_all(&mut inbox, packets).await;
        assert_eq!(first.retryable.len(), 1);

        recipient.set_failing(false);
        let second = deliver_all(&mut inbox, second_batch).await;
        assert_eq!(second.checkpoints_cached, 1);
        assert_eq!(second.messages_processed, 1);
        assert_eq!(inbox.latest_checkpoint().map(|c| c.index), Some(1));

        let retried = redeliver(&mut inbox, first.retryable, &builder);
        assert_eq!(retried.messages_processed, 1);
        assert_eq!(retried.rejected, 0);
        assert!(inbox.is_processed(0));
        assert_eq!(inbox.processed_count(), 2);

        let bodies: Vec<_> = recipient.delivered().into_iter().map(|d| d.body).collect();
        assert_eq!(bodies, vec![b"later".to_vec(), b"flaky".to_vec()]);
    }

    #[tokio::test]
    async fn test_relayer_stops_checkpointing_after_halt() {
        let Sides {
            mut outbox,
            manager,
            signers,
            ..
        } = sides(3, 2);

        let (tx, mut rx) = relay_channel(8);
        let mut relayer = Relayer::new(RelayerConfig::for_testing(), manager.clone(), signers, tx);
        dispatch(&mut outbox, b"one");
        relayer.poll(&mut outbox).await.unwrap();

        manager.authorize_fail(&mut outbox).unwrap();
        let report = relayer.poll(&mut outbox).await.unwrap();
        assert!(report.outbox_failed);
        assert!(relayer.is_halted());

        drop(relayer);
        let mut count = 0;
        while rx.recv().await.is_some() {
            count += 1;
        }
        // One checkpoint and one message from before the halt.
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_metrics_exposed() {
        xd_telemetry::register_metrics().unwrap();
        let Sides {
            mut outbox,
            mut inbox,
            manager,
            signers,
            ..
        } = sides(1, 1);

        let (tx, mut rx) = relay_channel(8);
        let mut relayer = Relayer::new(RelayerConfig::for_testing(), manager, signers, tx);
        dispatch(&mut outbox, b"counted");
        relayer.poll(&mut outbox).await.unwrap();
        drop(relayer);
        deliver(&mut inbox, &mut rx).await;

        let text = xd_telemetry::gather().unwrap();
        assert!(text.contains("xd_outbox_messages_dispatched_total"));
        assert!(text.contains("xd_inbox_messages_processed_total"));
    }
}
