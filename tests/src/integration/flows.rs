//! # Integration Test Flows
//!
//! Dispatch on the origin, checkpoint, attest, and deliver on the
//! destination exactly once.
//!
//! ## Flows Tested:
//!
//! 1. **Single message**: one dispatch, one checkpoint, one delivery
//! 2. **Checkpoint progression**: proofs always target the latest root
//! 3. **Halt**: a failed outbox stops dispatching, the inbox keeps working
//! 4. **Rotation**: a new validator set takes effect atomically

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_types::{Address, ProtocolError, MAX_BODY_LEN, TREE_DEPTH};
    use xd_01_message_codec::{decode, encode, hash_encoded_leaf, Message};
    use xd_02_merkle_accumulator::{IncrementalMerkle, ProofPath, ZERO_HASHES};
    use xd_03_validator_manager::Checkpoint;
    use xd_04_outbox::{OutboxApi, OutboxError, OutboxStatus};
    use xd_05_inbox::{InboxApi, InboxError, MockRecipient};

    fn zero_proof() -> ProofPath {
        let mut path = [[0u8; 32]; TREE_DEPTH];
        path.copy_from_slice(&ZERO_HASHES[..TREE_DEPTH]);
        path
    }

    // =============================================================================
    // SINGLE MESSAGE
    // =============================================================================

    #[test]
    fn test_single_message_end_to_end() {
        let mut net = Network::new(3, 2);

        let index = net.dispatch(b"message");
        assert_eq!(index, 0);

        // The outbox root equals a fresh tree holding the one leaf.
        let expected_message = Message::new(
            ORIGIN,
            sender_address(),
            DESTINATION,
            recipient_address(),
            b"message".to_vec(),
        );
        let encoded = encode(&expected_message);
        assert_eq!(net.message(0), encoded);
        let (root, _) = IncrementalMerkle::new()
            .append(hash_encoded_leaf(&encoded, 0))
            .unwrap();
        assert_eq!(net.outbox.root(), root);

        let signed = net.commit_and_cache();
        assert_eq!(signed.checkpoint, Checkpoint::new(root, 0));
        assert_eq!(net.inbox.latest_checkpoint(), Some(signed.checkpoint));

        // A single-leaf tree proves with the zero hashes.
        assert_eq!(net.latest_proof(0), zero_proof());
        net.inbox.process(&encoded, &zero_proof(), 0).unwrap();
        assert!(net.inbox.is_processed(0));

        let delivered = net.recipient.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].origin, ORIGIN);
        assert_eq!(delivered[0].sender, sender_address());
        assert_eq!(delivered[0].body, b"message");

        assert_eq!(
            net.inbox.process(&encoded, &zero_proof(), 0),
            Err(InboxError::AlreadyProcessed(0))
        );
        assert_eq!(net.recipient.delivered().len(), 1);
    }

    #[test]
    fn test_dispatched_message_decodes_back() {
        let mut net = Network::new(1, 1);
        net.dispatch(b"hello");
        let message = decode(&net.message(0)).unwrap();
        assert_eq!(message.origin, ORIGIN);
        assert_eq!(message.destination, DESTINATION);
        assert_eq!(message.recipient, recipient_address());
        assert_eq!(message.body, b"hello");
    }

    // =============================================================================
    // CHECKPOINT PROGRESSION
    // =============================================================================

    #[test]
    fn test_messages_across_checkpoints() {
        let mut net = Network::new(4, 3);

        for i in 0..5u8 {
            net.dispatch(&[i]);
        }
        net.commit_and_cache();
        for leaf in 0..5 {
            let proof = net.proof(leaf, 4);
            net.inbox.process(&net.message(leaf), &proof, leaf).unwrap();
        }

        for i in 5..8u8 {
            net.dispatch(&[i]);
        }
        let second = net.commit_and_cache();
        assert_eq!(second.index(), 7);
        for leaf in 5..8 {
            let proof = net.proof(leaf, 7);
            net.inbox.process(&net.message(leaf), &proof, leaf).unwrap();
        }

        assert_eq!(net.inbox.processed_count(), 8);
        let bodies: Vec<_> = net.recipient.delivered().into_iter().map(|d| d.body).collect();
        assert_eq!(bodies, (0..8u8).map(|i| vec![i]).collect::<Vec<_>>());
    }

    #[test]
    fn test_proof_against_superseded_root_fails() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"first");
        net.commit_and_cache();
        let stale_proof = net.proof(0, 0);

        net.dispatch(b"second");
        net.commit_and_cache();

        assert!(matches!(
            net.inbox.process(&net.message(0), &stale_proof, 0),
            Err(InboxError::InvalidProof { .. })
        ));
        // Rebuilt against the latest root it goes through.
        net.inbox
            .process(&net.message(0), &net.proof(0, 1), 0)
            .unwrap();
    }

    #[test]
    fn test_leaf_beyond_checkpoint_waits() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"covered");
        net.commit_and_cache();
        net.dispatch(b"not yet");

        assert_eq!(
            net.inbox.process(&net.message(1), &net.latest_proof(1), 1),
            Err(InboxError::IndexTooHigh {
                leaf_index: 1,
                checkpoint_index: 0
            })
        );

        net.commit_and_cache();
        net.inbox
            .process(&net.message(1), &net.latest_proof(1), 1)
            .unwrap();
    }

    #[test]
    fn test_empty_outbox_cannot_checkpoint() {
        let mut net = Network::new(1, 1);
        assert_eq!(net.outbox.checkpoint(), Err(OutboxError::EmptyTree));
    }

    // =============================================================================
    // SIZE BOUND
    // =============================================================================

    #[test]
    fn test_body_size_bound() {
        let mut net = Network::new(1, 1);

        let err = net
            .outbox
            .dispatch(sender_address(), DESTINATION, recipient_address(), vec![0u8; 3000])
            .unwrap_err();
        assert_eq!(
            err,
            OutboxError::MessageTooLarge {
                len: 3000,
                max: MAX_BODY_LEN
            }
        );
        assert_eq!(net.outbox.count(), 0);

        // Exactly at the limit is fine.
        net.dispatch(&vec![7u8; MAX_BODY_LEN]);
        net.commit_and_cache();
        net.inbox
            .process(&net.message(0), &net.latest_proof(0), 0)
            .unwrap();
        assert_eq!(net.recipient.delivered()[0].body.len(), MAX_BODY_LEN);
    }

    // =============================================================================
    // HALT
    // =============================================================================

    #[test]
    fn test_halt_stops_origin_only() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"before halt");
        let signed = net.commit();

        net.manager.authorize_fail(&mut net.outbox).unwrap();
        assert_eq!(net.outbox.status(), OutboxStatus::Failed);

        assert_eq!(
            net.outbox
                .dispatch(sender_address(), DESTINATION, recipient_address(), b"after".to_vec()),
            Err(OutboxError::Failed)
        );
        assert_eq!(net.outbox.checkpoint(), Err(OutboxError::Failed));

        // Already attested messages still land on the destination.
        net.inbox
            .cache_checkpoint(signed.root(), signed.index(), &signed.signatures)
            .unwrap();
        net.inbox
            .process(&net.message(0), &net.latest_proof(0), 0)
            .unwrap();
    }

    #[test]
    fn test_halt_is_idempotent() {
        let mut net = Network::new(1, 1);
        net.manager.authorize_fail(&mut net.outbox).unwrap();
        net.manager.authorize_fail(&mut net.outbox).unwrap();
        assert_eq!(net.outbox.status(), OutboxStatus::Failed);
    }

    #[test]
    fn test_only_bound_manager_may_halt() {
        let mut net = Network::new(1, 1);
        let stranger = Address::new([0x99; 32]);
        assert_eq!(
            net.outbox.fail(stranger),
            Err(OutboxError::Unauthorized { caller: stranger })
        );
        assert!(net.outbox.status().is_active());
    }

    // =============================================================================
    // ROTATION
    // =============================================================================

    #[test]
    fn test_rotation_switches_signers() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"one");
        net.commit_and_cache();

        let new_keys = validator_keys_from(50, 4);
        net.manager
            .rotate(new_keys.iter().map(|k| k.address()).collect(), 3)
            .unwrap();

        net.dispatch(b"two");
        let checkpoint = net.outbox.checkpoint().unwrap();

        // Old set no longer counts.
        let old = sign_with(&net.keys[..2], ORIGIN, &checkpoint);
        let err = net
            .inbox
            .cache_checkpoint(checkpoint.root, checkpoint.index, &old)
            .unwrap_err();
        assert!(matches!(
            ProtocolError::from(err),
            ProtocolError::InvalidCheckpointSignatures(_)
        ));

        let new = sign_with(&new_keys[..3], ORIGIN, &checkpoint);
        net.inbox
            .cache_checkpoint(checkpoint.root, checkpoint.index, &new)
            .unwrap();
        assert_eq!(net.inbox.latest_checkpoint(), Some(checkpoint));
    }

    #[test]
    fn test_invalid_rotation_keeps_old_set() {
        let net = Network::new(3, 2);
        let before = net.manager.snapshot();
        assert!(net.manager.rotate(vec![], 1).is_err());
        assert!(std::sync::Arc::ptr_eq(&before, &net.manager.snapshot()));
    }

    // =============================================================================
    // RECIPIENTS
    // =============================================================================

    #[test]
    fn test_unknown_recipient_retried_after_registration() {
        let mut net = Network::new(1, 1);
        let late = Address::new([0x42; 32]);
        net.dispatch_to(DESTINATION, late, b"early");
        net.commit_and_cache();

        let err = net
            .inbox
            .process(&net.message(0), &net.latest_proof(0), 0)
            .unwrap_err();
        assert_eq!(err, InboxError::UnknownRecipient(late));
        assert!(err.is_retryable());
        assert!(!net.inbox.is_processed(0));

        let handler = MockRecipient::new();
        net.inbox.recipients_mut().register(late, handler.clone());
        net.inbox
            .process(&net.message(0), &net.latest_proof(0), 0)
            .unwrap();
        assert_eq!(handler.delivered().len(), 1);
    }

    #[test]
    fn test_failing_handler_leaves_message_unprocessed() {
        let mut net = Network::new(1, 1);
        net.dispatch(b"retry me");
        net.commit_and_cache();

        net.recipient.set_failing(true);
        assert!(matches!(
            net.inbox.process(&net.message(0), &net.latest_proof(0), 0),
            Err(InboxError::HandlerFailed { .. })
        ));
        assert!(!net.inbox.is_processed(0));

        net.recipient.set_failing(false);
        net.inbox
            .process(&net.message(0), &net.latest_proof(0), 0)
            .unwrap();
        assert!(net.inbox.is_processed(0));
    }
}
