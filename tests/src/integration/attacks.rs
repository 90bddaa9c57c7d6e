//! # Attack Scenarios
//!
//! Everything the relay channel can do wrong: forge proofs, forge or stuff
//! quorums, replay checkpoints, mix domains. Plus validator fraud caught by
//! the manager.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use shared_types::{Address, ProtocolError};
    use xd_01_message_codec::{encode, Message};
    use xd_03_validator_manager::{
        sign_checkpoint, Checkpoint, FraudVerdict, SignedCheckpoint, ValidatorManagerError,
    };
    use xd_04_outbox::{OutboxApi, OutboxStatus};
    use xd_05_inbox::{InboxApi, InboxError};

    // =============================================================================
    // FORGED PROOFS AND MESSAGES
    // =============================================================================

    #[test]
    fn test_tampered_sibling_rejected() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"a");
        net.dispatch(b"b");
        net.commit_and_cache();

        let mut proof = net.latest_proof(1);
        proof[0][0] ^= 0xFF;
        assert!(matches!(
            net.inbox.process(&net.message(1), &proof, 1),
            Err(InboxError::InvalidProof { .. })
        ));
        assert!(!net.inbox.is_processed(1));
        assert!(net.recipient.delivered().is_empty());
    }

    #[test]
    fn test_tampered_body_rejected() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"pay 1");
        net.commit_and_cache();

        let mut forged = net.message(0);
        let last = forged.len() - 1;
        forged[last] = b'9';
        assert!(matches!(
            net.inbox.process(&forged, &net.latest_proof(0), 0),
            Err(InboxError::InvalidProof { .. })
        ));
    }

    #[test]
    fn test_leaf_index_swap_rejected() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"zero");
        net.dispatch(b"one");
        net.commit_and_cache();

        // Leaf 0's message and path presented as leaf 1.
        assert!(matches!(
            net.inbox.process(&net.message(0), &net.latest_proof(0), 1),
            Err(InboxError::InvalidProof { .. })
        ));
    }

    #[test]
    fn test_message_for_other_destination_rejected() {
        let mut net = Network::new(3, 2);
        net.dispatch_to(3000, recipient_address(), b"elsewhere");
        net.commit_and_cache();

        let err = net
            .inbox
            .process(&net.message(0), &net.latest_proof(0), 0)
            .unwrap_err();
        assert!(matches!(
            err,
            InboxError::DomainMismatch {
                destination: 3000,
                ..
            }
        ));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_message_claiming_other_origin_rejected() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"real");
        net.commit_and_cache();

        let forged = encode(&Message::new(
            4000,
            sender_address(),
            DESTINATION,
            recipient_address(),
            b"real".to_vec(),
        ));
        assert!(matches!(
            net.inbox.process(&forged, &net.latest_proof(0), 0),
            Err(InboxError::DomainMismatch { origin: 4000, .. })
        ));
    }

    #[test]
    fn test_truncated_message_rejected() {
        let mut net = Network::new(1, 1);
        net.dispatch(b"x");
        net.commit_and_cache();

        let err = net
            .inbox
            .process(&[0u8; 10], &net.latest_proof(0), 0)
            .unwrap_err();
        assert!(matches!(err, InboxError::Malformed(_)));
        assert!(matches!(
            ProtocolError::from(err),
            ProtocolError::MalformedMessage(_)
        ));
    }

    // =============================================================================
    // FORGED QUORUMS
    // =============================================================================

    fn pending_checkpoint(net: &mut Network) -> Checkpoint {
        net.dispatch(b"payload");
        net.outbox.checkpoint().unwrap()
    }

    fn assert_signature_rejection(net: &mut Network, checkpoint: &Checkpoint, signatures: &[[u8; 65]]) {
        let err = net
            .inbox
            .cache_checkpoint(checkpoint.root, checkpoint.index, signatures)
            .unwrap_err();
        assert!(matches!(err, InboxError::Verification(_)), "got {err:?}");
        assert!(net.inbox.latest_checkpoint().is_none());
    }

    #[test]
    fn test_below_threshold_rejected() {
        let mut net = Network::new(4, 3);
        let checkpoint = pending_checkpoint(&mut net);
        let sigs = sign_with(&net.keys[..2], ORIGIN, &checkpoint);
        assert_signature_rejection(&mut net, &checkpoint, &sigs);
    }

    #[test]
    fn test_repeated_signer_does_not_count_twice() {
        let mut net = Network::new(4, 3);
        let checkpoint = pending_checkpoint(&mut net);
        let one = sign_with(&net.keys[..1], ORIGIN, &checkpoint)[0];
        let two = sign_with(&net.keys[1..2], ORIGIN, &checkpoint)[0];
        assert_signature_rejection(&mut net, &checkpoint, &[one, two, one]);
    }

    #[test]
    fn test_outsider_signature_poisons_quorum() {
        let mut net = Network::new(3, 2);
        let checkpoint = pending_checkpoint(&mut net);
        let mut sigs = sign_with(&net.keys[..2], ORIGIN, &checkpoint);
        sigs.extend(sign_with(&validator_keys_from(200, 1), ORIGIN, &checkpoint));
        assert_signature_rejection(&mut net, &checkpoint, &sigs);
    }

    #[test]
    fn test_garbage_signature_poisons_quorum() {
        let mut net = Network::new(3, 2);
        let checkpoint = pending_checkpoint(&mut net);
        let mut sigs = sign_with(&net.keys, ORIGIN, &checkpoint);
        sigs.push([0xFF; 65]);
        assert_signature_rejection(&mut net, &checkpoint, &sigs);
    }

    #[test]
    fn test_signatures_bound_to_origin_domain() {
        let mut net = Network::new(3, 2);
        let checkpoint = pending_checkpoint(&mut net);
        let sigs = sign_with(&net.keys, DESTINATION, &checkpoint);
        assert_signature_rejection(&mut net, &checkpoint, &sigs);
    }

    #[test]
    fn test_signatures_bound_to_root() {
        let mut net = Network::new(3, 2);
        let checkpoint = pending_checkpoint(&mut net);
        let sigs = sign_with(&net.keys, ORIGIN, &checkpoint);
        let forged = Checkpoint::new([0xEE; 32], checkpoint.index);
        assert_signature_rejection(&mut net, &forged, &sigs);
    }

    // =============================================================================
    // REPLAY
    // =============================================================================

    #[test]
    fn test_checkpoint_replay_rejected() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"one");
        let first = net.commit_and_cache();
        net.dispatch(b"two");
        let second = net.commit_and_cache();

        for signed in [&first, &second] {
            assert!(matches!(
                net.inbox
                    .cache_checkpoint(signed.root(), signed.index(), &signed.signatures),
                Err(InboxError::StaleCheckpoint { latest: 1, .. })
            ));
        }
        assert_eq!(net.inbox.latest_checkpoint(), Some(second.checkpoint));
    }

    #[test]
    fn test_message_replay_rejected() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"once");
        net.commit_and_cache();
        net.inbox
            .process(&net.message(0), &net.latest_proof(0), 0)
            .unwrap();

        net.dispatch(b"later");
        net.commit_and_cache();
        assert_eq!(
            net.inbox.process(&net.message(0), &net.latest_proof(0), 0),
            Err(InboxError::AlreadyProcessed(0))
        );
        assert_eq!(net.recipient.delivered().len(), 1);
    }

    // =============================================================================
    // VALIDATOR FRAUD
    // =============================================================================

    #[test]
    fn test_improper_checkpoint_halts_outbox() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"honest");
        net.commit();

        let fake = Checkpoint::new([0xBA; 32], 0);
        let signed = SignedCheckpoint {
            checkpoint: fake,
            signatures: sign_with(&net.keys[..2], ORIGIN, &fake),
        };

        let verdict = net
            .manager
            .improper_checkpoint(&mut net.outbox, &signed)
            .unwrap();
        assert_eq!(verdict, Some(FraudVerdict::Improper { checkpoint: fake }));
        assert_eq!(net.outbox.status(), OutboxStatus::Failed);
    }

    #[test]
    fn test_honest_checkpoint_is_not_fraud() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"honest");
        let signed = net.commit();

        let verdict = net
            .manager
            .improper_checkpoint(&mut net.outbox, &signed)
            .unwrap();
        assert_eq!(verdict, None);
        assert!(net.outbox.status().is_active());
    }

    #[test]
    fn test_unsigned_fraud_claim_ignored() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"honest");

        // Anyone can fabricate a root; without a quorum it proves nothing.
        let claim = SignedCheckpoint::unsigned(Checkpoint::new([0xBA; 32], 0));
        assert!(matches!(
            net.manager.improper_checkpoint(&mut net.outbox, &claim),
            Err(ValidatorManagerError::InsufficientSignatures { .. })
        ));
        assert!(net.outbox.status().is_active());
    }

    #[test]
    fn test_equivocation_halts_outbox() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"one");
        let honest = net.commit();

        let twin = Checkpoint::new([0xCD; 32], honest.index());
        let conflicting = SignedCheckpoint {
            checkpoint: twin,
            signatures: vec![
                sign_checkpoint(&net.keys[1], ORIGIN, &twin).unwrap(),
                sign_checkpoint(&net.keys[2], ORIGIN, &twin).unwrap(),
            ],
        };

        let verdict = net
            .manager
            .detect_equivocation(&mut net.outbox, &honest, &conflicting)
            .unwrap();
        assert_eq!(
            verdict,
            Some(FraudVerdict::Equivocation {
                index: honest.index(),
                first_root: honest.root(),
                second_root: twin.root,
            })
        );
        assert_eq!(net.outbox.status(), OutboxStatus::Failed);

        // The origin stops; later dispatches are refused.
        assert!(net
            .outbox
            .dispatch(sender_address(), DESTINATION, Address::new([1; 32]), vec![])
            .is_err());
    }

    #[test]
    fn test_same_checkpoint_twice_is_not_equivocation() {
        let mut net = Network::new(3, 2);
        net.dispatch(b"one");
        let honest = net.commit();
        assert_eq!(
            net.manager
                .detect_equivocation(&mut net.outbox, &honest, &honest.clone())
                .unwrap(),
            None
        );
        assert!(net.outbox.status().is_active());
    }
}
