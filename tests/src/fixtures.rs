//! # Test Fixtures
//!
//! An origin outbox and a destination inbox wired to one validator manager,
//! plus a prover mirroring the outbox so tests can build real proofs.

use shared_crypto::ValidatorKeyPair;
use shared_types::{Address, DomainId};
use std::sync::Arc;
use xd_02_merkle_accumulator::ProofPath;
use xd_03_validator_manager::{
    sign_checkpoint, Checkpoint, SignatureBytes, SignedCheckpoint, ValidatorManager, ValidatorSet,
};
use xd_04_outbox::{Outbox, OutboxApi, OutboxConfig, OutboxEvent};
use xd_05_inbox::{InMemoryRecipients, Inbox, InboxApi, InboxConfig, MockRecipient};
use xd_06_relayer::Prover;

/// Origin domain of every fixture.
pub const ORIGIN: DomainId = 1000;
/// Destination domain of every fixture.
pub const DESTINATION: DomainId = 2000;

/// Manager identity outboxes bind to.
pub fn manager_address() -> Address {
    Address::new([0x11; 32])
}

/// Sender used for dispatches.
pub fn sender_address() -> Address {
    Address::new([0x5E; 32])
}

/// Recipient with a registered handler.
pub fn recipient_address() -> Address {
    Address::new([0xAC; 32])
}

/// Deterministic validator keys `1..=n`.
pub fn validator_keys(n: u8) -> Vec<ValidatorKeyPair> {
    validator_keys_from(1, n)
}

/// Deterministic validator keys seeded `first..first + n`.
pub fn validator_keys_from(first: u8, n: u8) -> Vec<ValidatorKeyPair> {
    (first..first + n)
        .map(|i| ValidatorKeyPair::from_bytes([i; 32]).expect("valid scalar"))
        .collect()
}

/// Sign `checkpoint` on `domain` with every key in `keys`.
pub fn sign_with(keys: &[ValidatorKeyPair], domain: DomainId, checkpoint: &Checkpoint) -> Vec<SignatureBytes> {
    keys.iter()
        .map(|k| sign_checkpoint(k, domain, checkpoint).expect("signing"))
        .collect()
}

/// One origin/destination pair.
pub struct Network {
    /// Origin outbox.
    pub outbox: Outbox,
    /// Shared validator manager.
    pub manager: Arc<ValidatorManager>,
    /// Destination inbox.
    pub inbox: Inbox,
    /// Handler registered at [`recipient_address`].
    pub recipient: MockRecipient,
    /// Current validator keys.
    pub keys: Vec<ValidatorKeyPair>,
    prover: Prover,
    messages: Vec<Vec<u8>>,
}

impl Network {
    /// `validators` keys with `threshold`.
    pub fn new(validators: u8, threshold: u32) -> Self {
        let keys = validator_keys(validators);
        let set = ValidatorSet::new(keys.iter().map(|k| k.address()).collect(), threshold)
            .expect("valid set");
        let manager = Arc::new(ValidatorManager::new(manager_address(), set));

        let mut outbox = Outbox::new(OutboxConfig::for_domain(ORIGIN));
        outbox.initialize(manager_address()).expect("fresh outbox");

        let recipient = MockRecipient::new();
        let recipients = InMemoryRecipients::new().with(recipient_address(), recipient.clone());
        let inbox = Inbox::new(
            InboxConfig::new(ORIGIN, DESTINATION),
            manager.clone(),
            recipients,
        );

        Self {
            outbox,
            manager,
            inbox,
            recipient,
            keys,
            prover: Prover::new(),
            messages: Vec::new(),
        }
    }

    /// Dispatch `body` to the registered recipient on the destination.
    pub fn dispatch(&mut self, body: &[u8]) -> u64 {
        self.dispatch_to(DESTINATION, recipient_address(), body)
    }

    /// Dispatch to an arbitrary destination and recipient.
    pub fn dispatch_to(&mut self, destination: DomainId, recipient: Address, body: &[u8]) -> u64 {
        let index = self
            .outbox
            .dispatch(sender_address(), destination, recipient, body.to_vec())
            .expect("dispatch");
        self.sync();
        index
    }

    /// Commit the current root and sign it with the first `threshold` keys.
    pub fn commit(&mut self) -> SignedCheckpoint {
        let checkpoint = self.outbox.checkpoint().expect("checkpoint");
        self.sync();
        let threshold = self.manager.snapshot().threshold() as usize;
        SignedCheckpoint {
            checkpoint,
            signatures: sign_with(&self.keys[..threshold], ORIGIN, &checkpoint),
        }
    }

    /// Commit and cache in the inbox.
    pub fn commit_and_cache(&mut self) -> SignedCheckpoint {
        let signed = self.commit();
        self.inbox
            .cache_checkpoint(signed.root(), signed.index(), &signed.signatures)
            .expect("cache checkpoint");
        signed
    }

    /// Encoded message at `leaf_index`.
    pub fn message(&self, leaf_index: u64) -> Vec<u8> {
        self.messages[leaf_index as usize].clone()
    }

    /// Proof of `leaf_index` against the root at `root_index`.
    pub fn proof(&self, leaf_index: u64, root_index: u64) -> ProofPath {
        self.prover
            .prove_against_previous(leaf_index, root_index)
            .expect("proof")
            .path
    }

    /// Proof of `leaf_index` against the current root.
    pub fn latest_proof(&self, leaf_index: u64) -> ProofPath {
        self.proof(leaf_index, self.prover.count() - 1)
    }

    fn sync(&mut self) {
        for event in self.outbox.drain_events() {
            if let OutboxEvent::Dispatch { hash, message, .. } = event {
                self.prover.ingest(hash).expect("prover capacity");
                self.messages.push(message);
            }
        }
    }
}
