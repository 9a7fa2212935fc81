//! Integration test: Achievement rewards and escrow accounting.
//!
//! Exercises the points-gated claim flow end to end: escrowed funding at
//! creation, exact payout per claim, at-most-once claims, pool depletion
//! and top-up, and segregation of fees from reward escrow.

use std::sync::Arc;

use chrono::Utc;
use meritus_core::{AccountId, RegistryConfig};
use meritus_registry::{
    CertificateKind, NativeLedger, Registry, RegistryError, SkillLevel, CERTIFICATE_POINTS,
    SKILL_BADGE_POINTS,
};

const FEE: u128 = 1_000;
const REWARD: u128 = 100_000;

fn acct(handle: &str) -> AccountId {
    AccountId::new(handle).unwrap()
}

/// Registry with a verified institution and one registered student.
fn create_registry() -> (Registry, Arc<NativeLedger>, AccountId, AccountId, AccountId) {
    let ledger = Arc::new(NativeLedger::new());
    let owner = acct("owner");
    let mit = acct("mit");
    let alice = acct("alice");
    ledger.deposit(&owner, 10_000_000).unwrap();
    ledger.deposit(&mit, 1_000_000).unwrap();
    let registry =
        Registry::new(owner.clone(), RegistryConfig::default(), Arc::clone(&ledger)).unwrap();
    registry
        .register_institution(&mit, "MIT", "REG-001", "USA", "https://mit.edu")
        .unwrap();
    registry.verify_institution(&owner, &mit).unwrap();
    registry
        .register_student(&alice, "Alice Johnson", "alice@example.com", "STU-001")
        .unwrap();
    (registry, ledger, owner, mit, alice)
}

#[test]
fn test_points_accumulate_across_credential_kinds() {
    let (registry, _ledger, _owner, mit, alice) = create_registry();

    registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Course,
            "Algorithms",
            "Course",
            Utc::now(),
            "A",
            None,
            FEE,
        )
        .unwrap();
    registry
        .issue_skill_badge(
            &mit,
            &alice,
            "Graph Theory",
            SkillLevel::Intermediate,
            "",
            None,
            "CERT-1",
        )
        .unwrap();

    let student = registry.get_student(&alice).unwrap();
    assert_eq!(
        student.achievement_points,
        CERTIFICATE_POINTS + SKILL_BADGE_POINTS
    );
}

#[test]
fn test_claim_pays_exactly_the_reward() {
    let (registry, ledger, owner, mit, alice) = create_registry();
    let owner_spend_before = ledger.balance_of(&owner);
    registry
        .create_achievement(&owner, "Early Achiever", "First 100 points", 100, REWARD, REWARD)
        .unwrap();
    assert_eq!(ledger.balance_of(&owner), owner_spend_before - REWARD);
    assert_eq!(registry.reward_pool(), REWARD);

    registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Course,
            "Course",
            "Test",
            Utc::now(),
            "A",
            None,
            FEE,
        )
        .unwrap();

    let alice_before = ledger.balance_of(&alice);
    let vault_before = registry.vault_balance();
    let paid = registry.claim_achievement(&alice, 1).unwrap();

    assert_eq!(paid, REWARD);
    assert_eq!(ledger.balance_of(&alice), alice_before + REWARD);
    assert_eq!(registry.vault_balance(), vault_before - REWARD);
    assert!(registry.has_completed_achievement(&alice, 1));
}

#[test]
fn test_second_claim_fails_without_payout() {
    let (registry, ledger, owner, mit, alice) = create_registry();
    registry
        .create_achievement(&owner, "Achiever", "100 points", 100, REWARD, REWARD * 5)
        .unwrap();
    registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Course,
            "Course",
            "Test",
            Utc::now(),
            "A",
            None,
            FEE,
        )
        .unwrap();
    registry.claim_achievement(&alice, 1).unwrap();

    let alice_before = ledger.balance_of(&alice);
    let times_before = registry.get_achievement(1).unwrap().times_completed;
    let result = registry.claim_achievement(&alice, 1);

    assert!(matches!(result, Err(RegistryError::AlreadyClaimed { .. })));
    assert_eq!(ledger.balance_of(&alice), alice_before);
    assert_eq!(
        registry.get_achievement(1).unwrap().times_completed,
        times_before
    );
}

#[test]
fn test_creation_requires_full_escrow() {
    let (registry, _ledger, owner, _mit, _alice) = create_registry();
    let result = registry.create_achievement(&owner, "X", "Y", 100, REWARD, REWARD / 2);
    assert!(matches!(
        result,
        Err(RegistryError::InsufficientFunding { .. })
    ));
    assert_eq!(registry.stats().total_achievements, 0);
    assert_eq!(registry.reward_pool(), 0);
}

#[test]
fn test_pool_depletion_and_topup() {
    let (registry, ledger, owner, mit, alice) = create_registry();
    let bob = acct("bob");
    registry
        .register_student(&bob, "Bob", "bob@example.com", "STU-002")
        .unwrap();
    for student in [&alice, &bob] {
        registry
            .issue_certificate(
                &mit,
                student,
                CertificateKind::Course,
                "Course",
                "Test",
                Utc::now(),
                "A",
                None,
                FEE,
            )
            .unwrap();
    }
    registry
        .create_achievement(&owner, "Achiever", "100 points", 100, REWARD, REWARD)
        .unwrap();

    registry.claim_achievement(&alice, 1).unwrap();
    assert_eq!(registry.reward_pool(), 0);
    assert!(matches!(
        registry.claim_achievement(&bob, 1),
        Err(RegistryError::InsufficientFunding { .. })
    ));

    // Anyone may top up the shared pool.
    let patron = acct("patron");
    ledger.deposit(&patron, REWARD).unwrap();
    registry.fund_achievement_rewards(&patron, REWARD).unwrap();
    let paid = registry.claim_achievement(&bob, 1).unwrap();
    assert_eq!(paid, REWARD);
    assert_eq!(registry.get_achievement(1).unwrap().times_completed, 2);
}

#[test]
fn test_fees_and_escrow_stay_segregated() {
    let (registry, ledger, owner, mit, alice) = create_registry();
    registry
        .create_achievement(&owner, "Achiever", "100 points", 100, REWARD, REWARD)
        .unwrap();
    registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Course,
            "Course",
            "Test",
            Utc::now(),
            "A",
            None,
            FEE,
        )
        .unwrap();

    assert_eq!(registry.vault_balance(), REWARD + FEE);
    assert_eq!(registry.collected_fees(), FEE);
    assert_eq!(registry.reward_pool(), REWARD);

    // Withdrawal takes the fee share only; the escrow remains claimable.
    let owner_before = ledger.balance_of(&owner);
    assert_eq!(registry.withdraw_fees(&owner).unwrap(), FEE);
    assert_eq!(ledger.balance_of(&owner), owner_before + FEE);
    assert_eq!(registry.vault_balance(), REWARD);

    let paid = registry.claim_achievement(&alice, 1).unwrap();
    assert_eq!(paid, REWARD);
    assert_eq!(registry.vault_balance(), 0);
}

#[test]
fn test_mit_alice_scenario_end_to_end() {
    // The canonical walkthrough: MIT registers, owner verifies, Alice
    // registers, MIT issues a degree, owner creates a 100-point
    // achievement, Alice claims it exactly once.
    let ledger = Arc::new(NativeLedger::new());
    let owner = acct("owner");
    let mit = acct("mit");
    let alice = acct("alice");
    ledger.deposit(&owner, 1_000_000).unwrap();
    ledger.deposit(&mit, 10_000).unwrap();
    let registry =
        Registry::new(owner.clone(), RegistryConfig::default(), Arc::clone(&ledger)).unwrap();

    registry
        .register_institution(&mit, "MIT", "REG-001", "USA", "https://mit.edu")
        .unwrap();
    registry.verify_institution(&owner, &mit).unwrap();
    registry
        .register_student(&alice, "Alice", "alice@example.com", "STU-001")
        .unwrap();
    registry
        .create_achievement(&owner, "Early Achiever", "First 100 points", 100, REWARD, REWARD)
        .unwrap();
    registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Degree,
            "CS",
            "BSc",
            Utc::now(),
            "A",
            Some("QmHash".into()),
            FEE,
        )
        .unwrap();

    assert_eq!(
        registry.get_student(&alice).unwrap().achievement_points,
        100
    );
    registry.claim_achievement(&alice, 1).unwrap();
    assert_eq!(ledger.balance_of(&alice), REWARD);
    assert!(registry.has_completed_achievement(&alice, 1));
    assert!(matches!(
        registry.claim_achievement(&alice, 1),
        Err(RegistryError::AlreadyClaimed { .. })
    ));
}
