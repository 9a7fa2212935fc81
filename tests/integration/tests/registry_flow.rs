//! Integration test: Full credential lifecycle across the registry.
//!
//! Follows an institution from registration through accreditation,
//! issuance, revocation, and suspension, checking the derived validity of
//! its credentials at every step.

use std::sync::Arc;

use chrono::{Duration, Utc};
use meritus_core::{AccountId, RegistryConfig};
use meritus_registry::{
    CertificateKind, InstitutionStatus, NativeLedger, Registry, RegistryError, RegistryEvent,
    SkillLevel, CERTIFICATE_POINTS, SKILL_BADGE_POINTS,
};

const FEE: u128 = 1_000;

fn acct(handle: &str) -> AccountId {
    AccountId::new(handle).unwrap()
}

/// Fresh registry with a funded owner and institution.
fn create_registry() -> (Registry, Arc<NativeLedger>, AccountId) {
    let ledger = Arc::new(NativeLedger::new());
    let owner = acct("owner");
    ledger.deposit(&owner, 10_000_000).unwrap();
    ledger.deposit(&acct("mit"), 1_000_000).unwrap();
    let registry =
        Registry::new(owner.clone(), RegistryConfig::default(), Arc::clone(&ledger)).unwrap();
    (registry, ledger, owner)
}

#[test]
fn test_accreditation_to_issuance_flow() {
    let (registry, _ledger, owner) = create_registry();
    let mit = acct("mit");
    let alice = acct("alice");

    // Institution registers and starts out Pending with default reputation.
    registry
        .register_institution(&mit, "MIT", "REG-001", "USA", "https://mit.edu")
        .unwrap();
    let record = registry.get_institution(&mit).unwrap();
    assert_eq!(record.status, InstitutionStatus::Pending);
    assert_eq!(record.reputation, 500);

    // A Pending institution cannot issue yet.
    registry
        .register_student(&alice, "Alice Johnson", "alice@example.com", "STU-001")
        .unwrap();
    let result = registry.issue_certificate(
        &mit,
        &alice,
        CertificateKind::Degree,
        "Computer Science",
        "BSc",
        Utc::now(),
        "A",
        None,
        FEE,
    );
    assert!(matches!(result, Err(RegistryError::NotVerified(_))));

    // Owner accredits it; issuance now succeeds.
    registry.verify_institution(&owner, &mit).unwrap();
    let completion = Utc::now();
    let cert_id = registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Degree,
            "Computer Science",
            "BSc",
            completion,
            "A",
            Some("QmHash".into()),
            FEE,
        )
        .unwrap();
    assert_eq!(cert_id, 1);
    assert_eq!(registry.stats().total_certificates, 1);

    let student = registry.get_student(&alice).unwrap();
    assert_eq!(student.certificates_earned, 1);
    assert_eq!(student.achievement_points, CERTIFICATE_POINTS);

    // Re-issuing the same award is rejected.
    let result = registry.issue_certificate(
        &mit,
        &alice,
        CertificateKind::Degree,
        "Computer Science",
        "BSc",
        completion,
        "A",
        None,
        FEE,
    );
    assert!(matches!(result, Err(RegistryError::DuplicateCertificate)));
}

#[test]
fn test_suspension_retroactively_invalidates() {
    let (registry, _ledger, owner) = create_registry();
    let mit = acct("mit");
    let alice = acct("alice");
    registry
        .register_institution(&mit, "MIT", "REG-001", "USA", "https://mit.edu")
        .unwrap();
    registry.verify_institution(&owner, &mit).unwrap();
    registry
        .register_student(&alice, "Alice", "alice@example.com", "STU-001")
        .unwrap();
    let cert_id = registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Course,
            "Cryptography",
            "MSc",
            Utc::now(),
            "A",
            None,
            FEE,
        )
        .unwrap();

    let (valid, _) = registry.verify_certificate(cert_id).unwrap();
    assert!(valid);

    registry
        .suspend_institution(&owner, &mit, "Accreditation review failed")
        .unwrap();

    // The stored certificate is untouched, yet no longer verifies.
    let (valid, cert) = registry.verify_certificate(cert_id).unwrap();
    assert!(!valid);
    assert!(!cert.is_revoked);
}

#[test]
fn test_revocation_is_permanent() {
    let (registry, _ledger, owner) = create_registry();
    let mit = acct("mit");
    let alice = acct("alice");
    registry
        .register_institution(&mit, "MIT", "REG-001", "USA", "https://mit.edu")
        .unwrap();
    registry.verify_institution(&owner, &mit).unwrap();
    registry
        .register_student(&alice, "Alice", "alice@example.com", "STU-001")
        .unwrap();
    let cert_id = registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Training,
            "Databases",
            "Certificate",
            Utc::now(),
            "B+",
            None,
            FEE,
        )
        .unwrap();

    registry
        .revoke_certificate(&mit, cert_id, "Plagiarism finding")
        .unwrap();
    assert!(matches!(
        registry.revoke_certificate(&mit, cert_id, "Another reason"),
        Err(RegistryError::AlreadyRevoked(_))
    ));

    // Even with a Verified issuer, a revoked certificate never verifies.
    let (valid, cert) = registry.verify_certificate(cert_id).unwrap();
    assert!(!valid);
    assert!(cert.is_revoked);
    assert_eq!(cert.revocation_reason.as_deref(), Some("Plagiarism finding"));
}

#[test]
fn test_badge_expiry_is_derived() {
    let (registry, _ledger, owner) = create_registry();
    let mit = acct("mit");
    let alice = acct("alice");
    registry
        .register_institution(&mit, "MIT", "REG-001", "USA", "https://mit.edu")
        .unwrap();
    registry.verify_institution(&owner, &mit).unwrap();
    registry
        .register_student(&alice, "Alice", "alice@example.com", "STU-001")
        .unwrap();

    let expiry = Utc::now() + Duration::days(365);
    let expiring = registry
        .issue_skill_badge(
            &mit,
            &alice,
            "Solidity Development",
            SkillLevel::Advanced,
            "Proficient in smart contract development",
            Some(expiry),
            "Certification-ABC-123",
        )
        .unwrap();
    let lifetime = registry
        .issue_skill_badge(
            &mit,
            &alice,
            "Lifetime Skill",
            SkillLevel::Expert,
            "Never expires",
            None,
            "CERT",
        )
        .unwrap();

    assert!(registry.is_skill_badge_valid(expiring).unwrap());
    assert!(!registry
        .is_skill_badge_valid_at(expiring, expiry + Duration::seconds(1))
        .unwrap());
    assert!(registry
        .is_skill_badge_valid_at(lifetime, expiry + Duration::days(365 * 10))
        .unwrap());

    let student = registry.get_student(&alice).unwrap();
    assert_eq!(student.skill_badges_earned, 2);
    assert_eq!(student.achievement_points, 2 * SKILL_BADGE_POINTS);
    assert_eq!(registry.student_skill_badges(&alice), vec![expiring, lifetime]);
}

#[test]
fn test_event_log_reflects_full_history() {
    let (registry, _ledger, owner) = create_registry();
    let mit = acct("mit");
    let alice = acct("alice");
    registry
        .register_institution(&mit, "MIT", "REG-001", "USA", "https://mit.edu")
        .unwrap();
    registry.verify_institution(&owner, &mit).unwrap();
    registry
        .register_student(&alice, "Alice", "alice@example.com", "STU-001")
        .unwrap();
    registry
        .issue_certificate(
            &mit,
            &alice,
            CertificateKind::Workshop,
            "Consensus Protocols",
            "Workshop",
            Utc::now(),
            "Pass",
            None,
            FEE,
        )
        .unwrap();
    registry.revoke_certificate(&mit, 1, "Issued in error").unwrap();
    registry.update_platform_fee(&owner, 200).unwrap();

    let events = registry.events();
    assert_eq!(events.len(), 6);
    assert!(matches!(events[0], RegistryEvent::InstitutionRegistered { .. }));
    assert!(matches!(events[1], RegistryEvent::InstitutionVerified { .. }));
    assert!(matches!(events[2], RegistryEvent::StudentRegistered { .. }));
    assert!(matches!(
        events[3],
        RegistryEvent::CertificateIssued { certificate: 1, .. }
    ));
    assert!(matches!(
        events[4],
        RegistryEvent::CertificateRevoked { certificate: 1, .. }
    ));
    assert!(matches!(
        events[5],
        RegistryEvent::PlatformFeeUpdated { fee_bps: 200, .. }
    ));

    // The whole log serializes for external consumers.
    let json = serde_json::to_string(&events).unwrap();
    assert!(json.contains("InstitutionRegistered"));
    assert!(json.contains("Consensus Protocols"));
}

#[test]
fn test_fee_bounds_scenario() {
    let (registry, _ledger, owner) = create_registry();
    assert!(matches!(
        registry.update_platform_fee(&owner, 1001),
        Err(RegistryError::OutOfRange(_))
    ));
    registry.update_platform_fee(&owner, 200).unwrap();
    assert_eq!(registry.platform_fee_bps(), 200);
    assert_eq!(registry.stats().platform_fee_bps, 200);
}
