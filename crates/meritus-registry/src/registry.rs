use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use meritus_core::config::MAX_PLATFORM_FEE_BPS;
use meritus_core::{AccountId, RegistryConfig};

use crate::achievement::Achievement;
use crate::badge::{SkillBadge, SkillLevel};
use crate::certificate::{Certificate, CertificateKey, CertificateKind};
use crate::error::RegistryError;
use crate::events::{EventLog, RegistryEvent};
use crate::institution::{Institution, InstitutionStatus, DEFAULT_REPUTATION, MAX_REPUTATION};
use crate::ledger::NativeLedger;
use crate::student::Student;

/// Achievement points awarded to a student per certificate.
pub const CERTIFICATE_POINTS: u64 = 100;

/// Achievement points awarded to a student per skill badge.
pub const SKILL_BADGE_POINTS: u64 = 50;

/// Aggregate registry counters and fee settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total_institutions: u64,
    pub total_students: u64,
    pub total_certificates: u64,
    pub total_skill_badges: u64,
    pub total_achievements: u64,
    pub platform_fee_bps: u32,
}

/// Earmarked split of the value held in the registry vault.
///
/// Invariant: `collected_fees + reward_pool` equals the vault balance, so
/// fee withdrawal can never touch value escrowed for unclaimed rewards.
#[derive(Debug, Default)]
struct Treasury {
    collected_fees: u128,
    reward_pool: u128,
}

/// The credential registry: one identity space, five sub-ledgers.
///
/// Every state-mutating operation validates all of its guards before the
/// first write, and `claim_achievement` transfers value only after all
/// bookkeeping is recorded. The host environment serializes operations;
/// the registry never relies on interleaving-free multi-step reads beyond
/// that.
pub struct Registry {
    owner: AccountId,
    vault: AccountId,
    config: RwLock<RegistryConfig>,
    ledger: Arc<NativeLedger>,

    institutions: DashMap<AccountId, Institution>,
    students: DashMap<AccountId, Student>,
    certificates: DashMap<u64, Certificate>,
    badges: DashMap<u64, SkillBadge>,
    achievements: DashMap<u64, Achievement>,
    /// (achievement id, student) → claim timestamp.
    completed: DashMap<(u64, AccountId), DateTime<Utc>>,

    /// Duplicate-award fingerprints → certificate id.
    certificate_index: DashMap<CertificateKey, u64>,
    /// Reverse indexes, append-only.
    student_certificates: DashMap<AccountId, Vec<u64>>,
    student_badges: DashMap<AccountId, Vec<u64>>,
    institution_certificates: DashMap<AccountId, Vec<u64>>,

    next_certificate_id: AtomicU64,
    next_badge_id: AtomicU64,
    next_achievement_id: AtomicU64,

    treasury: RwLock<Treasury>,
    events: EventLog,
}

impl Registry {
    /// Create a registry owned by `owner`, settling value on `ledger`.
    pub fn new(
        owner: AccountId,
        config: RegistryConfig,
        ledger: Arc<NativeLedger>,
    ) -> Result<Self, RegistryError> {
        config
            .validate()
            .map_err(|e| RegistryError::OutOfRange(e.to_string()))?;
        Ok(Self {
            owner,
            vault: AccountId(format!("meritus:vault:{}", Uuid::now_v7())),
            config: RwLock::new(config),
            ledger,
            institutions: DashMap::new(),
            students: DashMap::new(),
            certificates: DashMap::new(),
            badges: DashMap::new(),
            achievements: DashMap::new(),
            completed: DashMap::new(),
            certificate_index: DashMap::new(),
            student_certificates: DashMap::new(),
            student_badges: DashMap::new(),
            institution_certificates: DashMap::new(),
            next_certificate_id: AtomicU64::new(1),
            next_badge_id: AtomicU64::new(1),
            next_achievement_id: AtomicU64::new(1),
            treasury: RwLock::new(Treasury::default()),
            events: EventLog::new(),
        })
    }

    // =====================================================================
    // Institution ledger
    // =====================================================================

    /// Register the caller as an institution, status Pending, reputation
    /// at the default.
    pub fn register_institution(
        &self,
        caller: &AccountId,
        name: impl Into<String>,
        registration_number: impl Into<String>,
        country: impl Into<String>,
        website: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let registration_number = registration_number.into();
        if self.institutions.contains_key(caller) {
            return Err(RegistryError::AlreadyRegistered(caller.clone()));
        }
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidInput("institution name required".into()));
        }
        if registration_number.trim().is_empty() {
            return Err(RegistryError::InvalidInput("registration number required".into()));
        }

        let now = Utc::now();
        self.institutions.insert(
            caller.clone(),
            Institution {
                account: caller.clone(),
                name: name.clone(),
                registration_number,
                country: country.into(),
                website: website.into(),
                status: InstitutionStatus::Pending,
                reputation: DEFAULT_REPUTATION,
                certificates_issued: 0,
                registered_at: now,
            },
        );
        self.events.record(RegistryEvent::InstitutionRegistered {
            institution: caller.clone(),
            name: name.clone(),
            at: now,
        });
        tracing::info!(institution = %caller, name = %name, "institution registered");
        Ok(())
    }

    /// Mark an institution as Verified. Owner-only; re-verifying simply
    /// re-sets the status.
    pub fn verify_institution(
        &self,
        caller: &AccountId,
        institution: &AccountId,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        let mut record = self
            .institutions
            .get_mut(institution)
            .ok_or_else(|| RegistryError::NotRegistered(institution.clone()))?;
        record.status = InstitutionStatus::Verified;
        drop(record);

        let now = Utc::now();
        self.events.record(RegistryEvent::InstitutionVerified {
            institution: institution.clone(),
            at: now,
        });
        tracing::info!(institution = %institution, "institution verified");
        Ok(())
    }

    /// Suspend an institution, retroactively invalidating its certificates.
    /// Owner-only; requires a reason.
    pub fn suspend_institution(
        &self,
        caller: &AccountId,
        institution: &AccountId,
        reason: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(RegistryError::InvalidInput("suspension reason required".into()));
        }
        let mut record = self
            .institutions
            .get_mut(institution)
            .ok_or_else(|| RegistryError::NotRegistered(institution.clone()))?;
        record.status = InstitutionStatus::Suspended;
        drop(record);

        let now = Utc::now();
        self.events.record(RegistryEvent::InstitutionSuspended {
            institution: institution.clone(),
            reason: reason.clone(),
            at: now,
        });
        tracing::warn!(institution = %institution, reason = %reason, "institution suspended");
        Ok(())
    }

    /// Set an institution's reputation. Owner-only, bounded by
    /// [`MAX_REPUTATION`].
    pub fn update_institution_reputation(
        &self,
        caller: &AccountId,
        institution: &AccountId,
        reputation: u32,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        if reputation > MAX_REPUTATION {
            return Err(RegistryError::OutOfRange(format!(
                "reputation {} exceeds {}",
                reputation, MAX_REPUTATION
            )));
        }
        let mut record = self
            .institutions
            .get_mut(institution)
            .ok_or_else(|| RegistryError::NotRegistered(institution.clone()))?;
        record.reputation = reputation;
        drop(record);

        self.events.record(RegistryEvent::ReputationUpdated {
            institution: institution.clone(),
            reputation,
            at: Utc::now(),
        });
        tracing::info!(institution = %institution, reputation, "reputation updated");
        Ok(())
    }

    // =====================================================================
    // Student ledger
    // =====================================================================

    /// Register the caller as a student with zeroed counters.
    pub fn register_student(
        &self,
        caller: &AccountId,
        name: impl Into<String>,
        email: impl Into<String>,
        student_id: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.students.contains_key(caller) {
            return Err(RegistryError::AlreadyRegistered(caller.clone()));
        }
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidInput("student name required".into()));
        }

        let now = Utc::now();
        self.students.insert(
            caller.clone(),
            Student {
                account: caller.clone(),
                name: name.clone(),
                email: email.into(),
                student_id: student_id.into(),
                certificates_earned: 0,
                skill_badges_earned: 0,
                achievement_points: 0,
                registered_at: now,
            },
        );
        self.events.record(RegistryEvent::StudentRegistered {
            student: caller.clone(),
            name: name.clone(),
            at: now,
        });
        tracing::info!(student = %caller, name = %name, "student registered");
        Ok(())
    }

    // =====================================================================
    // Certificate lifecycle
    // =====================================================================

    /// Issue a certificate to a registered student.
    ///
    /// The caller must be a Verified institution and must attach at least
    /// the configured minimum fee, which the vault retains for later owner
    /// withdrawal. Awards [`CERTIFICATE_POINTS`] to the student.
    #[allow(clippy::too_many_arguments)]
    pub fn issue_certificate(
        &self,
        caller: &AccountId,
        student: &AccountId,
        kind: CertificateKind,
        course_name: impl Into<String>,
        major: impl Into<String>,
        completion_date: DateTime<Utc>,
        grade: impl Into<String>,
        content_hash: Option<String>,
        fee_paid: u128,
    ) -> Result<u64, RegistryError> {
        let course_name = course_name.into();

        let mut issuer = self.institutions.get_mut(caller).ok_or_else(|| {
            RegistryError::Unauthorized(format!("caller {} is not a registered institution", caller))
        })?;
        if issuer.status != InstitutionStatus::Verified {
            return Err(RegistryError::NotVerified(caller.clone()));
        }
        let mut recipient = self
            .students
            .get_mut(student)
            .ok_or_else(|| RegistryError::NotRegistered(student.clone()))?;
        let min = self.config_read().min_certificate_fee;
        if fee_paid < min {
            return Err(RegistryError::InsufficientFee { paid: fee_paid, min });
        }
        let key = CertificateKey::new(
            caller.clone(),
            student.clone(),
            course_name.clone(),
            completion_date,
        );
        if self.certificate_index.contains_key(&key) {
            return Err(RegistryError::DuplicateCertificate);
        }

        // Collect the fee before any record exists; a failed debit aborts
        // the whole operation.
        self.ledger.transfer(caller, &self.vault, fee_paid)?;
        self.treasury_write().collected_fees += fee_paid;

        let id = self.next_certificate_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        self.certificates.insert(
            id,
            Certificate {
                id,
                institution: caller.clone(),
                student: student.clone(),
                kind,
                course_name: course_name.clone(),
                major: major.into(),
                issue_date: now,
                completion_date,
                grade: grade.into(),
                content_hash,
                is_revoked: false,
                revocation_reason: None,
            },
        );
        self.certificate_index.insert(key, id);
        self.student_certificates
            .entry(student.clone())
            .or_default()
            .push(id);
        self.institution_certificates
            .entry(caller.clone())
            .or_default()
            .push(id);
        issuer.certificates_issued += 1;
        recipient.certificates_earned += 1;
        recipient.achievement_points += CERTIFICATE_POINTS;
        drop(issuer);
        drop(recipient);

        self.events.record(RegistryEvent::CertificateIssued {
            certificate: id,
            institution: caller.clone(),
            student: student.clone(),
            course_name: course_name.clone(),
            at: now,
        });
        tracing::info!(
            certificate = id,
            institution = %caller,
            student = %student,
            course = %course_name,
            fee = fee_paid,
            "certificate issued"
        );
        Ok(id)
    }

    /// Revoke a certificate. Only the issuing institution may revoke, a
    /// reason is required, and revocation is irreversible.
    pub fn revoke_certificate(
        &self,
        caller: &AccountId,
        certificate_id: u64,
        reason: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let reason = reason.into();
        let mut cert = self
            .certificates
            .get_mut(&certificate_id)
            .ok_or_else(|| RegistryError::NotFound(format!("certificate {}", certificate_id)))?;
        if &cert.institution != caller {
            return Err(RegistryError::Unauthorized(format!(
                "caller {} did not issue certificate {}",
                caller, certificate_id
            )));
        }
        if reason.trim().is_empty() {
            return Err(RegistryError::InvalidInput("revocation reason required".into()));
        }
        if cert.is_revoked {
            return Err(RegistryError::AlreadyRevoked(certificate_id));
        }
        cert.is_revoked = true;
        cert.revocation_reason = Some(reason.clone());
        drop(cert);

        self.events.record(RegistryEvent::CertificateRevoked {
            certificate: certificate_id,
            institution: caller.clone(),
            reason: reason.clone(),
            at: Utc::now(),
        });
        tracing::warn!(certificate = certificate_id, reason = %reason, "certificate revoked");
        Ok(())
    }

    /// Check a certificate's current validity. Pure read.
    ///
    /// A certificate is valid iff it has not been revoked and its issuing
    /// institution is currently Verified — suspending an institution
    /// invalidates all of its certificates without touching their records.
    pub fn verify_certificate(
        &self,
        certificate_id: u64,
    ) -> Result<(bool, Certificate), RegistryError> {
        let cert = self
            .certificates
            .get(&certificate_id)
            .ok_or_else(|| RegistryError::NotFound(format!("certificate {}", certificate_id)))?
            .clone();
        let issuer_verified = self
            .institutions
            .get(&cert.institution)
            .map(|i| i.status == InstitutionStatus::Verified)
            .unwrap_or(false);
        let valid = !cert.is_revoked && issuer_verified;
        Ok((valid, cert))
    }

    // =====================================================================
    // Skill badge lifecycle
    // =====================================================================

    /// Issue a skill badge to a registered student. The caller must be a
    /// Verified institution. Awards [`SKILL_BADGE_POINTS`] to the holder.
    #[allow(clippy::too_many_arguments)]
    pub fn issue_skill_badge(
        &self,
        caller: &AccountId,
        holder: &AccountId,
        skill_name: impl Into<String>,
        level: SkillLevel,
        description: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
        verification_proof: impl Into<String>,
    ) -> Result<u64, RegistryError> {
        let skill_name = skill_name.into();

        let issuer = self.institutions.get(caller).ok_or_else(|| {
            RegistryError::Unauthorized(format!("caller {} is not a registered institution", caller))
        })?;
        if issuer.status != InstitutionStatus::Verified {
            return Err(RegistryError::NotVerified(caller.clone()));
        }
        drop(issuer);
        let mut recipient = self
            .students
            .get_mut(holder)
            .ok_or_else(|| RegistryError::NotRegistered(holder.clone()))?;

        let id = self.next_badge_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        self.badges.insert(
            id,
            SkillBadge {
                id,
                issuer: caller.clone(),
                holder: holder.clone(),
                skill_name: skill_name.clone(),
                level,
                description: description.into(),
                issued_at: now,
                expires_at,
                verification_proof: verification_proof.into(),
            },
        );
        self.student_badges.entry(holder.clone()).or_default().push(id);
        recipient.skill_badges_earned += 1;
        recipient.achievement_points += SKILL_BADGE_POINTS;
        drop(recipient);

        self.events.record(RegistryEvent::SkillBadgeIssued {
            badge: id,
            issuer: caller.clone(),
            holder: holder.clone(),
            skill_name: skill_name.clone(),
            level,
            at: now,
        });
        tracing::info!(
            badge = id,
            issuer = %caller,
            holder = %holder,
            skill = %skill_name,
            level = %level,
            "skill badge issued"
        );
        Ok(id)
    }

    /// Whether a badge is valid right now. Pure read, derived from expiry.
    pub fn is_skill_badge_valid(&self, badge_id: u64) -> Result<bool, RegistryError> {
        self.is_skill_badge_valid_at(badge_id, Utc::now())
    }

    /// Whether a badge is valid at the given instant.
    pub fn is_skill_badge_valid_at(
        &self,
        badge_id: u64,
        at: DateTime<Utc>,
    ) -> Result<bool, RegistryError> {
        let badge = self
            .badges
            .get(&badge_id)
            .ok_or_else(|| RegistryError::NotFound(format!("skill badge {}", badge_id)))?;
        Ok(badge.is_valid_at(at))
    }

    // =====================================================================
    // Achievement lifecycle
    // =====================================================================

    /// Create a claimable achievement. Owner-only; the funded amount must
    /// cover the promised reward in full and is escrowed into the shared
    /// reward pool.
    pub fn create_achievement(
        &self,
        caller: &AccountId,
        name: impl Into<String>,
        description: impl Into<String>,
        points_required: u64,
        reward_amount: u128,
        funded: u128,
    ) -> Result<u64, RegistryError> {
        self.ensure_owner(caller)?;
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidInput("achievement name required".into()));
        }
        let min_reward = self.config_read().min_reward;
        if reward_amount < min_reward {
            return Err(RegistryError::OutOfRange(format!(
                "reward {} below configured minimum {}",
                reward_amount, min_reward
            )));
        }
        if funded < reward_amount {
            return Err(RegistryError::InsufficientFunding {
                provided: funded,
                required: reward_amount,
            });
        }

        self.ledger.transfer(caller, &self.vault, funded)?;
        self.treasury_write().reward_pool += funded;

        let id = self.next_achievement_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        self.achievements.insert(
            id,
            Achievement {
                id,
                name: name.clone(),
                description: description.into(),
                points_required,
                reward_amount,
                is_active: true,
                times_completed: 0,
                created_at: now,
            },
        );
        self.events.record(RegistryEvent::AchievementCreated {
            achievement: id,
            name: name.clone(),
            points_required,
            reward_amount,
            at: now,
        });
        tracing::info!(
            achievement = id,
            name = %name,
            points_required,
            reward = reward_amount,
            funded,
            "achievement created"
        );
        Ok(id)
    }

    /// Claim an achievement reward. The caller must be a registered
    /// student holding enough achievement points, and each (achievement,
    /// student) pair pays out at most once.
    ///
    /// Returns the reward amount transferred. All bookkeeping is recorded
    /// before the value moves; the payout is the final effect.
    pub fn claim_achievement(
        &self,
        caller: &AccountId,
        achievement_id: u64,
    ) -> Result<u128, RegistryError> {
        let student = self
            .students
            .get(caller)
            .ok_or_else(|| RegistryError::NotRegistered(caller.clone()))?;
        let mut achievement = self
            .achievements
            .get_mut(&achievement_id)
            .ok_or_else(|| RegistryError::NotFound(format!("achievement {}", achievement_id)))?;
        if !achievement.is_active {
            return Err(RegistryError::InactiveAchievement(achievement_id));
        }
        if student.achievement_points < achievement.points_required {
            return Err(RegistryError::InsufficientPoints {
                have: student.achievement_points,
                need: achievement.points_required,
            });
        }
        drop(student);
        let claim_key = (achievement_id, caller.clone());
        if self.completed.contains_key(&claim_key) {
            return Err(RegistryError::AlreadyClaimed {
                achievement: achievement_id,
                student: caller.clone(),
            });
        }
        let reward = achievement.reward_amount;
        {
            let mut treasury = self.treasury_write();
            if treasury.reward_pool < reward {
                return Err(RegistryError::InsufficientFunding {
                    provided: treasury.reward_pool,
                    required: reward,
                });
            }
            treasury.reward_pool -= reward;
        }

        let now = Utc::now();
        self.completed.insert(claim_key, now);
        achievement.times_completed += 1;
        drop(achievement);

        self.events.record(RegistryEvent::AchievementCompleted {
            achievement: achievement_id,
            student: caller.clone(),
            reward_amount: reward,
            at: now,
        });
        tracing::info!(
            achievement = achievement_id,
            student = %caller,
            reward,
            "achievement completed"
        );

        // Pay out only after every record is in place.
        self.ledger.transfer(&self.vault, caller, reward)?;
        Ok(reward)
    }

    /// Whether a student has already claimed an achievement. Pure read.
    pub fn has_completed_achievement(&self, student: &AccountId, achievement_id: u64) -> bool {
        self.completed
            .contains_key(&(achievement_id, student.clone()))
    }

    // =====================================================================
    // Admin / fee configuration
    // =====================================================================

    /// Update the platform fee. Owner-only, capped at 10%.
    pub fn update_platform_fee(&self, caller: &AccountId, fee_bps: u32) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        if fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(RegistryError::OutOfRange(format!(
                "platform fee {} exceeds {} basis points",
                fee_bps, MAX_PLATFORM_FEE_BPS
            )));
        }
        self.config_write().platform_fee_bps = fee_bps;
        self.events.record(RegistryEvent::PlatformFeeUpdated {
            fee_bps,
            at: Utc::now(),
        });
        tracing::info!(fee_bps, "platform fee updated");
        Ok(())
    }

    /// Update the minimum achievement reward. Owner-only.
    pub fn update_min_reward(&self, caller: &AccountId, min_reward: u128) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;
        self.config_write().min_reward = min_reward;
        self.events.record(RegistryEvent::MinRewardUpdated {
            min_reward,
            at: Utc::now(),
        });
        tracing::info!(min_reward, "minimum reward updated");
        Ok(())
    }

    /// Withdraw collected certificate fees to the owner. Owner-only.
    ///
    /// Only the fee share of the vault is paid out; value escrowed for
    /// unclaimed achievement rewards stays put. Returns the amount moved.
    pub fn withdraw_fees(&self, caller: &AccountId) -> Result<u128, RegistryError> {
        self.ensure_owner(caller)?;
        let amount = {
            let mut treasury = self.treasury_write();
            std::mem::take(&mut treasury.collected_fees)
        };
        if amount > 0 {
            self.ledger.transfer(&self.vault, &self.owner, amount)?;
        }
        tracing::info!(amount, "fees withdrawn");
        Ok(amount)
    }

    /// Top up the shared achievement reward pool. Open to anyone.
    pub fn fund_achievement_rewards(
        &self,
        caller: &AccountId,
        amount: u128,
    ) -> Result<(), RegistryError> {
        self.ledger.transfer(caller, &self.vault, amount)?;
        self.treasury_write().reward_pool += amount;
        tracing::info!(from = %caller, amount, "achievement rewards funded");
        Ok(())
    }

    // =====================================================================
    // Read surface
    // =====================================================================

    /// The administrative owner identity.
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// The vault account holding fees and reward escrow.
    pub fn vault_account(&self) -> &AccountId {
        &self.vault
    }

    /// Current vault balance on the native ledger.
    pub fn vault_balance(&self) -> u128 {
        self.ledger.balance_of(&self.vault)
    }

    /// Fee share of the vault, withdrawable by the owner.
    pub fn collected_fees(&self) -> u128 {
        self.treasury_read().collected_fees
    }

    /// Escrow share of the vault, earmarked for achievement rewards.
    pub fn reward_pool(&self) -> u128 {
        self.treasury_read().reward_pool
    }

    /// Current platform fee in basis points.
    pub fn platform_fee_bps(&self) -> u32 {
        self.config_read().platform_fee_bps
    }

    /// Current minimum achievement reward.
    pub fn min_reward(&self) -> u128 {
        self.config_read().min_reward
    }

    /// Current minimum certificate fee.
    pub fn min_certificate_fee(&self) -> u128 {
        self.config_read().min_certificate_fee
    }

    /// Look up an institution record.
    pub fn get_institution(&self, account: &AccountId) -> Option<Institution> {
        self.institutions.get(account).map(|r| r.clone())
    }

    /// Look up a student record.
    pub fn get_student(&self, account: &AccountId) -> Option<Student> {
        self.students.get(account).map(|r| r.clone())
    }

    /// Look up a certificate by id.
    pub fn get_certificate(&self, certificate_id: u64) -> Option<Certificate> {
        self.certificates.get(&certificate_id).map(|r| r.clone())
    }

    /// Look up a skill badge by id.
    pub fn get_skill_badge(&self, badge_id: u64) -> Option<SkillBadge> {
        self.badges.get(&badge_id).map(|r| r.clone())
    }

    /// Look up an achievement by id.
    pub fn get_achievement(&self, achievement_id: u64) -> Option<Achievement> {
        self.achievements.get(&achievement_id).map(|r| r.clone())
    }

    /// Certificate ids earned by a student, in issuance order.
    pub fn student_certificates(&self, account: &AccountId) -> Vec<u64> {
        self.student_certificates
            .get(account)
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    /// Skill badge ids held by a student, in issuance order.
    pub fn student_skill_badges(&self, account: &AccountId) -> Vec<u64> {
        self.student_badges
            .get(account)
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    /// Certificate ids issued by an institution, in issuance order.
    pub fn institution_certificates(&self, account: &AccountId) -> Vec<u64> {
        self.institution_certificates
            .get(account)
            .map(|ids| ids.clone())
            .unwrap_or_default()
    }

    /// Aggregate counters and fee settings.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_institutions: self.institutions.len() as u64,
            total_students: self.students.len() as u64,
            total_certificates: self.certificates.len() as u64,
            total_skill_badges: self.badges.len() as u64,
            total_achievements: self.achievements.len() as u64,
            platform_fee_bps: self.platform_fee_bps(),
        }
    }

    /// Snapshot of all notifications emitted so far.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.events.snapshot()
    }

    // =====================================================================
    // Internals
    // =====================================================================

    fn ensure_owner(&self, caller: &AccountId) -> Result<(), RegistryError> {
        if caller != &self.owner {
            return Err(RegistryError::Unauthorized(format!(
                "caller {} is not the registry owner",
                caller
            )));
        }
        Ok(())
    }

    fn config_read(&self) -> RwLockReadGuard<'_, RegistryConfig> {
        self.config.read().expect("config lock poisoned")
    }

    fn config_write(&self) -> RwLockWriteGuard<'_, RegistryConfig> {
        self.config.write().expect("config lock poisoned")
    }

    fn treasury_read(&self) -> RwLockReadGuard<'_, Treasury> {
        self.treasury.read().expect("treasury lock poisoned")
    }

    fn treasury_write(&self) -> RwLockWriteGuard<'_, Treasury> {
        self.treasury.write().expect("treasury lock poisoned")
    }
}
