use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use meritus_core::AccountId;

/// Kinds of academic credentials the registry can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateKind {
    Diploma,
    Degree,
    Course,
    Training,
    Workshop,
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diploma => write!(f, "Diploma"),
            Self::Degree => write!(f, "Degree"),
            Self::Course => write!(f, "Course"),
            Self::Training => write!(f, "Training"),
            Self::Workshop => write!(f, "Workshop"),
        }
    }
}

/// An issued academic credential.
///
/// Immutable after issuance except for the one-way revocation flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    /// Sequential certificate id, starting at 1.
    pub id: u64,
    /// Issuing institution.
    pub institution: AccountId,
    /// Student the credential was awarded to.
    pub student: AccountId,
    /// Kind of credential.
    pub kind: CertificateKind,
    /// Course or program name.
    pub course_name: String,
    /// Major or specialization.
    pub major: String,
    /// When the certificate was issued by the registry.
    pub issue_date: DateTime<Utc>,
    /// When the student completed the course.
    pub completion_date: DateTime<Utc>,
    /// Awarded grade.
    pub grade: String,
    /// Optional content-addressed reference to the full document.
    pub content_hash: Option<String>,
    /// Whether the certificate has been revoked. One-way.
    pub is_revoked: bool,
    /// Reason given at revocation time.
    pub revocation_reason: Option<String>,
}

/// Uniqueness fingerprint for duplicate-award detection.
///
/// No two certificates may share the same (institution, student, course,
/// completion date) tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertificateKey {
    institution: AccountId,
    student: AccountId,
    course_name: String,
    completion_date: DateTime<Utc>,
}

impl CertificateKey {
    /// Build the fingerprint for a prospective or existing award.
    pub fn new(
        institution: AccountId,
        student: AccountId,
        course_name: impl Into<String>,
        completion_date: DateTime<Utc>,
    ) -> Self {
        Self {
            institution,
            student,
            course_name: course_name.into(),
            completion_date,
        }
    }
}

impl Certificate {
    /// The duplicate-detection fingerprint of this certificate.
    pub fn fingerprint(&self) -> CertificateKey {
        CertificateKey::new(
            self.institution.clone(),
            self.student.clone(),
            self.course_name.clone(),
            self.completion_date,
        )
    }
}
