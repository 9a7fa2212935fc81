//! Meritus Registry — Institution, student, certificate, skill badge, and
//! achievement ledgers behind a single atomic operation surface.
//!
//! The [`Registry`] is the trust ledger's state machine: accredited
//! institutions issue verifiable certificates and skill badges, students
//! accumulate achievement points, and escrowed rewards pay out on milestone
//! claims. Value settles on a [`NativeLedger`] standing in for the host
//! execution environment's transferable native unit.

pub mod achievement;
pub mod badge;
pub mod certificate;
pub mod error;
pub mod events;
pub mod institution;
pub mod ledger;
pub mod registry;
pub mod student;

pub use achievement::Achievement;
pub use badge::{SkillBadge, SkillLevel};
pub use certificate::{Certificate, CertificateKey, CertificateKind};
pub use error::RegistryError;
pub use events::{EventLog, RegistryEvent};
pub use institution::{Institution, InstitutionStatus, DEFAULT_REPUTATION, MAX_REPUTATION};
pub use ledger::{LedgerEntry, LedgerError, NativeLedger};
pub use registry::{Registry, RegistryStats, CERTIFICATE_POINTS, SKILL_BADGE_POINTS};
pub use student::Student;
