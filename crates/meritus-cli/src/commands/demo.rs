//! `meritus demo` — Scripted end-to-end exercise of the registry.

use clap::Args;
use std::sync::Arc;

use meritus_core::{AccountId, RegistryConfig};
use meritus_registry::{CertificateKind, NativeLedger, Registry, SkillLevel};

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Fee attached to each certificate issuance, in the smallest native
    /// unit.
    #[arg(long, default_value_t = 1_000)]
    pub fee: u128,

    /// Reward escrowed for the demo achievement.
    #[arg(long, default_value_t = 100_000)]
    pub reward: u128,

    /// Achievement points required before the reward can be claimed.
    #[arg(long, default_value_t = 100)]
    pub points_required: u64,

    /// Dump the emitted event log as JSON at the end.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DemoArgs) -> anyhow::Result<()> {
    let ledger = Arc::new(NativeLedger::new());
    let owner = AccountId::new("owner")?;
    let university = AccountId::new("blockchain-university")?;
    let student = AccountId::new("alice")?;

    // The host environment would hold real balances; seed working capital.
    ledger.deposit(&owner, args.reward * 10)?;
    ledger.deposit(&university, args.fee * 10)?;

    let registry = Registry::new(owner.clone(), RegistryConfig::default(), Arc::clone(&ledger))?;

    println!("Meritus — credential registry walkthrough\n");
    println!("Accounts:");
    println!("  Owner:       {}", owner);
    println!("  Institution: {}", university);
    println!("  Student:     {}\n", student);

    println!("Step 1: Register institution");
    registry.register_institution(
        &university,
        "Blockchain University",
        "REG-BCU-2024",
        "Global",
        "https://blockchain-u.edu",
    )?;
    let record = registry
        .get_institution(&university)
        .expect("institution just registered");
    println!("  Name:   {}", record.name);
    println!("  Status: {}\n", record.status);

    println!("Step 2: Verify institution (owner only)");
    registry.verify_institution(&owner, &university)?;
    let record = registry
        .get_institution(&university)
        .expect("institution just registered");
    println!("  Status: {}\n", record.status);

    println!("Step 3: Register student");
    registry.register_student(&student, "Alice Johnson", "alice@example.com", "STU-001")?;
    println!("  Registered {}\n", student);

    println!("Step 4: Create achievement (reward escrowed up front)");
    let achievement_id = registry.create_achievement(
        &owner,
        "Early Achiever",
        "Reach the first points milestone",
        args.points_required,
        args.reward,
        args.reward,
    )?;
    println!("  Achievement #{achievement_id}, reward {}\n", args.reward);

    println!("Step 5: Issue certificate (fee {})", args.fee);
    let certificate_id = registry.issue_certificate(
        &university,
        &student,
        CertificateKind::Degree,
        "Computer Science",
        "Bachelor of Science",
        chrono::Utc::now(),
        "A",
        Some("QmCertificateHash".into()),
        args.fee,
    )?;
    let (valid, certificate) = registry.verify_certificate(certificate_id)?;
    println!("  Certificate #{certificate_id}: {}", certificate.course_name);
    println!("  Currently valid: {valid}\n");

    println!("Step 6: Issue skill badge");
    let badge_id = registry.issue_skill_badge(
        &university,
        &student,
        "Smart Contract Development",
        SkillLevel::Advanced,
        "Proficient in on-ledger state machines",
        None,
        "CERT-ABC-123",
    )?;
    println!(
        "  Badge #{badge_id} valid: {}\n",
        registry.is_skill_badge_valid(badge_id)?
    );

    let points = registry
        .get_student(&student)
        .expect("student just registered")
        .achievement_points;
    println!("Step 7: Claim achievement ({points} points accumulated)");
    let balance_before = ledger.balance_of(&student);
    let paid = registry.claim_achievement(&student, achievement_id)?;
    println!("  Reward paid: {paid}");
    println!(
        "  Student balance: {} -> {}\n",
        balance_before,
        ledger.balance_of(&student)
    );

    println!("Step 8: Withdraw platform fees (owner only)");
    let withdrawn = registry.withdraw_fees(&owner)?;
    println!("  Withdrawn: {withdrawn}");
    println!("  Reward escrow untouched: {}\n", registry.reward_pool());

    let stats = registry.stats();
    println!("Final stats:");
    println!("  Institutions: {}", stats.total_institutions);
    println!("  Students:     {}", stats.total_students);
    println!("  Certificates: {}", stats.total_certificates);
    println!("  Skill badges: {}", stats.total_skill_badges);
    println!("  Achievements: {}", stats.total_achievements);
    println!("  Platform fee: {} bps", stats.platform_fee_bps);

    if args.json {
        println!("\nEvent log:");
        println!("{}", serde_json::to_string_pretty(&registry.events())?);
    }

    Ok(())
}
