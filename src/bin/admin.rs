//! GroundPass admin CLI.
//!
//! Read-mostly admin tool over the same record store the server uses.
//! Commands print their result and return; a missing record is reported,
//! not a process failure.

use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use groundpass::adapters::export::{write_bookings_csv, write_members_csv};
use groundpass::adapters::store::store_from_config;
use groundpass::application::{BookingService, MembershipService, ReportingService};
use groundpass::config::AppConfig;
use groundpass::domain::foundation::DomainError;

#[derive(Parser)]
#[command(name = "groundpass-admin")]
#[command(about = "GroundPass membership administration CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all members
    ListMembers,
    /// List all bookings
    ListBookings,
    /// Show system statistics
    Stats,
    /// Show details for one member
    MemberInfo { email: String },
    /// Show bookings for one member
    MemberBookings { email: String },
    /// Remove a member (bookings are left in place)
    RemoveMember { email: String },
    /// Export members to CSV
    ExportMembers {
        #[arg(long, default_value = "members-export.csv")]
        out: PathBuf,
    },
    /// Export bookings to CSV
    ExportBookings {
        #[arg(long, default_value = "bookings-export.csv")]
        out: PathBuf,
    },
    /// Clear all data (cannot be undone)
    ClearData {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    let store = store_from_config(&config.storage)?;

    let reporting = ReportingService::new(store.clone());
    let memberships = MembershipService::new(store.clone());
    let bookings = BookingService::new(store);

    match cli.command {
        Commands::ListMembers => {
            let members = reporting.list_members().await?;
            if members.is_empty() {
                println!("No members found.");
                return Ok(());
            }
            println!("\nMembers:");
            println!("{}", "-".repeat(80));
            for (i, m) in members.iter().enumerate() {
                println!("{}. {} ({})", i + 1, m.full_name, m.email);
                println!("   Plan: {} | Status: {}", m.plan, m.status);
                println!(
                    "   Bookings: {} | Savings: {:.2}",
                    m.total_bookings, m.total_savings
                );
            }
            println!("{}", "-".repeat(80));
            println!("Total members: {}", members.len());
        }

        Commands::ListBookings => {
            let bookings = reporting.list_all_bookings().await?;
            if bookings.is_empty() {
                println!("No bookings found.");
                return Ok(());
            }
            println!("\nBookings:");
            println!("{}", "-".repeat(80));
            for (i, b) in bookings.iter().enumerate() {
                println!("{}. {} - {}", i + 1, b.ground_name, b.booking_date);
                println!("   Email: {} | Time: {}", b.email, b.time_slot);
                println!(
                    "   Price: {:.2} | Discount: {:.2} | Final: {:.2}",
                    b.original_price, b.discount, b.final_price
                );
            }
            println!("{}", "-".repeat(80));
            println!("Total bookings: {}", bookings.len());
        }

        Commands::Stats => {
            let stats = reporting.stats().await?;
            println!("\nSystem statistics:");
            println!("{}", "-".repeat(50));
            println!("Total Members: {}", stats.total_members);
            println!("Active Members: {}", stats.active_members);
            for (plan, count) in &stats.plan_breakdown {
                println!("  {} plans: {}", plan, count);
            }
            println!("Total Bookings: {}", stats.total_bookings);
            println!("Total Member Savings: {:.2}", stats.total_revenue);
            println!(
                "Avg Bookings/Member: {:.1}",
                stats.average_bookings_per_member
            );
            println!("{}", "-".repeat(50));
        }

        Commands::MemberInfo { email } => match memberships.get(&email).await {
            Ok(m) => {
                println!("\nMember information:");
                println!("{}", "-".repeat(50));
                println!("ID: {}", m.id);
                println!("Name: {}", m.full_name);
                println!("Email: {}", m.email);
                println!("Phone: {}", m.phone);
                println!("Plan: {}", m.plan);
                println!("Status: {}", m.status);
                println!("Discount: {}%", m.discount_percentage);
                println!("Joined: {}", m.created_at);
                println!("Renewal Date: {}", m.renewal_date);
                println!("Total Bookings: {}", m.total_bookings);
                println!("Total Savings: {:.2}", m.total_savings);
                println!("{}", "-".repeat(50));
            }
            Err(DomainError::NotFound(_)) => println!("Member not found: {}", email),
            Err(e) => return Err(e.into()),
        },

        Commands::MemberBookings { email } => {
            let member_bookings = bookings.list_bookings(&email).await?;
            if member_bookings.is_empty() {
                println!("No bookings found for: {}", email);
                return Ok(());
            }
            println!("\nBookings for {}:", email);
            println!("{}", "-".repeat(80));
            for (i, b) in member_bookings.iter().enumerate() {
                println!("{}. {} - {}", i + 1, b.ground_name, b.booking_date);
                println!("   Time: {} | Final price: {:.2}", b.time_slot, b.final_price);
            }
            println!("{}", "-".repeat(80));
            println!("Total: {} bookings", member_bookings.len());
        }

        Commands::RemoveMember { email } => match reporting.remove_member(&email).await {
            Ok(()) => println!("Member removed: {}", email),
            Err(DomainError::NotFound(_)) => println!("Member not found: {}", email),
            Err(e) => return Err(e.into()),
        },

        Commands::ExportMembers { out } => {
            let members = reporting.list_members().await?;
            write_members_csv(File::create(&out)?, &members)?;
            println!("Exported {} members to: {}", members.len(), out.display());
        }

        Commands::ExportBookings { out } => {
            let all = reporting.list_all_bookings().await?;
            write_bookings_csv(File::create(&out)?, &all)?;
            println!("Exported {} bookings to: {}", all.len(), out.display());
        }

        Commands::ClearData { yes } => {
            if !yes {
                println!("This will delete all data!");
                println!("Run with --yes to confirm: clear-data --yes");
                return Ok(());
            }
            reporting.clear_all().await?;
            println!("All data cleared");
        }
    }

    Ok(())
}
