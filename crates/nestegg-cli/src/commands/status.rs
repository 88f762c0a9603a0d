//! Status and reset command implementations

use std::path::Path;

use anyhow::{Context, Result};

use nestegg_core::advisor::{AdvisorBackend, AdvisorClient};

use super::open_db;

pub fn cmd_status(db_path: &Path, no_encrypt: bool) -> Result<()> {
    use nestegg_core::db::DB_KEY_ENV;
    use std::fs;

    println!();
    println!("📊 Nestegg Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Database: {}", db_path.display());

    if db_path.exists() {
        if let Ok(metadata) = fs::metadata(db_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (database not initialized)");
    }

    let has_key = std::env::var(DB_KEY_ENV).is_ok();
    if no_encrypt {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    } else if has_key {
        println!("   🔒 Encryption: ENABLED ({}=***)", DB_KEY_ENV);
    } else {
        println!("   ❌ Encryption: REQUIRED but {} not set", DB_KEY_ENV);
    }

    if db_path.exists() {
        match open_db(db_path, no_encrypt) {
            Ok(db) => {
                if let Ok(count) = db.count_simulations() {
                    println!();
                    println!("   Simulations: {}", count);
                }
            }
            Err(e) => {
                println!();
                println!("   ❌ Error opening database: {}", e);
                if !no_encrypt && !has_key {
                    println!("      Set {} or use --no-encrypt", DB_KEY_ENV);
                } else if has_key {
                    println!("      (Check if {} is correct)", DB_KEY_ENV);
                }
            }
        }
    }

    println!();
    match AdvisorClient::from_env() {
        Some(client) => println!(
            "   Advisor: {} (model: {})",
            client.host(),
            client.model()
        ),
        None => println!("   Advisor: not configured (set OLLAMA_HOST to enable advice)"),
    }
    println!();

    Ok(())
}

/// Reset the database (soft or hard)
pub fn cmd_reset(db_path: &Path, soft: bool, yes: bool, no_encrypt: bool) -> Result<()> {
    use std::fs;
    use std::io::{self, Write};

    if soft {
        if !db_path.exists() {
            anyhow::bail!("Database not found: {}", db_path.display());
        }

        if !yes {
            print!("⚠️  This will delete all stored simulations.\n\n");
            print!("Are you sure? [y/N] ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        }

        let db = open_db(db_path, no_encrypt)?;
        db.clear_simulations()?;

        println!("✅ Simulation history cleared.");
    } else {
        if !yes {
            print!("⚠️  This will DELETE the entire database and start fresh.\n\n");
            print!("Are you sure? [y/N] ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled.");
                return Ok(());
            }
        }

        if db_path.exists() {
            fs::remove_file(db_path)
                .with_context(|| format!("Failed to delete database: {}", db_path.display()))?;
            // Also remove WAL and journal sidecar files if present
            let _ = fs::remove_file(db_path.with_extension("db-wal"));
            let _ = fs::remove_file(db_path.with_extension("db-shm"));
            let _ = fs::remove_file(db_path.with_extension("db-journal"));
        }

        super::cmd_init(db_path, no_encrypt)?;

        println!("\n✅ Database hard reset complete.");
    }

    Ok(())
}
