//! Core commands (init) and shared utilities

use std::path::Path;

use anyhow::{bail, Result};

use nestegg_core::db::Database;

/// Open the database, honoring the encryption flag
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path = db_path.to_string_lossy();
    let db = if no_encrypt {
        Database::new_unencrypted(&path)?
    } else {
        Database::new(&path)?
    };
    Ok(db)
}

/// Reject negative scalars before they reach the planner
///
/// The calculation core is only defined over non-negative inputs; this
/// boundary check is where that contract is enforced.
pub fn require_non_negative(name: &str, value: f64) -> Result<()> {
    if value < 0.0 || value.is_nan() {
        bail!("{} must be a non-negative number (got {})", name, value);
    }
    Ok(())
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    let db = open_db(db_path, no_encrypt)?;

    println!("✅ Database initialized: {}", db.path());
    if no_encrypt {
        println!("   ⚠️  Encryption disabled (--no-encrypt)");
    } else {
        println!("   🔒 Encrypted with SQLCipher");
    }
    println!();
    println!("Run a first simulation with:");
    println!("  nestegg simulate --expense 2500 --goal 100000 --horizon 10 --rate 7");

    Ok(())
}
