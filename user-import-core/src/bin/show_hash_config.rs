use serde_json::Value;
use user_import_core::{HashSettings, UserImportHash};

fn main() -> anyhow::Result<()> {
    user_import_core::init();

    let settings = HashSettings::from_env()?;
    println!("User Import Hash Configuration:\n");

    let hash = match settings.build()? {
        Some(hash) => hash,
        None => {
            println!("  Algorithm: (not set)");
            return Ok(());
        }
    };

    println!("  Algorithm: {}", hash.hash_name());
    let options = hash.options()?;
    for (name, value) in options.iter() {
        let shown = match (name.as_str(), value) {
            ("signerKey", _) => "<redacted>".to_string(),
            (_, Value::String(s)) if s.is_empty() => "(empty)".to_string(),
            (_, Value::String(s)) => s.clone(),
            (_, other) => other.to_string(),
        };
        println!("  {}: {}", name, shown);
    }
    Ok(())
}
