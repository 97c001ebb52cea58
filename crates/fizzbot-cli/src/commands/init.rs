//! The `fizzbot init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("fizzbot.toml").exists() {
        println!("fizzbot.toml already exists, skipping.");
    } else {
        std::fs::write("fizzbot.toml", SAMPLE_CONFIG)?;
        println!("Created fizzbot.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit fizzbot.toml if you run your own quiz server");
    println!("  2. Run: fizzbot play");
    println!("  3. Or answer yourself: fizzbot play --interactive");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# fizzbot configuration

domain = "https://api.noopschallenge.com"
start_path = "/fizzbot"

# "auto" solves numeric questions, "interactive" reads answers from stdin
mode = "auto"

# Give up after this many rejected answers to one question
# max_attempts = 5
"#;
