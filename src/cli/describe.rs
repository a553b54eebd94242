use anyhow::{Context, Result};

use ramanplate::sample::SampleResolver;

use super::Config;

/// Show the identity of spectrum files
pub fn run(files: Vec<String>, config: &Config, json: bool) -> Result<()> {
    let catalog = config.build_catalog()?;
    let resolver = SampleResolver::new(&catalog).with_label_style(config.label_style());

    let identities = files
        .iter()
        .map(|file| {
            resolver
                .resolve(file)
                .with_context(|| format!("Failed to describe {}", file))
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&identities)?);
    } else {
        for identity in &identities {
            println!("{}: {}", identity.file(), identity);
        }
    }
    Ok(())
}
