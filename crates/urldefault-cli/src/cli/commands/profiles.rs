//! `urldefault profiles` – list configured defaults profiles.

use anyhow::Result;
use urldefault_core::config::UrlDefaultConfig;

pub fn run_profiles(cfg: &UrlDefaultConfig) -> Result<()> {
    if let Some(defaults) = &cfg.defaults {
        println!("{:<16} {}", "(default)", defaults);
    }
    if cfg.profiles.is_empty() {
        if cfg.defaults.is_none() {
            println!("No profiles configured.");
        }
        return Ok(());
    }
    for (name, url) in &cfg.profiles {
        println!("{:<16} {}", name, url);
    }
    Ok(())
}
