//! Interactive setup: collect credential and workspace ids

use crate::error::Result;
use crate::infrastructure::{Config, StoredConfig};
use dialoguer::Input;

/// Prompt for the API key and the optional workspace ids, then write the
/// config file. Makes no remote calls; nothing is verified here.
pub fn run() -> Result<()> {
    println!("ntn setup — connect your Notion workspace\n");
    println!("Get your API key: https://www.notion.so/my-integrations");
    println!("Create an Internal Integration and copy the token.\n");

    let api_key: String = Input::new()
        .with_prompt("Notion API key (ntn_...)")
        .allow_empty(true)
        .interact_text()?;
    let api_key = api_key.trim().to_string();
    if api_key.is_empty() {
        println!("No key entered. Aborting.");
        return Ok(());
    }

    let mut stored = StoredConfig {
        api_key: Some(api_key),
        ..StoredConfig::default()
    };

    let brain_dump_id: String = Input::new()
        .with_prompt("\nBrain dump parent page ID (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;
    let brain_dump_id = brain_dump_id.trim();
    if !brain_dump_id.is_empty() {
        stored.brain_dump_page_id = Some(brain_dump_id.to_string());
    }

    let posts_db_id: String = Input::new()
        .with_prompt("Posts database ID (Enter to skip)")
        .allow_empty(true)
        .interact_text()?;
    let posts_db_id = posts_db_id.trim();
    if !posts_db_id.is_empty() {
        stored
            .databases
            .insert("posts".to_string(), posts_db_id.to_string());
    }

    let path = stored.save_to_dir(&Config::config_dir())?;
    println!("\nSaved to {}", path.display());
    println!("Run 'ntn dump \"test\"' to verify.");
    Ok(())
}
