use std::path::Path;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let state = crate::world::demo_world().map_err(|e| e.to_string())?;
    let content = serde_json::to_string_pretty(&state)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
