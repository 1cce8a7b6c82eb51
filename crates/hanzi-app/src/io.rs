use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use hanzi_core::preprocess::strip_comment_lines;

/// Written on first run so there is something to convert
pub const SAMPLE_TEXT: &str = "你好！我叫小明。我是学生。\n我喜欢学习中文，因为中文很有意思。\n今天天气很好，我们一起去公园吧。";

const TRANSLATION_HEADER: &str =
    "# Zet hier de Nederlandse vertaling van de hele tekst. Regels die met # beginnen worden genegeerd.\n";

/// Create the input file with a sample text if it does not exist yet.
/// Returns true when the file was created.
pub fn ensure_input(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    create_parent(path)?;
    fs::write(path, SAMPLE_TEXT)
        .with_context(|| format!("Failed to create sample input {}", path.display()))?;
    tracing::info!("Created sample input at {}", path.display());
    Ok(true)
}

pub fn read_input(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read input {}", path.display()))
}

/// Read the user's full translation. A missing file is created with a
/// comment header and yields `None`, as does a file with only comments.
pub fn read_translation(path: &Path) -> anyhow::Result<Option<String>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            create_parent(path)?;
            fs::write(path, TRANSLATION_HEADER).with_context(|| {
                format!("Failed to create translation file {}", path.display())
            })?;
            tracing::info!("Created empty translation file at {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let text = strip_comment_lines(&data);
    Ok((!text.is_empty()).then_some(text))
}

pub fn write_output(path: &Path, html: &str) -> anyhow::Result<()> {
    create_parent(path)?;
    fs::write(path, html).with_context(|| format!("Failed to write report {}", path.display()))
}

fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
