//! Classify feedback text from arguments or stdin

use super::helpers::urgency_icon;
use super::OutputFormat;
use pulse_core::{analyze, error::Result, scan};
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Handle analyze command
pub async fn handle(text: Vec<String>, format: OutputFormat, explain: bool) -> Result<()> {
    let input = if text.is_empty() {
        debug!("No text arguments, reading feedback from stdin");
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        text.join(" ")
    };

    let analysis = analyze(&input);
    let matches = explain.then(|| scan(&input));

    match format {
        OutputFormat::Json => {
            let value = match &matches {
                Some(m) => serde_json::json!({ "analysis": analysis, "matches": m }),
                None => serde_json::to_value(&analysis)?,
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {} ({}, score {:+.2})",
                urgency_icon(analysis.urgency),
                analysis.urgency.as_str().to_uppercase(),
                analysis.label,
                analysis.score
            );
            println!("  {}", analysis.recommendation);

            if let Some(m) = matches {
                println!();
                println!("  Lexicon hits:");
                if m.hits.is_empty() {
                    println!("    (none)");
                }
                for (word, count) in &m.hits {
                    println!("    {:<14} x{}", word, count);
                }
                if !m.urgent_words.is_empty() {
                    println!("  Urgent words: {}", m.urgent_words.join(", "));
                }
                println!("  Raw score: {:+.4}", m.raw_score);
            }
        }
    }

    Ok(())
}
