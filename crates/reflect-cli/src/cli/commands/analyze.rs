//! One-shot analysis command.

use std::io::{self, Read};

use anyhow::{Context, Result};
use reflect_core::analysis::{AnalysisClient, AnalysisResult};
use reflect_core::reflection::ReflectionText;
use reflect_core::theme::theme_for;

/// Reads the reflection from `--text`, or from stdin when it is `-` or absent.
fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read reflection from stdin")?;
            Ok(buf)
        }
    }
}

/// Plain-text rendering of a result.
pub fn format_result(result: &AnalysisResult) -> String {
    let theme = theme_for(&result.emotion);
    let mut out = format!(
        "{} {}\n{}% confidence\n\nAnalysis\n{}\n",
        theme.emoji,
        result.emotion,
        result.confidence_percent(),
        result.analysis
    );
    if !result.suggestions.is_empty() {
        out.push_str("\nSuggestions for You\n");
        for (i, suggestion) in result.suggestions.iter().enumerate() {
            out.push_str(&format!("{}. {suggestion}\n", i + 1));
        }
    }
    out
}

pub async fn run(
    client: &AnalysisClient,
    text: Option<String>,
    max_chars: usize,
    json: bool,
) -> Result<()> {
    let raw = read_input(text)?;
    let reflection = ReflectionText::parse(&raw, max_chars)?;
    if reflection.char_count() < raw.trim().chars().count() {
        tracing::warn!(max_chars, "reflection truncated at character limit");
    }
    let result = client.analyze(&reflection).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serialize result")?
        );
    } else {
        print!("{}", format_result(&result));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_lists_suggestions_in_order() {
        let result = AnalysisResult {
            emotion: "Calm".to_string(),
            confidence: 0.5,
            analysis: "Steady.".to_string(),
            suggestions: vec!["Walk".to_string(), "Rest".to_string()],
        };
        assert_eq!(
            format_result(&result),
            "😌 Calm\n50% confidence\n\nAnalysis\nSteady.\n\nSuggestions for You\n1. Walk\n2. Rest\n"
        );
    }

    #[test]
    fn format_without_suggestions() {
        let result = AnalysisResult {
            emotion: "curious".to_string(),
            confidence: 1.2,
            analysis: "Hmm.".to_string(),
            suggestions: vec![],
        };
        assert_eq!(
            format_result(&result),
            "🤔 curious\n120% confidence\n\nAnalysis\nHmm.\n"
        );
    }
}
