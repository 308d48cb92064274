//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::classifier::{Classification, ModelStats};
use crate::cli::args::{LexbayesArgs, OutputFormat};
use crate::error::Result;

/// Results that know how to print themselves for a person.
pub trait HumanOutput {
    fn render_human(&self) -> String;
}

/// Classification of a single text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub text: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Vec<Classification>>,
}

/// Result structure for the classify command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResults {
    pub results: Vec<ClassifyResult>,
    pub trained_documents: usize,
    pub duration_ms: u64,
}

/// Result structure for the features command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesResult {
    pub text: String,
    pub stems: Vec<String>,
    pub vocabulary: Vec<String>,
    pub features: Vec<u8>,
}

impl HumanOutput for ClassifyResults {
    fn render_human(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            let _ = writeln!(out, "{}\t{}", result.label, result.text);
            if let Some(classifications) = &result.classifications {
                for classification in classifications {
                    let _ = writeln!(
                        out,
                        "  {:<20} {:.6e}",
                        classification.label, classification.value
                    );
                }
            }
        }
        out
    }
}

impl HumanOutput for FeaturesResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Stems: {}", self.stems.join(" "));
        let vector: Vec<String> = self.features.iter().map(u8::to_string).collect();
        let _ = writeln!(out, "Vector: [{}]", vector.join(", "));

        let present: Vec<&str> = self
            .vocabulary
            .iter()
            .zip(&self.features)
            .filter(|(_, value)| **value != 0)
            .map(|(stem, _)| stem.as_str())
            .collect();
        let _ = writeln!(
            out,
            "Present: {} of {} ({})",
            present.len(),
            self.vocabulary.len(),
            present.join(", ")
        );
        out
    }
}

impl HumanOutput for ModelStats {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Model Statistics:");
        let _ = writeln!(out, "═════════════════");
        let _ = writeln!(out, "Documents: {}", self.documents);
        let _ = writeln!(out, "Trained documents: {}", self.trained_documents);
        let _ = writeln!(out, "Vocabulary size: {}", self.vocabulary_size);
        let _ = writeln!(out, "Total examples: {}", self.total_examples);
        let _ = writeln!(out, "Smoothing: {}", self.smoothing);

        if !self.classes.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Classes:");
            let _ = writeln!(out, "────────");
            for class in &self.classes {
                let _ = writeln!(
                    out,
                    "  {} (total: {}, features: {})",
                    class.label, class.total, class.features
                );
            }
        }
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &LexbayesArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(message: &str, result: &T, args: &LexbayesArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexbayesArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

/// Serialize a result as compact or pretty JSON.
pub fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ClassSummary;

    #[test]
    fn test_classify_results_human() {
        let results = ClassifyResults {
            results: vec![ClassifyResult {
                text: "i love parrots".to_string(),
                label: "pos".to_string(),
                classifications: Some(vec![
                    Classification {
                        label: "pos".to_string(),
                        value: 0.6,
                    },
                    Classification {
                        label: "neg".to_string(),
                        value: 0.2,
                    },
                ]),
            }],
            trained_documents: 4,
            duration_ms: 0,
        };

        let rendered = results.render_human();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "pos\ti love parrots");
        assert!(lines[1].trim_start().starts_with("pos"));
        assert!(lines[2].trim_start().starts_with("neg"));
    }

    #[test]
    fn test_classify_results_json_skips_missing_ranking() {
        let results = ClassifyResults {
            results: vec![ClassifyResult {
                text: "cats".to_string(),
                label: "pos".to_string(),
                classifications: None,
            }],
            trained_documents: 1,
            duration_ms: 3,
        };

        let json = render_json(&results, false).unwrap();
        assert!(!json.contains("classifications"));
        assert!(json.contains("\"label\":\"pos\""));
    }

    #[test]
    fn test_features_human() {
        let result = FeaturesResult {
            text: "i love parrots".to_string(),
            stems: vec!["i".to_string(), "love".to_string(), "parrot".to_string()],
            vocabulary: vec!["i".to_string(), "love".to_string(), "cat".to_string()],
            features: vec![1, 1, 0],
        };

        let rendered = result.render_human();
        assert!(rendered.contains("Stems: i love parrot"));
        assert!(rendered.contains("Vector: [1, 1, 0]"));
        assert!(rendered.contains("Present: 2 of 3 (i, love)"));
    }

    #[test]
    fn test_stats_human() {
        let stats = ModelStats {
            documents: 4,
            trained_documents: 4,
            vocabulary_size: 5,
            total_examples: 5,
            smoothing: 1.0,
            classes: vec![ClassSummary {
                label: "pos".to_string(),
                total: 3,
                features: 4,
            }],
        };

        let rendered = stats.render_human();
        assert!(rendered.contains("Vocabulary size: 5"));
        assert!(rendered.contains("pos (total: 3, features: 4)"));
    }

    #[test]
    fn test_render_json_pretty() {
        let stats = ModelStats {
            documents: 0,
            trained_documents: 0,
            vocabulary_size: 0,
            total_examples: 1,
            smoothing: 1.0,
            classes: Vec::new(),
        };

        let json = render_json(&stats, true).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"total_examples\": 1"));
    }
}
