//! Command implementations for the Tapis CLI.

use std::cmp::Ordering;
use std::io::Read;

use crate::artifact::source::{ArtifactSource, FileArtifactSource};
use crate::classifier::ClassifierEngine;
use crate::cli::args::{ClassifyArgs, Command, InfoArgs, TapisArgs};
use crate::error::{Result, TapisError};

/// Execute a CLI command.
pub fn execute_command(args: TapisArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Info(info_args) => show_info(info_args.clone(), &args),
    }
}

/// Classify one sentence from the arguments or standard input.
fn classify(args: ClassifyArgs, cli_args: &TapisArgs) -> Result<()> {
    let text = if args.text.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text.join(" ")
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(TapisError::other("no text to classify"));
    }

    let engine = ClassifierEngine::new(Box::new(FileArtifactSource::new(&cli_args.model)));
    let prediction = engine.predict(text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    println!("Label: {}", prediction.label);
    if !prediction.is_model_backed() && cli_args.verbosity() > 0 {
        println!(
            "Note: no usable model artifact at {}; this is the keyword fallback",
            cli_args.model.display()
        );
    }

    let mut entries: Vec<_> = prediction.probabilities.iter().collect();
    entries.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(Ordering::Equal));
    for (label, probability) in entries {
        println!("  {label:<8} {probability:.4}");
    }

    Ok(())
}

/// Show artifact provenance and, optionally, offline evaluation metrics.
fn show_info(args: InfoArgs, cli_args: &TapisArgs) -> Result<()> {
    let source = FileArtifactSource::new(&cli_args.model);
    let artifact = source.load()?;
    artifact.validate()?;

    println!("Artifact: {}", source.describe());
    println!("Features: {}", artifact.model.n_features);
    println!("Smoothing alpha: {}", artifact.model.alpha);

    let labels: Vec<&str> = artifact
        .model
        .classes
        .iter()
        .filter_map(|&class_id| artifact.label_for_class(class_id))
        .collect();
    println!("Classes: {}", labels.join(", "));

    println!(
        "Spelling correction: {}",
        if artifact.supports_spelling_correction() {
            "enabled"
        } else {
            "disabled (vocab/word_freq missing)"
        }
    );

    if let (Some(train_size), Some(test_size)) = (artifact.train_size, artifact.test_size) {
        println!("Training split: {train_size} train / {test_size} test");
    }

    if args.metrics {
        if let Some(metrics) = &artifact.training_metrics {
            println!(
                "Training: accuracy {:.4}, precision {:.4}, recall {:.4}, f1 {:.4}, auc {:.4}",
                metrics.accuracy, metrics.precision, metrics.recall, metrics.f1, metrics.auc
            );
        }
        if let Some(metrics) = &artifact.testing_metrics {
            println!(
                "Testing:  accuracy {:.4}, precision {:.4}, recall {:.4}, f1 {:.4}, auc {:.4}",
                metrics.accuracy, metrics.precision, metrics.recall, metrics.f1, metrics.auc
            );
        }
        if let Some(cv) = &artifact.cv_metrics {
            println!("Cross-validation: accuracy {:.4} +/- {:.4}", cv.accuracy, cv.std);
        }
    }

    Ok(())
}
