use std::fs;
use std::path::{Path, PathBuf};

use tapis::artifact::source::FileArtifactSource;
use tapis::classifier::engine::ClassifierEngine;
use tapis::classifier::result::{LABEL_AGAMA, LABEL_NETRAL, LABEL_RAS, PredictionSource};

/// A small but complete artifact in the trainer's export format.
///
/// Feature 0 ("benci") leans Netral, feature 1 ("kafir") leans Agama,
/// feature 2 ("cina") leans Ras. Spelling tables are included so tokens
/// mangled by suffix stripping or typos land back in the vocabulary.
fn sample_artifact() -> serde_json::Value {
    serde_json::json!({
        "model": {
            "alpha": 2.0,
            "classes": [0, 1, 2],
            "class_log_prior": [0.0, 0.0, 0.0],
            "feature_log_prob": [
                [-2.0, -3.0, -3.0],
                [-3.0, -1.0, -3.0],
                [-3.0, -3.0, -1.0]
            ],
            "n_features": 3
        },
        "vectorizer": {
            "vocab": {"benci": 0, "kafir": 1, "cina": 2},
            "idf": [1.0, 1.0, 1.0],
            "n_features": 3
        },
        "vocab": ["benci", "kafir", "cina"],
        "word_freq": {"benci": 12, "kafir": 7, "cina": 5},
        "reverse": {"0": "Netral", "1": "Agama", "2": "Ras"}
    })
}

fn write_artifact(dir: &Path, artifact: &serde_json::Value) -> PathBuf {
    let path = dir.join("model.json");
    fs::write(&path, serde_json::to_string(artifact).unwrap()).unwrap();
    path
}

fn file_engine(path: &Path) -> ClassifierEngine {
    ClassifierEngine::new(Box::new(FileArtifactSource::new(path)))
}

#[test]
fn file_backed_prediction_is_model_sourced() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &sample_artifact());
    let engine = file_engine(&path);

    let prediction = engine.predict("dasar kafir jelek");
    assert_eq!(prediction.source, PredictionSource::Model);
    assert_eq!(prediction.label, LABEL_AGAMA);

    let sum: f64 = prediction.probabilities.values().sum();
    assert!((sum - 1.0).abs() < 1e-6, "probabilities sum to {sum}");
}

#[test]
fn reported_label_always_carries_the_largest_probability() {
    // Distinct priors keep the posteriors strictly ordered even for
    // out-of-vocabulary input.
    let mut artifact = sample_artifact();
    artifact["model"]["class_log_prior"] =
        serde_json::json!([(0.5f64).ln(), (0.3f64).ln(), (0.2f64).ln()]);

    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &artifact);
    let engine = file_engine(&path);

    for text in [
        "benci sekali",
        "dasar kafir",
        "orang cina itu",
        "hari biasa saja",
        "",
    ] {
        let prediction = engine.predict(text);
        let (best, _) = prediction
            .probabilities
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .unwrap();
        assert_eq!(
            &prediction.label, best,
            "label disagrees with posteriors for {text:?}"
        );
        assert!((prediction.confidence() - prediction.probabilities[best]).abs() < 1e-12);
    }
}

#[test]
fn each_keyword_class_wins_on_its_own_feature() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &sample_artifact());
    let engine = file_engine(&path);

    assert_eq!(engine.predict("benci banget").label, LABEL_NETRAL);
    assert_eq!(engine.predict("dasar kafir jelek").label, LABEL_AGAMA);
    assert_eq!(engine.predict("dasar cina jelek").label, LABEL_RAS);
}

#[test]
fn misspelled_token_matches_clean_prediction() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &sample_artifact());
    let engine = file_engine(&path);

    let clean = engine.predict("kafir jelek");
    let typo = engine.predict("kafirr jelek");

    assert_eq!(typo.label, clean.label);
    for (label, p) in &clean.probabilities {
        assert!(
            (typo.probabilities[label] - p).abs() < 1e-12,
            "posterior for {label} diverged after correction"
        );
    }
}

#[test]
fn empty_input_reproduces_class_priors() {
    let mut artifact = sample_artifact();
    artifact["model"]["class_log_prior"] =
        serde_json::json!([(0.5f64).ln(), (0.3f64).ln(), (0.2f64).ln()]);

    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &artifact);
    let engine = file_engine(&path);

    let prediction = engine.predict("   ");
    assert!(prediction.is_model_backed());
    assert!((prediction.probabilities[LABEL_NETRAL] - 0.5).abs() < 1e-9);
    assert!((prediction.probabilities[LABEL_AGAMA] - 0.3).abs() < 1e-9);
    assert!((prediction.probabilities[LABEL_RAS] - 0.2).abs() < 1e-9);
    assert_eq!(prediction.label, LABEL_NETRAL);
}

#[test]
fn symmetric_two_class_artifact_splits_probability_evenly() {
    let artifact = serde_json::json!({
        "model": {
            "alpha": 1.0,
            "classes": [0, 1],
            "class_log_prior": [0.0, 0.0],
            "feature_log_prob": [[-1.0, -2.0], [-1.0, -2.0]],
            "n_features": 2
        },
        "vectorizer": {
            "vocab": {"benci": 0, "kafir": 1},
            "idf": [1.0, 1.0],
            "n_features": 2
        },
        "reverse": {"0": "Netral", "1": "Ras"}
    });

    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &artifact);
    let engine = file_engine(&path);

    let prediction = engine.predict("benci kafir");
    assert!((prediction.probabilities[LABEL_NETRAL] - 0.5).abs() < 1e-9);
    assert!((prediction.probabilities[LABEL_RAS] - 0.5).abs() < 1e-9);
    // Ties resolve to the first class in artifact order.
    assert_eq!(prediction.label, LABEL_NETRAL);
    assert_eq!(prediction.class_id, 0);
}

#[test]
fn missing_artifact_uses_keyword_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine(&dir.path().join("no-such-model.json"));

    let prediction = engine.predict("dasar kafir");
    assert_eq!(prediction.source, PredictionSource::KeywordFallback);
    assert_eq!(prediction.label, LABEL_AGAMA);
    assert!(!engine.is_model_loaded());

    let sum: f64 = prediction.probabilities.values().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn corrupt_artifact_file_uses_keyword_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, "{ definitely not a model").unwrap();

    let engine = file_engine(&path);
    let prediction = engine.predict("orang cina dan jawa");
    assert_eq!(prediction.source, PredictionSource::KeywordFallback);
    assert_eq!(prediction.label, LABEL_RAS);
}

#[test]
fn fallback_without_keywords_is_netral() {
    let dir = tempfile::tempdir().unwrap();
    let engine = file_engine(&dir.path().join("no-such-model.json"));

    let prediction = engine.predict("cuaca hari ini bagus");
    assert_eq!(prediction.source, PredictionSource::KeywordFallback);
    assert_eq!(prediction.label, LABEL_NETRAL);
    assert_eq!(prediction.class_id, 0);
}

#[test]
fn invalidate_model_picks_up_replaced_artifact() {
    let mut artifact = sample_artifact();
    artifact["model"]["class_log_prior"] = serde_json::json!([0.0, -5.0, -5.0]);

    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &artifact);
    let engine = file_engine(&path);

    // Out-of-vocabulary input reduces to the priors, so the winning label
    // tracks whichever prior set is loaded.
    assert_eq!(engine.predict("halo dunia").label, LABEL_NETRAL);
    assert!(engine.is_model_loaded());

    artifact["model"]["class_log_prior"] = serde_json::json!([-5.0, -5.0, 0.0]);
    write_artifact(dir.path(), &artifact);

    // Still served from the cache until the engine is told otherwise.
    assert_eq!(engine.predict("halo dunia").label, LABEL_NETRAL);

    engine.invalidate_model();
    assert!(!engine.is_model_loaded());
    assert_eq!(engine.predict("halo dunia").label, LABEL_RAS);
}

#[test]
fn predictions_are_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(dir.path(), &sample_artifact());
    let engine = file_engine(&path);

    let first = engine.predict("gw benci sama org kafir itu");
    let second = engine.predict("gw benci sama org kafir itu");
    assert_eq!(first.label, second.label);
    assert_eq!(first.class_id, second.class_id);
    for (label, p) in &first.probabilities {
        assert_eq!(second.probabilities[label], *p);
    }
}
