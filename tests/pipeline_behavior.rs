use std::fs;
use std::path::PathBuf;

use ibtraj::cli::Args;

fn unique_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "ibtraj_pipeline_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

fn args_for(input: &PathBuf, output: &PathBuf, config: &PathBuf) -> Args {
    Args {
        input: input.to_string_lossy().into_owned(),
        output: output.to_string_lossy().into_owned(),
        config: config.to_string_lossy().into_owned(),
        no_csv: false,
    }
}

#[test]
fn missing_input_is_reported_without_figure() {
    let input = unique_path("missing.json");
    let output = unique_path("missing_out.png");
    let config = unique_path("missing_style.toml");

    ibtraj::run(&args_for(&input, &output, &config)).unwrap();

    assert!(!output.exists(), "no figure should be written");
    assert!(
        !output.with_extension("csv").exists(),
        "no CSV should be written"
    );
}

#[test]
fn empty_results_are_reported_without_figure() {
    let input = unique_path("empty.json");
    let output = unique_path("empty_out.png");
    let config = unique_path("empty_style.toml");
    fs::write(&input, "[]").unwrap();

    ibtraj::run(&args_for(&input, &output, &config)).unwrap();

    assert!(!output.exists(), "no figure should be written");

    let _ = fs::remove_file(&input);
}

#[test]
fn malformed_results_propagate_an_error() {
    let input = unique_path("malformed.json");
    let output = unique_path("malformed_out.png");
    let config = unique_path("malformed_style.toml");
    fs::write(&input, r#"[[{"final_htse": "not a number"}]]"#).unwrap();

    let result = ibtraj::run(&args_for(&input, &output, &config));
    assert!(result.is_err());
    assert!(!output.exists());

    let _ = fs::remove_file(&input);
}

#[test]
fn synthetic_results_render_figure_and_csv() {
    let input = unique_path("ok.json");
    let output = unique_path("ok_out.png");
    let config = unique_path("ok_style.toml");

    let mut runs = Vec::new();
    for offset in [0.0f32, 1.0, 2.0] {
        let run: Vec<serde_json::Value> = (0..5)
            .map(|step| {
                serde_json::json!({
                    "final_htse": offset + step as f32,
                    "final_hsie": offset + (step as f32 - 2.0).abs() * -1.0,
                })
            })
            .collect();
        runs.push(run);
    }
    fs::write(&input, serde_json::to_string(&runs).unwrap()).unwrap();

    ibtraj::run(&args_for(&input, &output, &config)).unwrap();

    assert!(output.exists(), "figure should be written");
    let csv_path = output.with_extension("csv");
    let csv = fs::read_to_string(&csv_path).expect("aggregate CSV next to the figure");
    // Header plus one row per step.
    assert_eq!(csv.lines().count(), 6);

    let _ = fs::remove_file(&input);
    let _ = fs::remove_file(&output);
    let _ = fs::remove_file(&csv_path);
    let _ = fs::remove_file(&config);
}
