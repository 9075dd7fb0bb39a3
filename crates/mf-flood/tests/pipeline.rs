mod common;

use std::fs;

use common::{gradient, init_logging, write_color, write_mask};
use mf_core::Error;
use mf_flood::{
    BatchOptions, BatchStatus, FloodOutcome, OutputFormat, PipelineError, Rejection,
    collect_color_files, io, run_batch, run_mip_flooding,
};

#[test]
fn png_run_writes_flooded_texture_and_report() {
    init_logging();
    let dir = tempfile::tempdir().expect("temp dir");
    let color_path = dir.path().join("wall_C.png");
    let alpha_path = dir.path().join("wall_A.png");
    let output_path = dir.path().join("out").join("wall_F.png");

    let color = gradient(64, 64);
    write_color(&color_path, &color);
    write_mask(&alpha_path, 64, 64, |x, _| if x < 32 { 255 } else { 0 });

    let outcome =
        run_mip_flooding(&color_path, &alpha_path, &output_path, " PNG ").expect("run succeeds");
    let report = match outcome {
        FloodOutcome::Written(report) => report,
        FloodOutcome::Rejected(r) => panic!("unexpected rejection: {r}"),
    };

    assert!(output_path.is_file());
    assert_eq!((report.width, report.height), (64, 64));
    assert_eq!(report.format, OutputFormat::Png);
    assert_eq!(report.stack.passes, 6);
    assert!(report.input_bytes > 0 && report.output_bytes > 0);
    assert!(report.stages.iter().any(|s| s.label == "encode"));

    let written = io::load_color(&output_path).expect("decodable output");
    assert_eq!(written.dimensions(), (64, 64));
    for y in 0..64 {
        for x in 0..32 {
            assert_eq!(written.get_pixel(x, y), color.get_pixel(x, y));
        }
    }

    let json = serde_json::to_value(&report).expect("serializable report");
    assert_eq!(json["stack"]["passes"], 6);
    assert!(json.get("sizeReductionPercent").is_some());
}

#[test]
fn jpeg_output_is_written_without_alpha() {
    let dir = tempfile::tempdir().expect("temp dir");
    let color_path = dir.path().join("c.png");
    let alpha_path = dir.path().join("a.png");
    let output_path = dir.path().join("flooded.jpg");

    write_color(&color_path, &gradient(32, 32));
    write_mask(&alpha_path, 32, 32, |_, y| if y < 8 { 255 } else { 0 });

    let outcome = run_mip_flooding(&color_path, &alpha_path, &output_path, "jpg").expect("run");
    assert!(outcome.report().is_some());

    let decoded = image::open(&output_path).expect("decodable jpeg");
    assert_eq!((decoded.width(), decoded.height()), (32, 32));
    assert!(!decoded.color().has_alpha());
}

#[test]
fn unknown_format_fails_before_touching_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_path = dir.path().join("never.webp");

    let err = run_mip_flooding(
        dir.path().join("missing_C.png"),
        dir.path().join("missing_A.png"),
        &output_path,
        "webp",
    )
    .expect_err("unsupported format");

    match err {
        PipelineError::Core(Error::UnsupportedFormat(token)) => assert_eq!(token, "webp"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output_path.exists());
}

#[test]
fn mismatched_resolutions_are_rejected_without_output() {
    init_logging();
    let dir = tempfile::tempdir().expect("temp dir");
    let color_path = dir.path().join("c.png");
    let alpha_path = dir.path().join("a.png");
    let output_path = dir.path().join("out.png");

    write_color(&color_path, &gradient(32, 32));
    write_mask(&alpha_path, 16, 16, |_, _| 255);

    let outcome = run_mip_flooding(&color_path, &alpha_path, &output_path, "png").expect("run");
    match outcome {
        FloodOutcome::Rejected(Rejection::Invalid(Error::InputMismatch { color, alpha })) => {
            assert_eq!(color, (32, 32));
            assert_eq!(alpha, (16, 16));
        }
        other => panic!("expected mismatch rejection, got {other:?}"),
    }
    assert!(!output_path.exists());
}

#[test]
fn non_power_of_two_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let color_path = dir.path().join("c.png");
    let alpha_path = dir.path().join("a.png");
    let output_path = dir.path().join("out.png");

    write_color(&color_path, &gradient(24, 24));
    write_mask(&alpha_path, 24, 24, |_, _| 255);

    let outcome = run_mip_flooding(&color_path, &alpha_path, &output_path, "png").expect("run");
    assert!(matches!(
        outcome,
        FloodOutcome::Rejected(Rejection::Invalid(Error::NotPowerOfTwo {
            width: 24,
            height: 24
        }))
    ));
    assert!(!output_path.exists());
}

#[test]
fn missing_input_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let color_path = dir.path().join("c.png");
    write_color(&color_path, &gradient(8, 8));
    let alpha_path = dir.path().join("absent.png");

    let outcome =
        run_mip_flooding(&color_path, &alpha_path, dir.path().join("o.png"), "png").expect("run");
    match outcome {
        FloodOutcome::Rejected(Rejection::MissingInput(path)) => assert_eq!(path, alpha_path),
        other => panic!("expected missing input, got {other:?}"),
    }
}

#[test]
fn batch_floods_every_matched_pair() {
    init_logging();
    let input = tempfile::tempdir().expect("temp dir");
    let output = tempfile::tempdir().expect("temp dir");

    for name in ["brick", "stone"] {
        write_color(&input.path().join(format!("{name}_C.png")), &gradient(16, 16));
        write_mask(
            &input.path().join(format!("{name}_A.png")),
            16,
            16,
            |x, y| if x < 4 && y < 4 { 255 } else { 0 },
        );
    }
    write_color(&input.path().join("moss_C.png"), &gradient(16, 16));

    let options = BatchOptions {
        output_pattern: "_F".to_string(),
        format: OutputFormat::Tiff,
        ..BatchOptions::default()
    };
    let files = collect_color_files(input.path(), &options.color_pattern).expect("listed");
    assert_eq!(files.len(), 3);

    let entries = run_batch(&files, output.path(), &options);
    let names: Vec<String> = entries
        .iter()
        .map(|e| {
            e.color
                .file_name()
                .expect("file name")
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    assert_eq!(names, ["brick_C.png", "moss_C.png", "stone_C.png"]);

    assert!(matches!(
        entries[0].status,
        BatchStatus::Done(FloodOutcome::Written(_))
    ));
    assert!(matches!(entries[1].status, BatchStatus::Skipped));
    assert!(matches!(
        entries[2].status,
        BatchStatus::Done(FloodOutcome::Written(_))
    ));

    let mut written: Vec<String> = fs::read_dir(output.path())
        .expect("output dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, ["brick_F.tif", "stone_F.tif"]);
}
