//! Test cases for the single-file block layouts

use floorplan_viewer::blocks::reader::BlockLayoutReader;
use floorplan_viewer::blocks::{parse_block_layout, BlockLayoutFormat};
use floorplan_viewer::render::{render_block_layout, RenderConfig};
use floorplan_viewer::{FloorplanError, ParseError};
use std::fs;

const ROTATED: &str = "OUTLINE 300 200
bk1 0 0 120 80 0
bk2 120 0 200 150 1
bk3 0 80 100 200 0
";

const WITH_METRICS: &str = "OUTLINE 300 200
54321.5
1200
48000
240 200
0.87
bk1 0 0 120 80
bk2 120 0 240 100
bk3 0 80 100 200
";

#[test]
fn test_detect_formats() {
    assert_eq!(BlockLayoutFormat::detect(ROTATED), BlockLayoutFormat::Rotated);
    assert_eq!(
        BlockLayoutFormat::detect(WITH_METRICS),
        BlockLayoutFormat::WithMetrics
    );
}

#[test]
fn test_rotated_blocks() {
    let layout = parse_block_layout(ROTATED, None).unwrap();
    assert_eq!(layout.blocks.len(), 3);
    assert!(layout.metrics.is_empty());
    let rotated: Vec<Option<bool>> = layout.blocks.iter().map(|b| b.rotated).collect();
    assert_eq!(rotated, vec![Some(false), Some(true), Some(false)]);
}

#[test]
fn test_metric_lines_skipped() {
    let layout = parse_block_layout(WITH_METRICS, None).unwrap();
    assert_eq!(layout.metrics[0], "54321.5");
    assert_eq!(layout.blocks.len(), 3);
    assert_eq!(layout.blocks[0].name, "bk1");
    assert_eq!(layout.blocks[2].height(), 120);
}

#[test]
fn test_forced_format_mismatch() {
    // Only three lines follow the outline, fewer than the metric header needs.
    let err = parse_block_layout(ROTATED, Some(BlockLayoutFormat::WithMetrics)).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));

    // Read as rotated, the five-field lines are too short and are skipped.
    let layout = parse_block_layout(WITH_METRICS, Some(BlockLayoutFormat::Rotated)).unwrap();
    assert!(layout.blocks.is_empty());
}

#[test]
fn test_reader_and_render() {
    let dir = tempfile::tempdir().unwrap();
    let layout_path = dir.path().join("output.txt");
    let plot_path = dir.path().join("floorplan.png");
    fs::write(&layout_path, WITH_METRICS).unwrap();

    let layout = BlockLayoutReader::new().read(&layout_path).unwrap();
    render_block_layout(&layout, &RenderConfig::blocks(), &plot_path).unwrap();

    let bytes = fs::read(&plot_path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_reader_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = BlockLayoutReader::with_format(BlockLayoutFormat::Rotated)
        .read(dir.path().join("missing.txt"))
        .unwrap_err();
    assert!(matches!(err, FloorplanError::FileAccess { .. }));
}
