//! Rendering tests: scene composition, SVG output and PNG files on disk

use floorplan_viewer::floorplan::{parse_problem, parse_solution};
use floorplan_viewer::render::scene::Scene;
use floorplan_viewer::render::svg::render_svg;
use floorplan_viewer::render::{render_floorplan, RenderConfig, ViewBounds, ViewMargin};
use floorplan_viewer::{ChipOutline, FloorplanError};
use std::fs;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const PROBLEM: &str = "CHIP 100 200
SOFTMODULE 2
S1 100
S2 100
FIXEDMODULE 1
F1 2 3 4 6
CONNECTION 3
S1 F1 1
S2 S1 5
S2 GHOST 10
";

const RESULT: &str = "HPWL 1500.26
SOFTMODULE 2
S1 4 0 0 10 0 10 10 0 10
S2 4 50 50 70 50 70 90 50 90
";

#[test]
fn test_render_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.png");
    let problem = parse_problem(PROBLEM).unwrap();
    let solution = parse_solution(RESULT).unwrap();

    let report = render_floorplan(&problem, &solution, &RenderConfig::default(), &path).unwrap();
    assert_eq!(report.edges_drawn, 2);
    assert_eq!(report.edges_skipped, 1);

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    // IHDR width and height
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((width, height), (3600, 3000));
}

#[test]
fn test_dangling_reference_not_drawn() {
    let problem = parse_problem(PROBLEM).unwrap();
    let solution = parse_solution(RESULT).unwrap();
    let (scene, report) = Scene::from_floorplan(&problem, &solution, &RenderConfig::default());

    assert_eq!(report.edges_skipped, 1);
    let endpoints: Vec<((f64, f64), (f64, f64))> =
        scene.edges.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(
        endpoints,
        vec![((5.0, 5.0), (4.0, 6.0)), ((60.0, 70.0), (5.0, 5.0))]
    );
    // GHOST carries the max weight, so the drawn edges are thinner than 3.5.
    assert!((scene.edges[0].width - 0.8).abs() < 1e-9);
    assert!((scene.edges[1].width - 2.0).abs() < 1e-9);
}

#[test]
fn test_empty_connections_same_scene_without_lines() {
    let mut problem = parse_problem(PROBLEM).unwrap();
    let solution = parse_solution(RESULT).unwrap();
    let config = RenderConfig::default();

    let (with_edges, _) = Scene::from_floorplan(&problem, &solution, &config);
    problem.connections.clear();
    let (without_edges, _) = Scene::from_floorplan(&problem, &solution, &config);

    let mut stripped = with_edges.clone();
    stripped.edges.clear();
    assert_eq!(stripped, without_edges);

    let svg = render_svg(&without_edges, &config);
    assert!(!svg.contains("stroke-linecap=\"round\""));
    assert!(svg.contains(r#"<g id="layer-connections" clip-path="url(#plot-area)"></g>"#));
}

#[test]
fn test_view_bounds_five_percent() {
    let outline = ChipOutline {
        width: 100,
        height: 200,
    };
    let bounds = ViewBounds::around(&outline, ViewMargin::Relative(0.05));
    assert_eq!(
        (bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y),
        (-5.0, 105.0, -10.0, 210.0)
    );
}

#[test]
fn test_title_has_one_decimal() {
    let problem = parse_problem(PROBLEM).unwrap();
    let solution = parse_solution(RESULT).unwrap();
    let (scene, _) = Scene::from_floorplan(&problem, &solution, &RenderConfig::default());
    let svg = render_svg(&scene, &RenderConfig::default());
    assert!(svg.contains("Floorplan Result (HPWL: 1500.3)"));
}

#[test]
fn test_invalid_margin_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.png");
    let problem = parse_problem(PROBLEM).unwrap();
    let solution = parse_solution(RESULT).unwrap();
    let config = RenderConfig {
        margin: ViewMargin::Absolute(-10.0),
        ..RenderConfig::default()
    };
    let err = render_floorplan(&problem, &solution, &config, &path).unwrap_err();
    assert!(matches!(err, FloorplanError::Render(_)));
    assert!(!path.exists());
}

#[test]
fn test_low_dpi_raised_to_minimum() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.png");
    let problem = parse_problem(PROBLEM).unwrap();
    let solution = parse_solution(RESULT).unwrap();
    let config = RenderConfig {
        dpi: 72,
        width_in: 2.0,
        height_in: 1.0,
        ..RenderConfig::default()
    };
    render_floorplan(&problem, &solution, &config, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    assert_eq!((width, height), (600, 300));
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("result.png");
    let problem = parse_problem(PROBLEM).unwrap();
    let solution = parse_solution(RESULT).unwrap();
    let err = render_floorplan(&problem, &solution, &RenderConfig::default(), &path).unwrap_err();
    assert!(matches!(err, FloorplanError::Io(_)));
}
