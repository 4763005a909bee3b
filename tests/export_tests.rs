// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use floorplan_viewer::export::export_modules_to_csv;
use floorplan_viewer::floorplan::{parse_problem, parse_solution};
use std::fs;

#[test]
fn test_module_table_export() {
    let problem = parse_problem(
        "CHIP 100 100
SOFTMODULE 2
ALU 300
L-SHAPE 250
FIXEDMODULE 1
PAD 90 90 10 10
CONNECTION 0
",
    )
    .unwrap();
    let solution = parse_solution(
        "HPWL 10.0
SOFTMODULE 2
ALU 4 0 0 20 0 20 20 0 20
L-SHAPE 6 20 0 40 0 40 10 30 10 30 20 20 20
",
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("modules.csv");
    export_modules_to_csv(&problem, &solution, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Name,Kind,CenterX,CenterY,Area,MinArea,MeetsMinArea");
    assert_eq!(lines[1], "PAD,FIXED,95.0,95.0,100,,");
    assert_eq!(lines[2], "ALU,SOFT,10.0,10.0,400,300,true");
    assert!(lines[3].starts_with("L-SHAPE,SOFT,"));
    assert!(lines[3].ends_with(",300,250,true"));
}

#[test]
fn test_unparsed_soft_area_leaves_check_empty() {
    let problem = parse_problem("CHIP 100 100 SOFTMODULE 1 S 12.5 FIXEDMODULE 1 F 0 0 1 1").unwrap();
    let solution = parse_solution("HPWL 0 SOFTMODULE 1 S 4 0 0 5 0 5 5 0 5").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("modules.csv");
    export_modules_to_csv(&problem, &solution, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[1], "F,FIXED,0.5,0.5,1,,");
    assert_eq!(lines[2], "S,SOFT,2.5,2.5,25,,");
}

#[test]
fn test_export_to_missing_directory_fails() {
    let problem = parse_problem("CHIP 1 1").unwrap();
    let solution = parse_solution("HPWL 0").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let result = export_modules_to_csv(&problem, &solution, dir.path().join("a").join("b.csv"));
    assert!(result.is_err());
}
