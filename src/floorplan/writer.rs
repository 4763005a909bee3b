// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Text serialization in the same formats the parsers read

use std::fmt;

use super::{Problem, Solution};

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CHIP {} {}", self.outline.width, self.outline.height)?;

        writeln!(f, "SOFTMODULE {}", self.soft_modules.len())?;
        for spec in &self.soft_modules {
            writeln!(f, "{} {}", spec.name, spec.area)?;
        }

        writeln!(f, "FIXEDMODULE {}", self.fixed_modules.len())?;
        for m in &self.fixed_modules {
            writeln!(f, "{} {} {} {} {}", m.name, m.x, m.y, m.width, m.height)?;
        }

        writeln!(f, "CONNECTION {}", self.connections.len())?;
        for c in &self.connections {
            writeln!(f, "{} {} {}", c.source, c.target, c.weight)?;
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HPWL {:.1}", self.hpwl)?;
        writeln!(f, "SOFTMODULE {}", self.soft_modules.len())?;
        for module in &self.soft_modules {
            writeln!(f, "{} {}", module.name, module.corners.len())?;
            for (x, y) in &module.corners {
                writeln!(f, "{x} {y}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::floorplan::{parse_problem, parse_solution};

    #[test]
    fn test_problem_text_roundtrip() {
        let text = "CHIP 10 20\nSOFTMODULE 1\nS 4\nFIXEDMODULE 1\nF -1 2 3 4\nCONNECTION 1\nS F 7\n";
        let problem = parse_problem(text).unwrap();
        assert_eq!(problem.to_string(), text);
    }

    #[test]
    fn test_solution_text() {
        let solution = parse_solution("HPWL 3.14159 SOFTMODULE 1 S 3 0 0 4 0 0 3").unwrap();
        assert_eq!(
            solution.to_string(),
            "HPWL 3.1\nSOFTMODULE 1\nS 3\n0 0\n4 0\n0 3\n"
        );
    }
}
