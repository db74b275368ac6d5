//! Plain-text rendering of grids, cell maps and tap rows.
//!
//! Every row ends with ` : <label>` so the output lines up with the row
//! numbers used elsewhere. Colours are ANSI escapes from `crossterm` and
//! can be switched off for files and pipes.

use cellgate_core::pipeline::CircuitAnalysis;
use cellgate_data::{
    BoolFn, CellMatrix, CellState, GateCode, Grid, InputTap, InputTaps, OutputTaps,
};
use crossterm::style::{style, Color, Stylize};
use std::fmt::Write as _;

/// Glyph for a raw gate code.
#[must_use]
pub fn gate_glyph(gate: GateCode) -> char {
    match gate {
        GateCode::Void => '0',
        GateCode::PassLeft => '|',
        GateCode::PassRight => '\\',
        GateCode::Nand => '3',
    }
}

/// Glyph and colour for a resolved function.
///
/// Inverted functions share their plain glyph but are drawn in red.
#[must_use]
pub fn function_glyph(function: BoolFn) -> (char, Option<Color>) {
    match function {
        BoolFn::False => ('0', None),
        BoolFn::True => ('1', None),
        BoolFn::A => ('A', Some(Color::Green)),
        BoolFn::B => ('B', Some(Color::Blue)),
        BoolFn::NotA => ('a', Some(Color::Red)),
        BoolFn::NotB => ('b', Some(Color::Red)),
        BoolFn::And => ('&', Some(Color::Yellow)),
        BoolFn::Nand => ('&', Some(Color::Red)),
        BoolFn::Or => ('+', Some(Color::Yellow)),
        BoolFn::Nor => ('+', Some(Color::Red)),
        BoolFn::Xor => ('X', Some(Color::Yellow)),
        BoolFn::Xnor => ('X', Some(Color::Red)),
        BoolFn::AOrNotB => ('J', Some(Color::Magenta)),
        BoolFn::BOrNotA => ('K', Some(Color::Magenta)),
        BoolFn::AAndNotB => ('L', Some(Color::Magenta)),
        BoolFn::BAndNotA => ('M', Some(Color::Magenta)),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    colored: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, out: &mut String, glyph: char, color: Option<Color>) {
        match color {
            Some(color) if self.colored => {
                let _ = write!(out, "{}", style(glyph).with(color));
            }
            _ => out.push(glyph),
        }
    }

    fn heading(&self, out: &mut String, text: &str) {
        if self.colored {
            let _ = writeln!(out, "\n\t{}", style(text).with(Color::Green));
        } else {
            let _ = writeln!(out, "\n\t{text}");
        }
    }

    /// Raw gate codes, one line per row.
    #[must_use]
    pub fn grid(&self, grid: &Grid) -> String {
        let mut out = String::new();
        for (y, row) in grid.rows().enumerate() {
            out.extend(row.iter().map(|g| gate_glyph(*g)));
            let _ = writeln!(out, " : {y}");
        }
        out
    }

    /// Resolved functions for connected cells, raw gates for irreducible
    /// ones and `.` for disconnected cells.
    #[must_use]
    pub fn cells(&self, cells: &CellMatrix) -> String {
        let mut out = String::new();
        for (y, row) in cells.rows().enumerate() {
            for cell in row {
                match cell.state() {
                    CellState::Disconnected => out.push('.'),
                    CellState::Simplified(function) => {
                        let (glyph, color) = function_glyph(function);
                        self.paint(&mut out, glyph, color);
                    }
                    CellState::Irreducible(gate) => out.push(gate_glyph(gate)),
                }
            }
            let _ = writeln!(out, " : {y}");
        }
        out
    }

    #[must_use]
    pub fn outputs(&self, outputs: &OutputTaps) -> String {
        let mut out = String::new();
        for &tapped in outputs.as_slice() {
            if tapped {
                self.paint(&mut out, 'O', Some(Color::Magenta));
            } else {
                out.push('-');
            }
        }
        out.push_str(" : OUTPUT\n");
        out
    }

    #[must_use]
    pub fn inputs(&self, inputs: &InputTaps) -> String {
        let mut out = String::new();
        for tap in inputs.as_slice() {
            match tap {
                InputTap::A => self.paint(&mut out, 'A', Some(Color::Green)),
                InputTap::B => self.paint(&mut out, 'B', Some(Color::Blue)),
            }
        }
        out.push_str(" : INPUT\n");
        out
    }

    /// Two functions per line in truth-table order, then the raw gate glyphs.
    #[must_use]
    pub fn legend(&self) -> String {
        let mut out = String::new();
        self.heading(&mut out, "Simplified Circuit Legend:");
        for pair in BoolFn::ALL.chunks(2) {
            out.push('\t');
            for (i, function) in pair.iter().enumerate() {
                if i > 0 {
                    out.push_str("\t|\t");
                }
                let (glyph, color) = function_glyph(*function);
                self.paint(&mut out, glyph, color);
                let _ = write!(out, " : {:<12}", function.name());
            }
            out.push('\n');
        }
        self.heading(&mut out, "Irreducible Cells:");
        for (gate, label) in [
            (GateCode::PassLeft, "Pass left"),
            (GateCode::PassRight, "Pass right"),
            (GateCode::Nand, "NAND"),
        ] {
            let _ = writeln!(out, "\t{} : {label}", gate_glyph(gate));
        }
        out
    }

    /// Full report: raw grid, cell map between its tap rows, output
    /// functions and legend.
    #[must_use]
    pub fn analysis(&self, analysis: &CircuitAnalysis, resolution_budget: u32) -> String {
        let mut out = String::new();
        self.heading(&mut out, "CA Generation Output:");
        out.push_str(&self.grid(&analysis.grid));

        self.heading(&mut out, "Cell Logic Simplification:");
        out.push_str(&self.outputs(&analysis.taps.outputs));
        out.push_str(&self.cells(&analysis.cells));
        out.push_str(&self.inputs(&analysis.taps.inputs));

        self.heading(&mut out, "Output Functions:");
        for output in analysis.output_functions(resolution_budget) {
            let symbolic = output.symbolic.map_or("UNDETERMINED", BoolFn::name);
            let sampled = output.sampled.map_or("UNDETERMINED", BoolFn::name);
            let _ = writeln!(
                out,
                "\tcolumn {:>3} : {symbolic} (evaluated: {sampled})",
                output.column
            );
        }

        let _ = writeln!(
            out,
            "\n\tconnected {} | simplified {} | irreducible {} | passes {}{}",
            analysis.cells.connected_count(),
            analysis.cells.simplified_count(),
            analysis.cells.irreducible_count(),
            analysis.stats.passes,
            if analysis.stats.settled { "" } else { " (budget exhausted)" }
        );
        out.push_str(&self.legend());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgate_core::config::AppConfig;
    use cellgate_core::pipeline::analyze;
    use cellgate_data::RuleTable;

    fn pass_left_analysis() -> CircuitAnalysis {
        analyze(&RuleTable::uniform(GateCode::PassLeft), &AppConfig::with_size(4)).unwrap()
    }

    #[test]
    fn test_gate_glyphs() {
        let glyphs: String = GateCode::ALL.iter().map(|g| gate_glyph(*g)).collect();
        assert_eq!(glyphs, "0|\\3");
    }

    #[test]
    fn test_function_glyphs_distinct_by_colour() {
        let mut seen: Vec<(char, Option<Color>)> =
            BoolFn::ALL.iter().map(|f| function_glyph(*f)).collect();
        seen.sort_by_key(|(c, color)| (*c, format!("{color:?}")));
        seen.dedup();
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_plain_cell_map() {
        let analysis = pass_left_analysis();
        let text = Renderer::new(false).cells(&analysis.cells);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["A... : 0", "A... : 1", "A... : 2", "A... : 3"]);
    }

    #[test]
    fn test_plain_tap_rows() {
        let analysis = pass_left_analysis();
        let renderer = Renderer::new(false);
        assert_eq!(renderer.outputs(&analysis.taps.outputs), "O--- : OUTPUT\n");
        assert_eq!(renderer.inputs(&analysis.taps.inputs), "ABAB : INPUT\n");
    }

    #[test]
    fn test_plain_grid() {
        let analysis = pass_left_analysis();
        let text = Renderer::new(false).grid(&analysis.grid);
        assert!(text.starts_with("|||| : 0\n"));
    }

    #[test]
    fn test_colour_toggle() {
        let analysis = pass_left_analysis();
        let colored = Renderer::new(true).cells(&analysis.cells);
        assert!(colored.contains('\u{1b}'));
        let plain = Renderer::new(false).analysis(&analysis, 16);
        assert!(!plain.contains('\u{1b}'));
        assert!(plain.contains("column   0 : A (evaluated: A)"));
        assert!(plain.contains("XNOR"));
    }
}
