//! Rendering of the report matrix.
//!
//! Rows are projects and columns employees, in the order the aggregator
//! produced them. Cells are whatever unit the caller converted to.

use super::formatter::TimeUnit;
use super::matrix::ResultMatrix;
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// HTML `<table>`, suitable for pasting into an email.
    #[default]
    Html,
    /// Aligned text table for the terminal.
    Table,
    /// Header row of employees, one row per project.
    Csv,
    /// Labels and cells as a JSON object.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    unit: &'a str,
    #[serde(flatten)]
    matrix: &'a ResultMatrix,
}

pub struct View {}

impl View {
    /// Builds the table: a title row of employees, then one row per project.
    pub fn matrix_table(matrix: &ResultMatrix) -> Table {
        let mut table = Table::new();

        let mut titles = vec![Cell::new("")];
        titles.extend(matrix.employees.iter().map(|employee| Cell::new(employee)));
        table.set_titles(Row::new(titles));

        for (project, cells) in matrix.projects.iter().zip(&matrix.cells) {
            let mut row = vec![Cell::new(project)];
            row.extend(cells.iter().map(|value| Cell::new(&value.to_string())));
            table.add_row(Row::new(row));
        }

        table
    }

    /// Converts cells to `unit` and writes the matrix in `format`.
    pub fn render<W: Write>(matrix: &ResultMatrix, unit: TimeUnit, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
        let matrix = matrix.map_cells(|seconds| unit.convert(seconds));

        match format {
            OutputFormat::Html => {
                Self::matrix_table(&matrix).print_html(out)?;
            }
            OutputFormat::Table => {
                Self::matrix_table(&matrix).print(out)?;
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(out);
                let mut header = vec!["project".to_string()];
                header.extend(matrix.employees.iter().cloned());
                wtr.write_record(&header)?;
                for (project, cells) in matrix.projects.iter().zip(&matrix.cells) {
                    let mut record = vec![project.clone()];
                    record.extend(cells.iter().map(u64::to_string));
                    wtr.write_record(&record)?;
                }
                wtr.flush()?;
            }
            OutputFormat::Json => {
                let report = JsonReport {
                    unit: unit.name(),
                    matrix: &matrix,
                };
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
