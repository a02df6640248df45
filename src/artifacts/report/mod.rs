//! Merge-status report
//!
//! Rows are kept in the order the references were enumerated and rendered as
//! a boxed two-column table:
//!
//! ```text
//! +---------+------------------+
//! | Branch  | Merged to master |
//! +---------+------------------+
//! | feature | false            |
//! | master  | true             |
//! +---------+------------------+
//! ```

use crate::artifacts::branch::branch_name::BranchName;
use colored::Colorize;
use derive_new::new;
use std::io;

const BRANCH_HEADER: &str = "Branch";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ReportRow {
    branch: String,
    merged: bool,
}

impl ReportRow {
    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn merged(&self) -> bool {
        self.merged
    }
}

#[derive(Debug, Clone, new)]
pub struct MergeReport {
    main_branch: BranchName,
    #[new(default)]
    rows: Vec<ReportRow>,
}

impl MergeReport {
    pub fn append(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn main_branch(&self) -> &BranchName {
        &self.main_branch
    }

    pub fn header(&self) -> [String; 2] {
        [
            BRANCH_HEADER.to_string(),
            format!("Merged to {}", self.main_branch),
        ]
    }

    /// Write the table to `writer`
    ///
    /// With `colorize` the header is bold and the merged column is green for
    /// merged branches and red otherwise.
    pub fn render<W: io::Write + ?Sized>(&self, writer: &mut W, colorize: bool) -> io::Result<()> {
        let header = self.header();
        let cells = self
            .rows
            .iter()
            .map(|row| [row.branch.clone(), row.merged.to_string()])
            .collect::<Vec<_>>();

        let widths: [usize; 2] = std::array::from_fn(|column| {
            std::iter::once(&header)
                .chain(cells.iter())
                .map(|row| row[column].chars().count())
                .max()
                .unwrap_or(0)
        });

        let separator = format!(
            "+{}+{}+",
            "-".repeat(widths[0] + 2),
            "-".repeat(widths[1] + 2)
        );

        writeln!(writer, "{separator}")?;
        let branch_header = pad(&header[0], widths[0]);
        let merged_header = pad(&header[1], widths[1]);
        if colorize {
            writeln!(
                writer,
                "| {} | {} |",
                branch_header.bold(),
                merged_header.bold()
            )?;
        } else {
            writeln!(writer, "| {branch_header} | {merged_header} |")?;
        }
        writeln!(writer, "{separator}")?;

        if cells.is_empty() {
            return Ok(());
        }

        for (row, [branch, merged]) in self.rows.iter().zip(cells.iter()) {
            let branch = pad(branch, widths[0]);
            let merged = pad(merged, widths[1]);

            if colorize {
                let merged = if row.merged {
                    merged.green()
                } else {
                    merged.red()
                };
                writeln!(writer, "| {branch} | {merged} |")?;
            } else {
                writeln!(writer, "| {branch} | {merged} |")?;
            }
        }
        writeln!(writer, "{separator}")?;

        Ok(())
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}
