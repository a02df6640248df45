#![allow(dead_code)]

pub mod file;

/// Rows of a rendered report as `(branch, merged)` pairs, in output order
///
/// Header and border lines are skipped.
pub fn report_rows(stdout: &str) -> Vec<(String, String)> {
    stdout
        .lines()
        .filter(|line| line.starts_with("| "))
        .skip(1)
        .filter_map(|line| {
            let mut cells = line
                .trim_matches('|')
                .split('|')
                .map(|cell| cell.trim().to_string());
            Some((cells.next()?, cells.next()?))
        })
        .collect()
}

/// Look up the merged column for `branch`, panicking if the row is missing
pub fn merged_status(rows: &[(String, String)], branch: &str) -> String {
    rows.iter()
        .find(|(name, _)| name == branch)
        .map(|(_, merged)| merged.clone())
        .unwrap_or_else(|| panic!("no row for branch {branch} in {rows:?}"))
}
