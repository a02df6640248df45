use crate::OutputFormat;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::report::{MergeReport, ReportRow};
use crate::config::Config;
use crate::errors::Result;
use std::io::Write;
use tracing::debug;

impl Repository {
    /// Run the whole pipeline and write the report
    ///
    /// Nothing is written unless every reference was checked successfully.
    pub fn merged(&self, config: &Config) -> Result<()> {
        let report = self.merge_report(config.main_branch())?;

        match config.format() {
            OutputFormat::Table => {
                let mut writer = self.writer();
                report.render(&mut *writer, config.presentation().color)?;
                writer.flush()?;
            }
        }

        Ok(())
    }

    /// Check every branch against the tip of `main_branch`
    ///
    /// Rows follow enumeration order. The main branch itself is not special
    /// cased and shows up as merged.
    pub fn merge_report(&self, main_branch: &BranchName) -> Result<MergeReport> {
        let main_oid = self.resolve_branch(main_branch)?;
        let mut report = MergeReport::new(main_branch.clone());

        for branch_ref in self.refs().branches()? {
            let branch_ref = branch_ref?;
            let name = branch_ref.name().short_name();
            let is_ancestor = self.is_ancestor(branch_ref.oid(), &main_oid)?;

            debug!(name, is_ancestor, "ref");
            report.append(ReportRow::new(name.to_string(), is_ancestor));
        }

        debug!(
            repository = %self.path().display(),
            main = %main_branch,
            branches = report.rows().len(),
            "checked branches"
        );

        Ok(report)
    }
}
