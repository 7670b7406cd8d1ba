//! Text report combining diff statistics, the suggested message and a change summary.

use crate::commit::analysis::ChangeAnalysis;

/// Render the report shown to the user for a successful suggestion.
pub fn render_report(diff_stat: &str, message: &str, analysis: &ChangeAnalysis) -> String {
    format!(
        "\n**Analyzed Changes:**\n{diff_stat}\n\n\
         **Suggested Commit Message:**\n```\n{message}\n```\n\n\
         **Change Summary:**\n\
         - Modified files: {modified}\n\
         - Added files: {added}\n\
         - Deleted files: {deleted}\n\
         - File types: {file_types}\n\
         - Primary change type: {primary}\n",
        modified = analysis.modified.len(),
        added = analysis.added.len(),
        deleted = analysis.deleted.len(),
        file_types = analysis.file_types.join(", "),
        primary = analysis.primary_change_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::analysis::analyze_changes;

    #[test]
    fn test_report_sections() {
        let analysis = analyze_changes("A\tutils.ts\nA\tconfig.json\nM\tREADME.md", 10);
        let report = render_report(
            " 3 files changed, 3 insertions(+)",
            "feat: implement multiple changes",
            &analysis,
        );

        assert!(report.contains("**Analyzed Changes:**\n 3 files changed, 3 insertions(+)\n"));
        assert!(report.contains("**Suggested Commit Message:**\n```\nfeat: implement multiple changes\n```"));
        assert!(report.contains("- Modified files: 1\n"));
        assert!(report.contains("- Added files: 2\n"));
        assert!(report.contains("- Deleted files: 0\n"));
        assert!(report.contains("- File types: ts, json, md\n"));
        assert!(report.ends_with("- Primary change type: mixed\n"));
    }

    #[test]
    fn test_report_with_no_file_types() {
        let analysis = analyze_changes("A\tMakefile", 10);
        let report = render_report("stat", "msg", &analysis);
        assert!(report.contains("- File types: \n"));
        assert!(report.contains("- Primary change type: add\n"));
    }
}
