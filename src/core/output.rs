/// Separator placed between stdout and stderr when a script wrote to both.
pub const STDERR_SEPARATOR: &str = "\n---STDERR---\n";

/// Fold captured stdout/stderr into the single output string of a report.
///
/// Stderr alone is flagged with an `ERROR: ` prefix; both streams are kept
/// apart by [`STDERR_SEPARATOR`]; otherwise the streams are concatenated.
pub fn compose_output(stdout: &str, stderr: &str) -> String {
    let out = stdout.trim();
    let err = stderr.trim();

    match (out.is_empty(), err.is_empty()) {
        (true, false) => format!("ERROR: {err}"),
        (false, false) => format!("{out}{STDERR_SEPARATOR}{err}"),
        _ => format!("{stdout}{stderr}").trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::stdout_only("Task Deploy completed\n", "", "Task Deploy completed")]
    #[case::stderr_only("", "boom\n", "ERROR: boom")]
    #[case::blank_stdout_counts_as_empty("  \n", " boom ", "ERROR: boom")]
    #[case::both("done\n", "warning: slow\n", "done\n---STDERR---\nwarning: slow")]
    #[case::nothing("", "", "")]
    #[case::whitespace_only(" \n", "\t", "")]
    fn composes_streams(#[case] stdout: &str, #[case] stderr: &str, #[case] expected: &str) {
        assert_eq!(compose_output(stdout, stderr), expected);
    }
}
