//! `launchctl` job operations: listing, load, unload.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::LaunchctlError;
use crate::runner::CommandRunner;

pub const LAUNCHCTL: &str = "/bin/launchctl";

/// Labels of all jobs the daemon currently reports loaded.
///
/// Parsing contract: the last whitespace-delimited token of every output
/// line is taken as a label. This is deliberately not smarter — the header
/// line and lines with whitespace in other columns are handled identically,
/// matching what `launchctl list` has always printed.
pub fn running_labels(runner: &dyn CommandRunner) -> Result<BTreeSet<String>, LaunchctlError> {
    let output = runner
        .run(LAUNCHCTL, &["list"])
        .map_err(|e| LaunchctlError::ListingFailed(e.to_string()))?;
    if output.trim().is_empty() {
        return Err(LaunchctlError::ListingFailed(
            "launchctl list returned no data".to_string(),
        ));
    }

    let mut labels = BTreeSet::new();
    for line in output.lines() {
        if let Some(label) = line.split_whitespace().last() {
            labels.insert(label.to_string());
        }
    }
    Ok(labels)
}

/// `launchctl load [-w] <path>`.
///
/// With `persist`, `-w` both loads the job and clears its `Disabled` flag —
/// callers that did not intend to enable must compensate afterward.
pub fn load(runner: &dyn CommandRunner, path: &Path, persist: bool) -> Result<(), LaunchctlError> {
    run_job_op(runner, "load", path, persist)
}

/// `launchctl unload [-w] <path>`.
///
/// With `persist`, `-w` both unloads the job and sets its `Disabled` flag.
pub fn unload(
    runner: &dyn CommandRunner,
    path: &Path,
    persist: bool,
) -> Result<(), LaunchctlError> {
    run_job_op(runner, "unload", path, persist)
}

fn run_job_op(
    runner: &dyn CommandRunner,
    op: &str,
    path: &Path,
    persist: bool,
) -> Result<(), LaunchctlError> {
    let path = path.display().to_string();
    let mut args = vec![op];
    if persist {
        args.push("-w");
    }
    args.push(&path);
    runner.run(LAUNCHCTL, &args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct ScriptedRunner {
        output: Result<String, ()>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn ok(output: &str) -> Self {
            Self {
                output: Ok(output.to_string()),
                calls: RefCell::new(vec![]),
            }
        }

        fn failing() -> Self {
            Self {
                output: Err(()),
                calls: RefCell::new(vec![]),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str]) -> Result<String, LaunchctlError> {
            self.calls
                .borrow_mut()
                .push(crate::runner::render_command(program, args));
            match &self.output {
                Ok(out) => Ok(out.clone()),
                Err(()) => Err(LaunchctlError::CommandFailed {
                    command: crate::runner::render_command(program, args),
                    status: "exit status: 1".to_string(),
                    stderr: "nope".to_string(),
                }),
            }
        }
    }

    #[test]
    fn listing_takes_last_token_of_each_line() {
        let runner = ScriptedRunner::ok(
            "PID\tStatus\tLabel\n\
             123\t0\tcom.example.running\n\
             -\t0\tcom.example.ondemand\n",
        );
        let labels = running_labels(&runner).unwrap();
        assert!(labels.contains("com.example.running"));
        assert!(labels.contains("com.example.ondemand"));
        // The header parses like any other line; its trailing token comes along.
        assert!(labels.contains("Label"));
    }

    #[test]
    fn listing_tolerates_embedded_whitespace_in_other_columns() {
        let runner = ScriptedRunner::ok("123\tsome status text\tcom.example.spaced\n");
        let labels = running_labels(&runner).unwrap();
        assert!(labels.contains("com.example.spaced"));
        assert!(!labels.contains("text"));
    }

    #[test]
    fn empty_listing_is_an_error() {
        let runner = ScriptedRunner::ok("  \n");
        assert!(matches!(
            running_labels(&runner),
            Err(LaunchctlError::ListingFailed(_))
        ));
    }

    #[test]
    fn failed_listing_is_wrapped_with_detail() {
        let runner = ScriptedRunner::failing();
        match running_labels(&runner) {
            Err(LaunchctlError::ListingFailed(detail)) => {
                assert!(detail.contains("launchctl list"));
            }
            other => panic!("expected ListingFailed, got {other:?}"),
        }
    }

    #[test]
    fn load_includes_write_flag_only_when_persisting() {
        let runner = ScriptedRunner::ok("");
        load(&runner, Path::new("/tmp/a.plist"), true).unwrap();
        load(&runner, Path::new("/tmp/a.plist"), false).unwrap();
        let calls = runner.calls.borrow();
        assert_eq!(calls[0], "/bin/launchctl load -w /tmp/a.plist");
        assert_eq!(calls[1], "/bin/launchctl load /tmp/a.plist");
    }

    #[test]
    fn unload_mirrors_load() {
        let runner = ScriptedRunner::ok("");
        unload(&runner, Path::new("/tmp/a.plist"), true).unwrap();
        let calls = runner.calls.borrow();
        assert_eq!(calls[0], "/bin/launchctl unload -w /tmp/a.plist");
    }
}
