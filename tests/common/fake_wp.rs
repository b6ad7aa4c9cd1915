//! A shell script standing in for WP-CLI.
//!
//! Every invocation appends its arguments to a log file. Subcommands listed
//! in `failing` exit 1; `eval` probes answer `no` unless the feature is
//! listed in `features`.

use std::path::{Path, PathBuf};

pub struct FakeWp {
    pub script: PathBuf,
    pub log: PathBuf,
}

impl FakeWp {
    #[cfg(unix)]
    pub fn install(dir: &Path, failing: &[&str], probe_answer: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("fake-wp");
        let log = dir.join("wp-calls.log");

        let fail_cases: String = failing
            .iter()
            .map(|sub| format!("  \"{sub}\") echo \"Error: {sub} broke\" >&2; exit 1 ;;\n"))
            .collect();
        let body = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> '{log}'\n\
             case \"$1 $2\" in\n\
             {fail_cases}\
             esac\n\
             case \"$1 $2\" in\n\
             \"eval echo\"*) echo '{probe_answer}' ;;\n\
             *) echo \"Success: $*\" ;;\n\
             esac\n\
             exit 0\n",
            log = log.display(),
        );
        std::fs::write(&script, body).expect("write fake wp");
        let mut perms = std::fs::metadata(&script).expect("stat fake wp").permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).expect("chmod fake wp");

        Self { script, log }
    }

    /// Recorded invocations, one argument string per call
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
