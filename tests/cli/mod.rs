//! Helpers for driving the `intvec` binary

use std::process::{Command, Output};

/// Run the binary with `args`, returning its captured output
pub fn run_intvec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_intvec"))
        .args(args)
        .output()
        .expect("failed to launch intvec binary")
}

/// Run the binary and return stdout, failing the test on a non-zero exit
pub fn stdout_of(args: &[&str]) -> Result<String, String> {
    let output = run_intvec(args);

    if !output.status.success() {
        return Err(format!(
            "intvec {:?} exited with {}: {}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
