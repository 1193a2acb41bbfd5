use std::process::Command;

/// Status of the external tools the probe relies on
#[derive(Debug, Clone)]
pub struct DependencyStatus;

impl DependencyStatus {
    /// Check all dependencies
    pub fn check() -> bool {
        check_command("mediainfo", &["--Version"])
    }
}

/// Check if a command can be spawned. The exit status is ignored since some
/// mediainfo builds exit non-zero after printing their version.
fn check_command(cmd: &str, args: &[&str]) -> bool {
    Command::new(cmd)
        .args(args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_is_unavailable() {
        assert!(!check_command("nfomaker-no-such-tool", &["--version"]));
    }
}
