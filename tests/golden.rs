//! Golden tests for incflat
//!
//! These tests flatten the sample project in tests/fixtures and compare the
//! output byte-for-byte with checked-in expectations.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample project
fn sample_project() -> PathBuf {
    fixtures_dir().join("sample_project")
}

/// Create a command for running incflat binary
fn incflat_cmd() -> Command {
    Command::cargo_bin("incflat").expect("Failed to find incflat binary")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_flatten_with_project_config() {
        let expected = fs::read(fixtures_dir().join("expected").join("main.cpp")).unwrap();

        let mut cmd = incflat_cmd();
        cmd.current_dir(sample_project()).arg("solution/main.cpp");

        let output = cmd.output().expect("failed to execute");
        assert!(output.status.success());
        assert_eq!(output.stdout, expected);
    }

    #[test]
    fn golden_flatten_with_explicit_include_dir() {
        let expected = fs::read(fixtures_dir().join("expected").join("main.cpp")).unwrap();

        let mut cmd = incflat_cmd();
        cmd.current_dir(fixtures_dir())
            .arg("--no-config")
            .arg("-I")
            .arg("sample_project/lib")
            .arg("sample_project/solution/main.cpp");

        let output = cmd.output().expect("failed to execute");
        assert!(output.status.success());
        assert_eq!(output.stdout, expected);
    }

    #[test]
    fn golden_flatten_without_library_dir() {
        let mut cmd = incflat_cmd();
        cmd.current_dir(sample_project())
            .arg("--no-config")
            .arg("solution/main.cpp");

        let output = cmd.output().expect("failed to execute");
        assert!(output.status.success());

        let expected = "#include <iostream>\n\
#pragma once\n\
#include <spcppl/base.h>\n\
\n\
inline long long twice(long long x) { return 2 * x; }\n\
#include <spcppl/math.h>\n\
\n\
int main() {\n\
    std::cout << gcd(12, 18) << ' ' << twice(21) << '\\n';\n\
}\n";
        assert_eq!(output.stdout, expected.as_bytes());
    }

    #[test]
    fn golden_output_is_stable_across_runs() {
        let run = || {
            incflat_cmd()
                .current_dir(sample_project())
                .arg("solution/main.cpp")
                .output()
                .expect("failed to execute")
                .stdout
        };
        assert_eq!(run(), run());
    }
}
