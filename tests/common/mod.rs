//! Common test utilities for jpgopt-setup integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Shell script standing in for a Python interpreter. It answers
/// `--version`, `-c "import X"` (importable iff `mod_X` exists in the state
/// directory), `-m pip ...` (logged; creates the modules listed in
/// `pip_fixes`; exits with the code in `pip_exit`) and `-m streamlit ...`
/// (logged to `server.log`).
const FAKE_PYTHON: &str = r#"#!/bin/sh
STATE_DIR="__STATE__"
case "$1" in
  --version)
    echo "Python 3.12.4"
    exit 0
    ;;
  -c)
    mod="${2#import }"
    [ -f "$STATE_DIR/mod_$mod" ] && exit 0
    exit 1
    ;;
  -m)
    shift
    tool="$1"
    shift
    if [ "$tool" = "pip" ]; then
      echo "pip $*" >> "$STATE_DIR/pip.log"
      if [ -f "$STATE_DIR/pip_fixes" ]; then
        while IFS= read -r m || [ -n "$m" ]; do
          touch "$STATE_DIR/mod_$m"
        done < "$STATE_DIR/pip_fixes"
      fi
      if [ -f "$STATE_DIR/pip_exit" ]; then
        exit "$(cat "$STATE_DIR/pip_exit")"
      fi
      exit 0
    fi
    if [ "$tool" = "streamlit" ]; then
      echo "streamlit $*" > "$STATE_DIR/server.log"
      exit 0
    fi
    exit 0
    ;;
esac
exit 0
"#;

/// Opener stand-in for the detached launch: logs its arguments
const FAKE_OPENER: &str = r#"#!/bin/sh
echo "$@" > "__STATE__/launch.log"
exit 0
"#;

/// A throwaway environment for integration tests: a fake interpreter, a
/// distribution directory and an applications directory, all under one
/// temp root.
pub struct TestEnv {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("pystate")).expect("Failed to create state dir");
        std::fs::create_dir_all(path.join("dist")).expect("Failed to create dist dir");
        std::fs::create_dir_all(path.join("apps")).expect("Failed to create apps dir");
        Self { temp, path }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.path.join("pystate")
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.path.join("dist")
    }

    pub fn apps_dir(&self) -> PathBuf {
        self.path.join("apps")
    }

    /// Write the fake interpreter script and return its path
    #[cfg(unix)]
    pub fn fake_python(&self) -> PathBuf {
        self.write_script("python3", FAKE_PYTHON)
    }

    /// Write the fake opener script (for JPGOPT_OPEN) and return its path
    #[cfg(unix)]
    pub fn fake_opener(&self) -> PathBuf {
        self.write_script("opener", FAKE_OPENER)
    }

    #[cfg(unix)]
    fn write_script(&self, name: &str, template: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script_path = self.path.join(name);
        let content = template.replace("__STATE__", &self.state_dir().display().to_string());
        std::fs::write(&script_path, content).expect("Failed to write script");
        std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod script");
        script_path
    }

    /// Make `import <module>` succeed under the fake interpreter
    pub fn mark_module(&self, module: &str) {
        std::fs::write(self.state_dir().join(format!("mod_{module}")), "")
            .expect("Failed to mark module");
    }

    /// Modules that appear after any pip invocation
    pub fn set_pip_provides(&self, modules: &[&str]) {
        std::fs::write(self.state_dir().join("pip_fixes"), modules.join("\n"))
            .expect("Failed to write pip_fixes");
    }

    /// Exit code every pip invocation reports
    pub fn set_pip_exit(&self, code: i32) {
        std::fs::write(self.state_dir().join("pip_exit"), code.to_string())
            .expect("Failed to write pip_exit");
    }

    pub fn pip_log(&self) -> String {
        std::fs::read_to_string(self.state_dir().join("pip.log")).unwrap_or_default()
    }

    pub fn server_log(&self) -> String {
        std::fs::read_to_string(self.state_dir().join("server.log")).unwrap_or_default()
    }

    pub fn launch_log(&self) -> String {
        std::fs::read_to_string(self.state_dir().join("launch.log")).unwrap_or_default()
    }

    /// Create the app bundle in the distribution directory
    pub fn make_bundle(&self) -> PathBuf {
        let bundle = self.dist_dir().join("JPG Optimizer Pro.app");
        std::fs::create_dir_all(bundle.join("Contents")).expect("Failed to create bundle");
        std::fs::write(bundle.join("Contents/Info.plist"), "<plist/>")
            .expect("Failed to write Info.plist");
        bundle
    }

    /// Create the web app entry point in the distribution directory
    pub fn make_web_app(&self) {
        std::fs::write(self.dist_dir().join("app.py"), "# streamlit entry")
            .expect("Failed to write app.py");
    }

    /// Write a requirements manifest into the distribution directory
    pub fn write_requirements(&self, content: &str) {
        std::fs::write(self.dist_dir().join("requirements.txt"), content)
            .expect("Failed to write requirements.txt");
    }

    /// The installed bundle path under the applications directory
    pub fn installed_bundle(&self) -> PathBuf {
        self.apps_dir().join("JPG Optimizer Pro.app")
    }

    /// Fresh command for the real binary with a clean JPGOPT_* environment
    #[allow(deprecated)]
    pub fn cmd() -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("jpgopt-setup").expect("binary");
        for var in [
            "JPGOPT_PYTHON",
            "JPGOPT_SOURCE_DIR",
            "JPGOPT_APPLICATIONS_DIR",
            "JPGOPT_CJPEG",
            "JPGOPT_OPEN",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }
}
