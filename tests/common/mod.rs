#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the shape-guard binary.
#[macro_export]
macro_rules! shape_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("shape-guard"))
    };
}

/// A temporary tree for a single invocation.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file, and its parent directories, relative to the tree root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".shape-guard.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// A minimal Expo-style application that satisfies [`APP_CONFIG`].
    pub fn create_valid_app(&self) {
        self.create_file(
            "package.json",
            r#"{"name": "door-app", "version": "1.0.0", "dependencies": {"expo": "~50.0.0"}}"#,
        );
        self.create_file(
            "app.json",
            r#"{"expo": {"name": "Door App", "slug": "door-app"}}"#,
        );
        self.create_file(
            "App.js",
            "import LoginScreen from './screens/LoginScreen';\nexport default function App() {}\n",
        );
        self.create_file(
            "screens/LoginScreen.js",
            "import { colors } from '../constants/theme';\nexport default function LoginScreen() {}\n",
        );
        self.create_file("constants/theme.js", "export const colors = {};\n");
    }
}

/// Syntax checking is disabled so the suite does not depend on `node`.
pub const APP_CONFIG: &str = r#"
version = "1"

[syntax]
command = ""

[[rules]]
name = "Essential files"
kind = "existence"
paths = ["package.json", "App.js", "app.json"]

[[rules]]
name = "app.json configuration"
kind = "field-presence"
path = "app.json"
fields = ["expo.name", "expo.slug"]

[[rules]]
name = "Screens import the theme"
kind = "pattern-presence"
paths = ["screens/*.js"]
pattern = "../constants/theme"

[[rules]]
name = "No debug logging"
kind = "pattern-absence"
paths = ["**/*.js"]
pattern = 'console\.log\('
regex = true

[[rules]]
name = "App imports resolve"
kind = "cross-reference"
source = "App.js"
references = { "./screens/LoginScreen" = "screens/LoginScreen.js" }
"#;

pub const TWO_RULE_CONFIG: &str = r#"
[syntax]
command = ""

[[rules]]
name = "Essential files"
kind = "existence"
paths = ["package.json"]

[[rules]]
name = "app.json configuration"
kind = "field-presence"
path = "app.json"
fields = ["expo.name"]
"#;
