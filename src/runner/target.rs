use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::resolver::Selection;
use crate::scanner::ConstructKind;

/// Browser alias passed straight through to TestCafe (`chrome`, `firefox`,
/// `ie`, `chrome:headless`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Browser(String);

impl Browser {
    pub const CHROME: &'static str = "chrome";

    pub fn new(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    pub fn chrome() -> Self {
        Self::new(Self::CHROME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Browser {
    fn default() -> Self {
        Self::chrome()
    }
}

impl FromStr for Browser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alias = s.trim();
        if alias.is_empty() || alias.chars().any(char::is_whitespace) {
            return Err(format!("invalid browser alias: {s:?}"));
        }
        Ok(Self::new(alias))
    }
}

impl std::fmt::Display for Browser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeKind {
    Test,
    Fixture,
    File,
}

impl ScopeKind {
    /// TestCafe filter flag, `None` for whole-file runs.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            ScopeKind::Test => Some("--test"),
            ScopeKind::Fixture => Some("--fixture"),
            ScopeKind::File => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeKind::Test => "test",
            ScopeKind::Fixture => "fixture",
            ScopeKind::File => "file",
        }
    }
}

impl From<ConstructKind> for ScopeKind {
    fn from(kind: ConstructKind) -> Self {
        match kind {
            ConstructKind::Test => ScopeKind::Test,
            ConstructKind::Fixture => ScopeKind::Fixture,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTarget {
    pub browser: Browser,
    pub file_path: PathBuf,
    pub scope: ScopeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_name: Option<String>,
}

impl RunTarget {
    pub fn test(browser: Browser, file_path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            browser,
            file_path: file_path.into(),
            scope: ScopeKind::Test,
            scope_name: Some(name.into()),
        }
    }

    pub fn fixture(
        browser: Browser,
        file_path: impl Into<PathBuf>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            browser,
            file_path: file_path.into(),
            scope: ScopeKind::Fixture,
            scope_name: Some(name.into()),
        }
    }

    pub fn file(browser: Browser, file_path: impl Into<PathBuf>) -> Self {
        Self {
            browser,
            file_path: file_path.into(),
            scope: ScopeKind::File,
            scope_name: None,
        }
    }

    pub fn from_selection(
        browser: Browser,
        file_path: impl Into<PathBuf>,
        selection: Selection,
    ) -> Self {
        Self {
            browser,
            file_path: file_path.into(),
            scope: selection.kind.into(),
            scope_name: Some(selection.name),
        }
    }

    /// TestCafe arguments: `[browser, file, --test|--fixture, name]`.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            self.browser.to_string(),
            self.file_path.to_string_lossy().into_owned(),
        ];
        if let (Some(flag), Some(name)) = (self.scope.flag(), &self.scope_name) {
            args.push(flag.to_string());
            args.push(name.clone());
        }
        args
    }
}

impl std::fmt::Display for RunTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.scope_name {
            Some(name) => write!(
                f,
                "{} \"{}\" in {} on {}",
                self.scope.as_str(),
                name,
                self.file_path.display(),
                self.browser
            ),
            None => write!(f, "{} on {}", self.file_path.display(), self.browser),
        }
    }
}

/// Node debug launch description for running a target under an editor's
/// debugger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
    pub cwd: String,
}

impl LaunchConfig {
    pub fn new(target: &RunTarget, program: &Path, cwd: &Path) -> Self {
        let name = match target.scope {
            ScopeKind::File => "Launch current file with TestCafe",
            ScopeKind::Fixture => "Launch current fixture with TestCafe",
            ScopeKind::Test => "Launch current test with TestCafe",
        };
        Self {
            kind: "node".to_string(),
            request: "launch".to_string(),
            name: name.to_string(),
            program: program.to_string_lossy().into_owned(),
            args: target.args(),
            cwd: cwd.to_string_lossy().into_owned(),
        }
    }
}
