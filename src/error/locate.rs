use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("test is not found: test() or fixture() is not found or it's commented. Place the cursor inside a test() or fixture() call")]
    NotFound,

    #[error("test name \"{name}\" is computed at compile time; use a literal name to run it")]
    ComputedName { name: String },
}

impl LocateError {
    pub fn computed_name(name: impl Into<String>) -> Self {
        Self::ComputedName { name: name.into() }
    }
}
