use std_util::str;

/// A property identifier split into its camel-case words.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let parts = str::split_camel_case(src)
            .into_iter()
            .map(String::from)
            .collect();
        Self { parts }
    }

    /// Storage name derived by convention: `userId` → `USER_ID`.
    pub fn upper_snake_case(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.to_uppercase())
            .collect::<Vec<_>>()
            .join("_")
    }
}
