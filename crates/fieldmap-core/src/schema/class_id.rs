use std::{borrow::Borrow, fmt, sync::Arc};

/// Fully qualified identifier of a type, e.g. `app::model::User`.
///
/// Identifiers are compared by their full string, so two types sharing a
/// simple name in different modules never collide.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ClassId(Arc<str>);

impl ClassId {
    pub fn new(id: impl AsRef<str>) -> ClassId {
        ClassId(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last `::` separated segment of the identifier.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or(&self.0)
    }
}

impl Borrow<str> for ClassId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ClassId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassId {
    fn from(src: &str) -> ClassId {
        ClassId::new(src)
    }
}

impl From<String> for ClassId {
    fn from(src: String) -> ClassId {
        ClassId(Arc::from(src))
    }
}

impl From<&ClassId> for ClassId {
    fn from(src: &ClassId) -> ClassId {
        src.clone()
    }
}

impl From<ClassId> for String {
    fn from(src: ClassId) -> String {
        src.0.to_string()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({:?})", &*self.0)
    }
}
