/// An external dependency coordinate.
///
/// Identity for deduplication purposes is `(group, name)`; the version
/// is payload. An absent version is a legal state: a coordinate may be
/// collected before the declaration carrying its version is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: Option<String>,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.map(String::from),
        }
    }

    /// Parse `"group:name:version"` (or `"group:name"`) shorthand.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, name] => Some(Self::new(*group, *name, None)),
            [group, name, version] => Some(Self::new(*group, *name, Some(version))),
            _ => None,
        }
    }

    /// The `group:name` module string, the textual key a build file
    /// declares this dependency under.
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}:{}", self.group, self.name, version),
            None => write!(f, "{}:{}", self.group, self.name),
        }
    }
}
