use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncKind {
    Create,
    Update,
    Delete,
    UpToDate,
}

impl SyncKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            SyncKind::Create => "+",
            SyncKind::Update => "~",
            SyncKind::Delete => "-",
            SyncKind::UpToDate => "=",
        }
    }
}

impl fmt::Display for SyncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
