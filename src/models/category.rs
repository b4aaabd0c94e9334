use std::fmt;

/// Who the discount was issued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lpo,
    Staff,
    None,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Lpo, Category::Staff, Category::None];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Lpo => "LPO",
            Category::Staff => "Staff",
            Category::None => "none",
        }
    }

    /// Accepts any casing of a label ("lpo", "STAFF", ...).
    pub fn from_label(s: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
    }

    /// Labels in keyboard order.
    pub fn labels() -> Vec<&'static str> {
        Category::ALL.iter().map(Category::label).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
