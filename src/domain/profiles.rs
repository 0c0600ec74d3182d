use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_profile_label;
use std::collections::BTreeSet;
use std::fmt;

/// Label that counts as active when nothing else is.
pub const DEFAULT_PROFILE: &str = "default";

/// The set of activation labels supplied by the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveProfiles {
    labels: BTreeSet<String>,
}

impl ActiveProfiles {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = labels
            .into_iter()
            .map(|label| label.as_ref().trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();
        Self { labels }
    }

    /// 解析逗號分隔的清單，例如 "test, dev"
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// The labels conditions are evaluated against: the explicit set, or
    /// `{default}` when it is empty.
    pub fn effective(&self) -> ActiveProfiles {
        if self.labels.is_empty() {
            Self::new([DEFAULT_PROFILE])
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for ActiveProfiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileExpr {
    Active(String),
    NotActive(String),
}

impl ProfileExpr {
    /// `label` or `!label`; the label must be one token with no spaces.
    pub fn parse(expression: &str) -> Result<Self> {
        let trimmed = expression.trim();
        let invalid = || AppError::InvalidProfileExpression {
            expression: expression.to_string(),
        };

        let (negated, label) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if label.trim() != label {
            return Err(invalid());
        }
        validate_profile_label("profile condition", label).map_err(|_| invalid())?;

        let label = label.to_string();
        Ok(if negated {
            ProfileExpr::NotActive(label)
        } else {
            ProfileExpr::Active(label)
        })
    }

    fn matches(&self, effective: &ActiveProfiles) -> bool {
        match self {
            ProfileExpr::Active(label) => effective.contains(label),
            ProfileExpr::NotActive(label) => !effective.contains(label),
        }
    }
}

/// Any-of gate over profile expressions. No expressions means "always".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileCondition {
    exprs: Vec<ProfileExpr>,
}

impl ProfileCondition {
    pub fn always() -> Self {
        Self::default()
    }

    /// Condition satisfied when `label` is active.
    pub fn on(label: &str) -> Self {
        Self {
            exprs: vec![ProfileExpr::Active(label.to_string())],
        }
    }

    pub fn parse(expressions: &[&str]) -> Result<Self> {
        let exprs = expressions
            .iter()
            .map(|expr| ProfileExpr::parse(expr))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { exprs })
    }

    pub fn expressions(&self) -> &[ProfileExpr] {
        &self.exprs
    }

    pub fn matches(&self, active: &ActiveProfiles) -> bool {
        if self.exprs.is_empty() {
            return true;
        }
        let effective = active.effective();
        self.exprs.iter().any(|expr| expr.matches(&effective))
    }
}

impl fmt::Display for ProfileCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exprs.is_empty() {
            return write!(f, "<always>");
        }
        let parts: Vec<String> = self
            .exprs
            .iter()
            .map(|expr| match expr {
                ProfileExpr::Active(label) => label.clone(),
                ProfileExpr::NotActive(label) => format!("!{}", label),
            })
            .collect();
        write!(f, "{}", parts.join(" | "))
    }
}
