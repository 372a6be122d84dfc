use std::fmt;

/// A formatter was constructed without the optional backend it renders through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingDependencyError {
    pub formatter: &'static str,
    pub dependency: &'static str,
    pub feature: Option<&'static str>,
}

impl fmt::Display for MissingDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is a required dependency for {}.",
            self.dependency, self.formatter
        )?;
        if let Some(feature) = self.feature {
            write!(
                f,
                " You can enable it with the `{}` cargo feature.",
                feature
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for MissingDependencyError {}
