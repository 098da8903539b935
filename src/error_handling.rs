use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

// Where in the grammar an error belongs: a rule, optionally inside a section
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub section: Option<String>,
    pub rule: String
}

impl Location {
    pub fn rule(rule: &str) -> Self {
        Location {
            section: None,
            rule: rule.to_string()
        }
    }

    pub fn in_section(section: &str, rule: &str) -> Self {
        Location {
            section: Some(section.to_string()),
            rule: rule.to_string()
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.section {
            Some(section) => write!(f, "{}/{}", section, self.rule),
            None => write!(f, "{}", self.rule)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

pub type Errors<T> = Vec<Error<T>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(Location::rule("declarator").to_string(), "declarator");
        assert_eq!(
            Location::in_section("declarations", "declarator").to_string(),
            "declarations/declarator"
        );
    }
}
