//! Chrome appearance: light or dark frame around the colors being edited.

use std::str::FromStr;

/// Whether the chrome is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Appearance::Dark),
            "light" => Ok(Appearance::Light),
            other => Err(format!("unknown appearance {:?} (expected dark or light)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("Light".parse::<Appearance>(), Ok(Appearance::Light));
        assert_eq!(" dark ".parse::<Appearance>(), Ok(Appearance::Dark));
        assert!("sepia".parse::<Appearance>().is_err());
    }
}
