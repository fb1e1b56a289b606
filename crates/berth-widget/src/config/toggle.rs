//! Boolean-or-object options

use serde::{Deserialize, Deserializer};

/// An optional feature given as `false`, `true`, or a custom options object
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Toggle<T> {
    /// Feature disabled
    #[default]
    Off,
    /// Feature enabled with default options
    Defaults,
    /// Feature enabled with the given options
    Custom(T),
}

impl<T: Default> Toggle<T> {
    /// Concrete options when enabled
    pub fn resolve(self) -> Option<T> {
        match self {
            Toggle::Off => None,
            Toggle::Defaults => Some(T::default()),
            Toggle::Custom(options) => Some(options),
        }
    }
}

impl<T> From<bool> for Toggle<T> {
    fn from(enabled: bool) -> Self {
        if enabled {
            Toggle::Defaults
        } else {
            Toggle::Off
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Toggle<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<U> {
            Flag(bool),
            Custom(U),
        }

        Ok(match Option::<Repr<T>>::deserialize(deserializer)? {
            None | Some(Repr::Flag(false)) => Toggle::Off,
            Some(Repr::Flag(true)) => Toggle::Defaults,
            Some(Repr::Custom(options)) => Toggle::Custom(options),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Opts {
        size: u32,
    }

    #[test]
    fn test_deserialize_variants() {
        let off: Toggle<Opts> = serde_json::from_str("false").unwrap();
        let null: Toggle<Opts> = serde_json::from_str("null").unwrap();
        let on: Toggle<Opts> = serde_json::from_str("true").unwrap();
        let custom: Toggle<Opts> = serde_json::from_str(r#"{"size": 3}"#).unwrap();
        assert_eq!(off, Toggle::Off);
        assert_eq!(null, Toggle::Off);
        assert_eq!(on, Toggle::Defaults);
        assert_eq!(custom, Toggle::Custom(Opts { size: 3 }));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Toggle::<Opts>::Off.resolve(), None);
        assert_eq!(Toggle::<Opts>::Defaults.resolve(), Some(Opts::default()));
        assert_eq!(
            Toggle::Custom(Opts { size: 9 }).resolve(),
            Some(Opts { size: 9 })
        );
    }
}
