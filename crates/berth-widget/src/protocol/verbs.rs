//! Built-in control verbs

/// Built-in message types exchanged with the embedded application
///
/// The wire form of a verb is its name with a `__` prefix, itself placed
/// after the namespace prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    // Inbound control
    Ready,
    Open,
    Maximize,
    Restore,
    MaximizeHeight,
    MinimizeHeight,
    MaximizeWidth,
    MinimizeWidth,
    Reset,
    Hide,
    Destroy,
    SetPreset,
    Detach,
    Dock,
    NativeFullscreen,
    ExitNativeFullscreen,
    // State pushes
    HeightState,
    WidthState,
    Detached,
    IsSmallScreen,
    Preset,
    // Hash exchange
    RequestHash,
    HashReport,
}

impl Verb {
    /// Every verb
    pub const ALL: [Verb; 23] = [
        Verb::Ready,
        Verb::Open,
        Verb::Maximize,
        Verb::Restore,
        Verb::MaximizeHeight,
        Verb::MinimizeHeight,
        Verb::MaximizeWidth,
        Verb::MinimizeWidth,
        Verb::Reset,
        Verb::Hide,
        Verb::Destroy,
        Verb::SetPreset,
        Verb::Detach,
        Verb::Dock,
        Verb::NativeFullscreen,
        Verb::ExitNativeFullscreen,
        Verb::HeightState,
        Verb::WidthState,
        Verb::Detached,
        Verb::IsSmallScreen,
        Verb::Preset,
        Verb::RequestHash,
        Verb::HashReport,
    ];

    /// Wire name, without the namespace prefix
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Ready => "__ready",
            Verb::Open => "__open",
            Verb::Maximize => "__maximize",
            Verb::Restore => "__restore",
            Verb::MaximizeHeight => "__maximizeHeight",
            Verb::MinimizeHeight => "__minimizeHeight",
            Verb::MaximizeWidth => "__maximizeWidth",
            Verb::MinimizeWidth => "__minimizeWidth",
            Verb::Reset => "__reset",
            Verb::Hide => "__hide",
            Verb::Destroy => "__destroy",
            Verb::SetPreset => "__setPreset",
            Verb::Detach => "__detach",
            Verb::Dock => "__dock",
            Verb::NativeFullscreen => "__nativeFullscreen",
            Verb::ExitNativeFullscreen => "__exitNativeFullscreen",
            Verb::HeightState => "__heightState",
            Verb::WidthState => "__widthState",
            Verb::Detached => "__detached",
            Verb::IsSmallScreen => "__isSmallScreen",
            Verb::Preset => "__preset",
            Verb::RequestHash => "__requestHash",
            Verb::HashReport => "__hashReport",
        }
    }

    /// Match a prefix-stripped message type
    pub fn from_wire(bare: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|v| v.as_str() == bare)
    }

    /// Constant name exposed to scripts, e.g. `MSG_TYPE_MAXIMIZE_HEIGHT`
    pub fn constant_name(self) -> String {
        let mut name = String::from("MSG_TYPE_");
        for ch in self.as_str().trim_start_matches('_').chars() {
            if ch.is_ascii_uppercase() {
                name.push('_');
            }
            name.push(ch.to_ascii_uppercase());
        }
        name
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_roundtrip() {
        for verb in Verb::ALL {
            assert_eq!(Verb::from_wire(verb.as_str()), Some(verb));
        }
        assert_eq!(Verb::from_wire("ready"), None);
        assert_eq!(Verb::from_wire("__unknown"), None);
    }

    #[test]
    fn test_constant_names() {
        assert_eq!(Verb::Ready.constant_name(), "MSG_TYPE_READY");
        assert_eq!(
            Verb::ExitNativeFullscreen.constant_name(),
            "MSG_TYPE_EXIT_NATIVE_FULLSCREEN"
        );
        assert_eq!(Verb::IsSmallScreen.constant_name(), "MSG_TYPE_IS_SMALL_SCREEN");
    }
}
