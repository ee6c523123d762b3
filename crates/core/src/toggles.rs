//! Console toggle enums and the name mapping they share.
//!
//! A toggle is a command-line switch (`/Silent`, `-NoWait`) matched against
//! the member names of one of the enums below. The [`Toggle`] trait supplies
//! the name mapping and a [`ToggleGroup`] descriptor, so argument-vector
//! scans can reject unknown or ambiguous switches without knowing the
//! concrete enum type.

/// Describes one toggle enum: a readable group name plus all member names
/// in declaration order.
#[derive(Debug)]
pub struct ToggleGroup {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

impl ToggleGroup {
    pub fn contains(&self, name: &str) -> bool {
        self.members
            .iter()
            .any(|member| member.eq_ignore_ascii_case(name))
    }
}

/// Name mapping for switch-style enums.
///
/// `variants()` and `group().members` must list the members in the same
/// declaration order; that order is the tie-break when matching toggles.
pub trait Toggle: Copy + PartialEq + Sized + 'static {
    fn group() -> &'static ToggleGroup;

    fn variants() -> &'static [Self];

    fn name(self) -> &'static str;

    fn from_name(name: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(name))
    }
}

/// How much the console shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLevel {
    Full,
    Compact,
    Silent,
}

static DISPLAY_LEVEL_GROUP: ToggleGroup = ToggleGroup {
    name: "display level",
    members: &["Full", "Compact", "Silent"],
};

impl Toggle for DisplayLevel {
    fn group() -> &'static ToggleGroup {
        &DISPLAY_LEVEL_GROUP
    }

    fn variants() -> &'static [Self] {
        &[Self::Full, Self::Compact, Self::Silent]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Compact => "Compact",
            Self::Silent => "Silent",
        }
    }
}

/// Whether error lines reach the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    Errors,
    NoErrors,
}

static ERROR_MODE_GROUP: ToggleGroup = ToggleGroup {
    name: "error mode",
    members: &["Errors", "NoErrors"],
};

impl Toggle for ErrorMode {
    fn group() -> &'static ToggleGroup {
        &ERROR_MODE_GROUP
    }

    fn variants() -> &'static [Self] {
        &[Self::Errors, Self::NoErrors]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Errors => "Errors",
            Self::NoErrors => "NoErrors",
        }
    }
}

/// Whether the process waits for a key press before exiting.
///
/// Unlike the other console modes, wait mode survives scope restoration:
/// it controls behavior after the run, not during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitMode {
    /// Wait only when the run failed.
    WaitError,
    Wait,
    NoWait,
}

static WAIT_MODE_GROUP: ToggleGroup = ToggleGroup {
    name: "wait mode",
    members: &["WaitError", "Wait", "NoWait"],
};

impl Toggle for WaitMode {
    fn group() -> &'static ToggleGroup {
        &WAIT_MODE_GROUP
    }

    fn variants() -> &'static [Self] {
        &[Self::WaitError, Self::Wait, Self::NoWait]
    }

    fn name(self) -> &'static str {
        match self {
            Self::WaitError => "WaitError",
            Self::Wait => "Wait",
            Self::NoWait => "NoWait",
        }
    }
}

/// Whether executing a nested command file changes into its directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathChangeMode {
    ChangePath,
    KeepPath,
}

static PATH_CHANGE_GROUP: ToggleGroup = ToggleGroup {
    name: "path change mode",
    members: &["ChangePath", "KeepPath"],
};

impl Toggle for PathChangeMode {
    fn group() -> &'static ToggleGroup {
        &PATH_CHANGE_GROUP
    }

    fn variants() -> &'static [Self] {
        &[Self::ChangePath, Self::KeepPath]
    }

    fn name(self) -> &'static str {
        match self {
            Self::ChangePath => "ChangePath",
            Self::KeepPath => "KeepPath",
        }
    }
}
