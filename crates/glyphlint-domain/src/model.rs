use std::fmt;

/// Pressure level, totally ordered `P0 < P1 < P2 < P3`.
///
/// `P3` is freeze mode: while it is the highest declared pressure, no pass claim is legal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pressure {
    #[default]
    P0,
    P1,
    P2,
    P3,
}

impl Pressure {
    /// Lookup order for selecting the pressure in effect: highest first.
    pub const DESCENDING: [Pressure; 4] = [Pressure::P3, Pressure::P2, Pressure::P1, Pressure::P0];

    pub fn as_str(self) -> &'static str {
        match self {
            Pressure::P0 => "P0",
            Pressure::P1 => "P1",
            Pressure::P2 => "P2",
            Pressure::P3 => "P3",
        }
    }

    /// The token declaring this pressure, e.g. `~P2`.
    pub fn token(self) -> &'static str {
        match self {
            Pressure::P0 => "~P0",
            Pressure::P1 => "~P1",
            Pressure::P2 => "~P2",
            Pressure::P3 => "~P3",
        }
    }

    /// Parse a policy value such as `"P1"`. Exact match only.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "P0" => Some(Pressure::P0),
            "P1" => Some(Pressure::P1),
            "P2" => Some(Pressure::P2),
            "P3" => Some(Pressure::P3),
            _ => None,
        }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readiness tier claimed with `~READY:<tier>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadyTier {
    Core,
    Ui,
    Demo,
}

impl ReadyTier {
    /// Lookup order when several tiers are claimed: the first present one governs.
    pub const PRIORITY: [ReadyTier; 3] = [ReadyTier::Core, ReadyTier::Ui, ReadyTier::Demo];

    pub fn as_str(self) -> &'static str {
        match self {
            ReadyTier::Core => "core",
            ReadyTier::Ui => "ui",
            ReadyTier::Demo => "demo",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ReadyTier::Core => "~READY:core",
            ReadyTier::Ui => "~READY:ui",
            ReadyTier::Demo => "~READY:demo",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "core" => Some(ReadyTier::Core),
            "ui" => Some(ReadyTier::Ui),
            "demo" => Some(ReadyTier::Demo),
            _ => None,
        }
    }
}

impl fmt::Display for ReadyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
