use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Modifiers: i64 {
        const None = 0;
        const NoSliderVelocity = 1 << 0;
        const Speed05X = 1 << 1;
        const Speed06X = 1 << 2;
        const Speed07X = 1 << 3;
        const Speed08X = 1 << 4;
        const Speed09X = 1 << 5;
        const Speed11X = 1 << 6;
        const Speed12X = 1 << 7;
        const Speed13X = 1 << 8;
        const Speed14X = 1 << 9;
        const Speed15X = 1 << 10;
        const Speed16X = 1 << 11;
        const Speed17X = 1 << 12;
        const Speed18X = 1 << 13;
        const Speed19X = 1 << 14;
        const Speed20X = 1 << 15;
        const Strict = 1 << 16;
        const Chill = 1 << 17;
        const NoPause = 1 << 18;
        const Autoplay = 1 << 19;
        const Paused = 1 << 20;
        const NoFail = 1 << 21;
        const NoLongNotes = 1 << 22;
        const Randomize = 1 << 23;
        const Speed055X = 1 << 24;
        const Speed065X = 1 << 25;
        const Speed075X = 1 << 26;
        const Speed085X = 1 << 27;
        const Speed095X = 1 << 28;
        const Inverse = 1 << 29;
        const FullLN = 1 << 30;
        const Mirror = 1 << 31;
        const Coop = 1 << 32;
        const Speed105X = 1 << 33;
        const Speed115X = 1 << 34;
        const Speed125X = 1 << 35;
        const Speed135X = 1 << 36;
        const Speed145X = 1 << 37;
        const Speed155X = 1 << 38;
        const Speed165X = 1 << 39;
        const Speed175X = 1 << 40;
        const Speed185X = 1 << 41;
        const Speed195X = 1 << 42;
        const HealthAdjust = 1 << 43;
        const NoMiss = 1 << 44;
    }
}

const RATE_VALUES: [(Modifiers, f32); 30] = [
    (Modifiers::Speed05X, 0.5),
    (Modifiers::Speed055X, 0.55),
    (Modifiers::Speed06X, 0.6),
    (Modifiers::Speed065X, 0.65),
    (Modifiers::Speed07X, 0.7),
    (Modifiers::Speed075X, 0.75),
    (Modifiers::Speed08X, 0.8),
    (Modifiers::Speed085X, 0.85),
    (Modifiers::Speed09X, 0.9),
    (Modifiers::Speed095X, 0.95),
    (Modifiers::Speed105X, 1.05),
    (Modifiers::Speed11X, 1.1),
    (Modifiers::Speed115X, 1.15),
    (Modifiers::Speed12X, 1.2),
    (Modifiers::Speed125X, 1.25),
    (Modifiers::Speed13X, 1.3),
    (Modifiers::Speed135X, 1.35),
    (Modifiers::Speed14X, 1.4),
    (Modifiers::Speed145X, 1.45),
    (Modifiers::Speed15X, 1.5),
    (Modifiers::Speed155X, 1.55),
    (Modifiers::Speed16X, 1.6),
    (Modifiers::Speed165X, 1.65),
    (Modifiers::Speed17X, 1.7),
    (Modifiers::Speed175X, 1.75),
    (Modifiers::Speed18X, 1.8),
    (Modifiers::Speed185X, 1.85),
    (Modifiers::Speed19X, 1.9),
    (Modifiers::Speed195X, 1.95),
    (Modifiers::Speed20X, 2.0),
];

impl Modifiers {
    /// Every playback-speed modifier.
    pub const RATES: Modifiers = {
        let mut bits = 0;
        let mut i = 0;
        while i < RATE_VALUES.len() {
            bits |= RATE_VALUES[i].0.bits();
            i += 1;
        }
        Modifiers::from_bits_retain(bits)
    };

    pub fn has_rate(&self) -> bool {
        self.intersects(Modifiers::RATES)
    }

    /// True when at least one bit is set and every set bit is a rate modifier.
    pub fn is_rate_only(&self) -> bool {
        !self.is_empty() && Modifiers::RATES.contains(*self)
    }

    /// Playback rate these modifiers apply, 1.0 when no rate modifier is set.
    /// With several rate bits set, the lowest rate wins.
    pub fn rate(&self) -> f32 {
        RATE_VALUES
            .iter()
            .find(|(modifier, _)| self.contains(*modifier))
            .map_or(1.0, |(_, rate)| *rate)
    }
}

/// Formats as the raw integer, which is what the API expects in paths.
impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.bits())
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // unknown bits are kept so values survive a round trip
        i64::deserialize(deserializer).map(Modifiers::from_bits_retain)
    }
}
