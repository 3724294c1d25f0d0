//! Era - the four themed boards of the show

use std::fmt;

/// The closed set of eras, one per game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    ChromeAndFins,
    SportingDecades,
    AnalogToDigital,
    NewMillennium,
}

impl Era {
    pub const ALL: [Era; 4] = [
        Era::ChromeAndFins,
        Era::SportingDecades,
        Era::AnalogToDigital,
        Era::NewMillennium,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::ChromeAndFins => "Chrome & Fins",
            Self::SportingDecades => "The Sporting Decades",
            Self::AnalogToDigital => "Analog to Digital",
            Self::NewMillennium => "New Millennium",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::ChromeAndFins => "The people's cars and boulevard icons that put the world on wheels.",
            Self::SportingDecades => "E-Types, Mustangs and mid-engined dreams of the sixties and seventies.",
            Self::AnalogToDigital => "Wedges, roadsters and the first car that plugged in.",
            Self::NewMillennium => "Carbon fibre, a thousand horsepower, and the quiet ones.",
        }
    }

    /// Year range shown on the intro cards, e.g. "1936 – 1959"
    pub fn span(&self) -> &'static str {
        match self {
            Self::ChromeAndFins => "1936 – 1959",
            Self::SportingDecades => "1961 – 1976",
            Self::AnalogToDigital => "1981 – 1999",
            Self::NewMillennium => "2003 – 2019",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
