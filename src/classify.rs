//! Leading-character classification
//!
//! Maps the first character of a G-code line to a fixed description.
//! Pure lookups over a static table; nothing here can fail.

/// Description returned for a leading character with no table entry
pub const UNKNOWN: &str = "?";

/// Which description text to report for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionStyle {
    /// One-line summary
    #[default]
    Short,
    /// Longer explanation of the letter's role
    Detailed,
}

/// A single entry of the classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Leading character (case-sensitive)
    pub letter: char,
    /// One-line description printed by default
    pub summary: &'static str,
    /// Longer description printed with `--detailed`
    pub details: &'static str,
}

impl Classification {
    const fn new(letter: char, summary: &'static str, details: &'static str) -> Self {
        Self {
            letter,
            summary,
            details,
        }
    }

    /// Description text for the given style
    pub fn text(&self, style: DescriptionStyle) -> &'static str {
        match style {
            DescriptionStyle::Short => self.summary,
            DescriptionStyle::Detailed => self.details,
        }
    }
}

static CLASSIFICATIONS: [Classification; 22] = [
    Classification::new(
        'G',
        "Standard command, e.g. move to a point",
        "Standard GCode command, such as move to a point",
    ),
    Classification::new(
        'M',
        "Firmware-defined command, e.g. turn on a cooling fan",
        "RepRap-defined command, such as turn on a cooling fan",
    ),
    Classification::new(
        'T',
        "Select tool; a tool is typically a nozzle fed by one or more extruders",
        "Select tool nnn. In RepRap, a tool is typically associated with a nozzle, which may be fed by one or more extruders.",
    ),
    Classification::new(
        'S',
        "Command parameter: time in seconds, temperature, motor voltage",
        "Command parameter, such as time in seconds; temperatures; voltage to send to a motor",
    ),
    Classification::new(
        'P',
        "Command parameter: time in milliseconds, proportional gain (Kp)",
        "Command parameter, such as time in milliseconds; proportional (Kp) in PID Tuning",
    ),
    Classification::new(
        'X',
        "X coordinate (integer or fractional)",
        "A X coordinate, usually to move to. This can be an Integer or Fractional number.",
    ),
    Classification::new(
        'Y',
        "Y coordinate (integer or fractional)",
        "A Y coordinate, usually to move to. This can be an Integer or Fractional number.",
    ),
    Classification::new(
        'Z',
        "Z coordinate (integer or fractional)",
        "A Z coordinate, usually to move to. This can be an Integer or Fractional number.",
    ),
    Classification::new(
        'U',
        "Additional axis coordinate",
        "Additional axis coordinates (RepRapFirmware)",
    ),
    Classification::new(
        'V',
        "Additional axis coordinate",
        "Additional axis coordinates (RepRapFirmware)",
    ),
    Classification::new(
        'W',
        "Additional axis coordinate",
        "Additional axis coordinates (RepRapFirmware)",
    ),
    Classification::new(
        'I',
        "Arc-move X offset; integral gain (Ki)",
        "Parameter - X-offset in arc move; integral (Ki) in PID Tuning",
    ),
    Classification::new(
        'J',
        "Arc-move Y offset",
        "Parameter - Y-offset in arc move",
    ),
    Classification::new(
        'D',
        "Diameter; derivative gain (Kd)",
        "Parameter - used for diameter; derivative (Kd) in PID Tuning",
    ),
    Classification::new(
        'H',
        "Heater number",
        "Parameter - used for heater number in PID Tuning",
    ),
    Classification::new(
        'F',
        "Feedrate (mm/min)",
        "Feedrate in mm per minute. (Speed of print head movement)",
    ),
    Classification::new(
        'R',
        "Temperature parameter",
        "Parameter - used for temperatures",
    ),
    Classification::new(
        'Q',
        "Currently unused parameter",
        "Parameter - not currently used",
    ),
    Classification::new(
        'E',
        "Length of filament to extrude",
        "Length of extrudate. This is exactly like X, Y and Z, but for the length of filament to consume.",
    ),
    Classification::new(
        'N',
        "Line number, used for retransmission requests",
        "Line number. Used to request repeat transmission in the case of communications errors.",
    ),
    Classification::new(
        '*',
        "Checksum for communications error detection",
        "Checksum. Used to check for communications errors.",
    ),
    Classification::new(';', "Comment", "Comment"),
];

/// All known leading characters, in table order
pub fn classifications() -> &'static [Classification] {
    &CLASSIFICATIONS
}

/// Exact-match lookup of a leading character
pub fn lookup(letter: char) -> Option<&'static Classification> {
    CLASSIFICATIONS.iter().find(|c| c.letter == letter)
}

/// Describe a line by its first character.
///
/// An empty line yields `""`; an unrecognized leading character yields [`UNKNOWN`].
/// Nothing past the first character is inspected.
pub fn describe_line(line: &str, style: DescriptionStyle) -> &'static str {
    match line.chars().next() {
        None => "",
        Some(first) => lookup(first).map_or(UNKNOWN, |c| c.text(style)),
    }
}

/// Short description of a line, see [`describe_line`]
pub fn classify_line(line: &str) -> &'static str {
    describe_line(line, DescriptionStyle::Short)
}
