//! Device classification from user-agent strings, and layout breakpoints.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static TABLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tablet|ipad|playbook|silk").expect("valid tablet regex"));
static ANDROID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)android").expect("valid android regex"));
static MOBI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)mobi").expect("valid mobi regex"));
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"Mobile|iP(hone|od)|Android|BlackBerry|IEMobile|Kindle|Silk-Accelerated|(hpw|web)OS|Opera M(obi|ini)",
    )
    .expect("valid mobile regex")
});

/// Broad device class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
            Device::Mobile => "mobile",
        }
    }

    /// Layout widths for this device class
    pub fn breakpoint(&self) -> Breakpoint {
        match self {
            Device::Desktop => BREAKPOINTS.desktop,
            Device::Tablet => BREAKPOINTS.tablet,
            Device::Mobile => BREAKPOINTS.mobile,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Small and big layout width in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub small: u32,
    pub big: u32,
}

/// Breakpoints for every device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub mobile: Breakpoint,
    pub tablet: Breakpoint,
    pub desktop: Breakpoint,
}

pub const BREAKPOINTS: Breakpoints = Breakpoints {
    mobile: Breakpoint { small: 260, big: 575 },
    tablet: Breakpoint { small: 750, big: 1000 },
    desktop: Breakpoint { small: 1200, big: 1700 },
};

/// Classify a user agent.
///
/// Tablet markers are checked first (case-insensitive), including Android
/// agents that do not advertise "mobi". Then the mobile markers
/// (case-sensitive). Everything else is a desktop.
pub fn classify(user_agent: &str) -> Device {
    if TABLET_RE.is_match(user_agent) || is_android_tablet(user_agent) {
        Device::Tablet
    } else if MOBILE_RE.is_match(user_agent) {
        Device::Mobile
    } else {
        Device::Desktop
    }
}

/// Line terminators that end a `.` match in user-agent patterns
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Some "android" with no "mobi" after it on the same line
fn is_android_tablet(user_agent: &str) -> bool {
    ANDROID_RE.find_iter(user_agent).any(|found| {
        let rest = &user_agent[found.end()..];
        let line = rest.split(LINE_TERMINATORS).next().unwrap_or_default();
        !MOBI_RE.is_match(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const ANDROID_PHONE: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Mobile Safari/537.36";
    const ANDROID_TABLET: &str = "Mozilla/5.0 (Linux; Android 13; SM-X700) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";
    const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

    #[test]
    fn test_phones() {
        assert_eq!(classify(IPHONE), Device::Mobile);
        assert_eq!(classify(ANDROID_PHONE), Device::Mobile);
        assert_eq!(classify("BlackBerry9700/5.0"), Device::Mobile);
        assert_eq!(classify("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"), Device::Mobile);
    }

    #[test]
    fn test_tablets() {
        assert_eq!(classify(IPAD), Device::Tablet);
        assert_eq!(classify(ANDROID_TABLET), Device::Tablet);
        assert_eq!(classify("Mozilla/5.0 (PlayBook; U; RIM Tablet OS 2.1.0)"), Device::Tablet);
        assert_eq!(classify("Kindle Silk-Accelerated"), Device::Tablet);
    }

    #[test]
    fn test_android_checked_per_line() {
        assert_eq!(classify("android\nandroid mobi"), Device::Tablet);
        assert_eq!(classify("Android 9\rMobile"), Device::Tablet);
        assert_eq!(classify("Android 9\u{2028}Mobile"), Device::Tablet);
        assert_eq!(classify("Android 9\u{2029}Mobile"), Device::Tablet);
        assert_eq!(classify("Android 9 Mobile\nAndroid Mobile"), Device::Mobile);
    }

    #[test]
    fn test_desktop() {
        assert_eq!(classify(DESKTOP), Device::Desktop);
        assert_eq!(classify(""), Device::Desktop);
    }

    #[test]
    fn test_mobile_markers_are_case_sensitive() {
        assert_eq!(classify("custom mobile agent"), Device::Desktop);
        assert_eq!(classify("custom Mobile agent"), Device::Mobile);
    }

    #[test]
    fn test_display_and_breakpoints() {
        assert_eq!(Device::Tablet.to_string(), "tablet");
        assert_eq!(Device::Mobile.breakpoint(), Breakpoint { small: 260, big: 575 });
        assert_eq!(Device::Desktop.breakpoint().big, 1700);
        assert_eq!(BREAKPOINTS.tablet.small, 750);
    }
}
