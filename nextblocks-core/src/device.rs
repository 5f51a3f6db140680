/// Device classification from the host's user agent string

/// Platform markers that identify a small-screen device, matched case-insensitively
pub const MOBILE_PLATFORMS: &[&str] = &[
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Derived screen classification that drives scale, spacing and backdrop choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub is_mobile: bool,
}

impl DeviceProfile {
    pub const DESKTOP: Self = Self { is_mobile: false };
    pub const MOBILE: Self = Self { is_mobile: true };
}

/// Classify the environment from its identifying string.
///
/// Missing information (e.g. before the page is attached) classifies as desktop.
pub fn classify(user_agent: Option<&str>) -> DeviceProfile {
    let Some(user_agent) = user_agent else {
        return DeviceProfile::DESKTOP;
    };

    let user_agent = user_agent.to_ascii_lowercase();
    let is_mobile = MOBILE_PLATFORMS
        .iter()
        .any(|platform| user_agent.contains(platform));

    DeviceProfile { is_mobile }
}

/// Page-view scoped device profile, resolved once when the view attaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceState {
    #[default]
    Unclassified,
    Classified(DeviceProfile),
}

impl DeviceState {
    pub fn new() -> Self {
        Self::Unclassified
    }

    /// The profile to lay out with; desktop until classification completes
    pub fn profile(&self) -> DeviceProfile {
        match self {
            Self::Unclassified => DeviceProfile::default(),
            Self::Classified(profile) => *profile,
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Classified(_))
    }

    /// Resolve the profile on attach. Returns true when the observable profile changed.
    ///
    /// Only the first call classifies; later calls keep the settled profile.
    pub fn attach(&mut self, user_agent: Option<&str>) -> bool {
        if self.is_classified() {
            return false;
        }

        let before = self.profile();
        let profile = classify(user_agent);
        *self = Self::Classified(profile);
        log::debug!("device classified: mobile={}", profile.is_mobile);

        before != profile
    }
}
