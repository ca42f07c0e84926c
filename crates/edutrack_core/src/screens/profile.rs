//! Profile screen content and local settings switches.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: &'static str,
    pub initials: &'static str,
    pub program: &'static str,
    pub standing: &'static str,
    pub student_id: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub enrolled_since: &'static str,
}

pub const PROFILE: ProfileCard = ProfileCard {
    name: "Alex Smith",
    initials: "AS",
    program: "Computer Science Student",
    standing: "Senior",
    student_id: "CS2024001",
    email: "alex.smith@university.edu",
    phone: "+1 (555) 123-4567",
    address: "Dorm Room 204, University Campus",
    enrolled_since: "September 2024",
};

/// Quick stats row: attendance percent, tasks done, achievements.
pub const QUICK_STATS: (u8, u32, u32) = (91, 142, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: 1,
        title: "Perfect Attendance",
        description: "100% attendance for a month",
        earned: true,
    },
    Achievement {
        id: 2,
        title: "Task Master",
        description: "Completed 50 tasks",
        earned: true,
    },
    Achievement {
        id: 3,
        title: "Early Bird",
        description: "Consistently on time",
        earned: true,
    },
    Achievement {
        id: 4,
        title: "Study Streak",
        description: "7 days of continuous study",
        earned: false,
    },
];

pub fn achievements() -> &'static [Achievement] {
    ACHIEVEMENTS
}

/// Switches in the settings card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    PushNotifications,
    LocationServices,
    FaceRecognition,
}

impl Setting {
    pub fn label(self) -> &'static str {
        match self {
            Self::PushNotifications => "Push Notifications",
            Self::LocationServices => "Location Services",
            Self::FaceRecognition => "Face Recognition",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::PushNotifications => "Get notified about classes and tasks",
            Self::LocationServices => "Enable auto-attendance via proximity",
            Self::FaceRecognition => "Use biometric authentication",
        }
    }
}

/// Switch positions for one mounted profile screen. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub push_notifications: bool,
    pub location_services: bool,
    pub face_recognition: bool,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            push_notifications: true,
            location_services: true,
            face_recognition: false,
        }
    }
}

impl ProfileSettings {
    pub fn is_enabled(&self, setting: Setting) -> bool {
        match setting {
            Setting::PushNotifications => self.push_notifications,
            Setting::LocationServices => self.location_services,
            Setting::FaceRecognition => self.face_recognition,
        }
    }

    /// Flips one switch and returns its new position.
    pub fn toggle(&mut self, setting: Setting) -> bool {
        let slot = match setting {
            Setting::PushNotifications => &mut self.push_notifications,
            Setting::LocationServices => &mut self.location_services,
            Setting::FaceRecognition => &mut self.face_recognition,
        };
        *slot = !*slot;
        *slot
    }
}

#[cfg(test)]
mod tests {
    use super::{achievements, ProfileSettings, Setting};

    #[test]
    fn defaults_match_initial_switches() {
        let settings = ProfileSettings::default();
        assert!(settings.is_enabled(Setting::PushNotifications));
        assert!(settings.is_enabled(Setting::LocationServices));
        assert!(!settings.is_enabled(Setting::FaceRecognition));
    }

    #[test]
    fn toggle_flips_only_one_switch() {
        let mut settings = ProfileSettings::default();
        assert!(settings.toggle(Setting::FaceRecognition));
        assert!(settings.is_enabled(Setting::PushNotifications));
        assert!(!settings.toggle(Setting::PushNotifications));
    }

    #[test]
    fn three_of_four_achievements_are_earned() {
        assert_eq!(achievements().iter().filter(|a| a.earned).count(), 3);
    }
}
