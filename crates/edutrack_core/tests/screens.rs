use edutrack_core::screens::dashboard::{
    suggestions, today_classes, ClassStatus, ATTENDANCE_PERCENTAGE, TASKS_COMPLETED, TASKS_TOTAL,
};
use edutrack_core::screens::home::HomeScreen;
use edutrack_core::screens::profile::{ProfileSettings, Setting, QUICK_STATS};

#[test]
fn dashboard_figures_are_consistent() {
    assert!(ATTENDANCE_PERCENTAGE <= 100);
    assert!(TASKS_COMPLETED <= TASKS_TOTAL);
    assert_eq!(today_classes().len(), 4);
    assert_eq!(
        today_classes()
            .iter()
            .filter(|class| class.status == ClassStatus::Present)
            .count(),
        2
    );
    assert_eq!(suggestions().len(), 3);
}

#[test]
fn home_contact_panel_toggles() {
    let mut home = HomeScreen::new();
    assert!(!home.contact_visible());
    assert!(home.toggle_contact());
    assert!(!home.toggle_contact());
}

#[test]
fn profile_settings_are_independent_switches() {
    let mut settings = ProfileSettings::default();
    settings.toggle(Setting::LocationServices);

    assert!(!settings.is_enabled(Setting::LocationServices));
    assert!(settings.is_enabled(Setting::PushNotifications));
    assert_eq!(QUICK_STATS.0, 91);
}
