use edutrack_core::route::{bottom_navigation, dashboard_route, portal_route};
use edutrack_core::screens::home::HomeScreen;
use edutrack_core::{Role, Route};

#[test]
fn known_paths_resolve_exactly() {
    assert_eq!(Route::from_path("/"), Route::Home);
    assert_eq!(Route::from_path("/auth/teacher"), Route::TeacherAuth);
    assert_eq!(Route::from_path("/admin-dashboard"), Route::AdminDashboard);
    assert_eq!(Route::from_path("/reports"), Route::Reports);
}

#[test]
fn unknown_or_unnormalized_paths_are_not_found() {
    for path in ["/nope", "/tasks/", "/Tasks", "", "/auth/parent"] {
        assert_eq!(Route::from_path(path), Route::NotFound, "path {path:?}");
    }
    assert_eq!(Route::NotFound.path(), "*");
}

#[test]
fn roles_map_to_portal_and_dashboard() {
    for role in [Role::Student, Role::Teacher, Role::Admin] {
        assert_eq!(
            portal_route(role).path(),
            format!("/auth/{}", role.as_str())
        );
        assert!(dashboard_route(role).is_dashboard());
    }
}

#[test]
fn home_portal_cards_open_auth_screens() {
    let home = HomeScreen::new();
    assert_eq!(home.open_portal(Role::Admin), Route::AdminAuth);
}

#[test]
fn exactly_one_nav_item_is_active_on_nav_paths() {
    for item in bottom_navigation() {
        let active = bottom_navigation()
            .iter()
            .filter(|candidate| candidate.is_active(item.route.path()))
            .count();
        assert_eq!(active, 1);
    }
    assert!(bottom_navigation()
        .iter()
        .all(|item| !item.is_active("/student-dashboard")));
}
