use super::*;

#[test]
fn link_for_current_path_is_active() {
    assert_eq!(link_class("/projects", "/projects"), "sidebar__link sidebar__link--active");
    assert_eq!(link_class("/", "/"), "sidebar__link sidebar__link--active");
}

#[test]
fn other_links_are_plain() {
    assert_eq!(link_class("/projects", "/"), "sidebar__link");
    assert_eq!(link_class("/projects/7", "/projects"), "sidebar__link");
}

#[test]
fn every_screen_has_one_nav_entry() {
    for (href, _) in NAV_LINKS {
        let active = NAV_LINKS.iter().filter(|(h, _)| link_class(href, h).ends_with("--active")).count();
        assert_eq!(active, 1, "{href}");
    }
}
