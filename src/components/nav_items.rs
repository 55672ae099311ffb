use yew::prelude::*;

/// (href, label) of each top-level page.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/search", "Search"),
    ("/watchlist", "Watchlist"),
];

/// `/` only matches itself; every other entry also matches its sub-paths.
pub fn is_active(current_path: &str, href: &str) -> bool {
    if href == "/" {
        return current_path == "/";
    }
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Properties, PartialEq)]
pub struct NavItemsProps {
    #[prop_or_else(|| AttrValue::from("/"))]
    pub current_path: AttrValue,
}

#[function_component(NavItems)]
pub fn nav_items(props: &NavItemsProps) -> Html {
    html! {
        <ul class="flex flex-col sm:flex-row p-2 gap-3 sm:gap-10 font-medium">
            { for NAV_ITEMS.iter().map(|&(href, label)| {
                let active = is_active(&props.current_path, href);
                html! {
                    <li>
                        <a
                            href={href}
                            class={classes!("nav-link", active.then_some("nav-link-active"))}
                            aria-current={active.then_some("page")}
                        >
                            { label }
                        </a>
                    </li>
                }
            })}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_matching() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/search", "/"));
        assert!(is_active("/search", "/search"));
        assert!(is_active("/watchlist/AAPL", "/watchlist"));
        assert!(!is_active("/searching", "/search"));
        assert!(!is_active("/sign-up", "/search"));
    }
}
