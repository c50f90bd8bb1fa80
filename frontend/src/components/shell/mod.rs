//! Navigation shell: the sidebar with connector selector and model links, and
//! the topbar with breadcrumb and render-mode toggle. Both only read the
//! `Location` derived from the URL; every action is a navigation.

mod sidebar;
mod topbar;

pub use sidebar::Sidebar;
pub use topbar::Topbar;

use common::nav::Location;
use yew::Properties;

#[derive(Properties, PartialEq, Clone)]
pub struct ShellProps {
    pub location: Location,
}
