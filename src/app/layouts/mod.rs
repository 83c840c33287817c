pub mod navbar;
pub mod side_menu;

pub use navbar::AppNavbar;
pub use side_menu::SideMenu;
