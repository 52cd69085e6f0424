pub mod app;
pub mod widgets;
pub mod auth_section;
pub mod calculator;
pub mod packages_section;
pub mod cards;
pub mod regions;
pub mod toast;

pub use app::{apply_visibility, render_app};
pub use widgets::{button, card_line, input_field, result_region, section};
pub use auth_section::{render_account_section, render_login_section, render_register_section};
pub use calculator::{render_calculator_section, render_create_section};
pub use packages_section::{render_package_list, render_packages_section};
pub use cards::{render_created_card, render_package_card, render_quote_card};
pub use regions::{clear_region, render_region};
pub use toast::show_toast;
