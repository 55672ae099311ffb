mod footer_link;
mod header;
mod input_field;
mod nav_items;
mod password_checklist;
mod select_field;

pub use footer_link::{FooterLink, FooterLinkProps};
pub use header::{Header, HeaderProps};
pub use input_field::{InputField, InputFieldProps};
pub use nav_items::{is_active, NavItems, NavItemsProps, NAV_ITEMS};
pub use password_checklist::{PasswordChecklist, PasswordChecklistProps};
pub use select_field::{CountrySelectField, CountrySelectFieldProps, SelectField, SelectFieldProps};
