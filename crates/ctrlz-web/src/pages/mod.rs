//! Page Components

mod home;
mod shop;
mod about;
mod contact;
mod account;

pub use home::HomePage;
pub use shop::ShopPage;
pub use about::AboutPage;
pub use contact::ContactPage;
pub use account::AccountPage;
