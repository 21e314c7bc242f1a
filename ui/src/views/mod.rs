mod listings;
pub use listings::ListingsPage;

mod detail;
pub use detail::ListingDetail;

mod my_listings;
pub use my_listings::MyListingsPage;

mod login;
pub use login::LoginPage;

mod register;
pub use register::RegisterPage;
