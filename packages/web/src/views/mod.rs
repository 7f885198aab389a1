mod home;
pub use home::Home;

mod auth;
pub use auth::Auth;

mod create;
pub use create::Create;

mod account;
pub use account::Account;

mod payment_success;
pub use payment_success::PaymentSuccess;
