//! UI Components

pub mod even_number_status;
pub mod wallet_connect;

pub use even_number_status::EvenNumberStatus;
pub use wallet_connect::WalletConnect;
