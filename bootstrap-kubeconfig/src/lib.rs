pub mod direct;
pub mod error;
pub mod kubeconfig;
pub mod token;

pub use direct::Kubeconfig;
pub use error::{Error, TokenFormatError};
pub use kubeconfig::generate_kubeconfig;
pub use token::{BootstrapToken, BootstrapTokenString};
