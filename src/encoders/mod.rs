pub mod base122;
pub mod base32;
pub mod base64;
pub mod base85;
pub mod base91;
pub mod chunked;
pub mod errors;

pub use base122::Base122;
pub use base32::Base32;
pub use base64::Base64;
pub use base85::Base85;
pub use base91::Base91;
