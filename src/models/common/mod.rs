pub mod error_code;
pub mod input;
pub mod response;

pub use error_code::ErrorCode;
pub use input::NumberInput;
pub use response::ApiResponse;
