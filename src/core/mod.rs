pub mod resolver;
pub mod signup;
pub mod validator;

pub use crate::domain::model::{Coordinate, GeocodeResult, NewUser, ProviderResponse, User};
pub use crate::domain::ports::{GeocodingProvider, UserRepository};
pub use crate::utils::error::Result;
