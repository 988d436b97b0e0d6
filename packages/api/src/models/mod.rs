//! Wire models for the HR API.

mod login;
mod page;
mod receipt;
mod user;

pub use login::{LoginRequest, LoginResponse, ReceiptFile};
pub use page::{PageResponse, PageResult};
pub use receipt::Receipt;
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the field's default, the same as a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
