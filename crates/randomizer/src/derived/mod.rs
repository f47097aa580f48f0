//! Higher-level values built on the primitive randomizers.
//!
//! - [`text`]: strings over an [`Alphabet`](crate::alphabet::Alphabet)
//! - [`numeric`]: digit strings, decimals, big integers and tokens
//! - [`temporal`]: dates, times and zones
//! - [`web`]: emails, websites, phone numbers and ids

pub mod numeric;
pub mod temporal;
pub mod text;
pub mod web;

pub use numeric::{
    random_big_decimal, random_big_decimal_unit, random_big_decimal_with_attempts,
    random_big_integer, random_float_of, random_float_string, random_serial_number, random_token,
    DEFAULT_DECIMAL_ATTEMPTS, MAX_DECIMAL_DIGITS,
};
pub use temporal::{
    DEFAULT_DATE_WINDOW_DAYS, random_birthday, random_date, random_date_after, random_date_before,
    random_date_between, random_date_with, random_date_within, random_local_date,
    random_local_date_time, random_local_time, random_zone_id,
};
pub use text::{
    MAX_STRING_LENGTH, random_default_string, random_hex_string, random_numeric_string,
    random_string, random_string_between, random_string_from,
};
pub use web::{
    DEFAULT_PASSWORD_LENGTH, info_mail_from_website, random_email, random_fax_number, random_id,
    random_mobile_number, random_password, random_phone_number, random_website, shuffle_name,
};
