//! Contact details and identifiers for web-facing fixtures.

use rand::Rng;
use rand::seq::SliceRandom;
use time::OffsetDateTime;

use super::text::{random_numeric_string, random_string_from};
use crate::alphabet::Alphabet;
use crate::error::SynthesisError;

/// Length of [`random_password`] when none is given.
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

fn pool(rng: &mut impl Rng, alphabet: Alphabet, length: usize) -> String {
    // Built-in alphabets are never empty.
    random_string_from(rng, alphabet.chars(), length).unwrap_or_default()
}

/// `prefix@domain.tld` with a 1-20 character prefix and a 1-12 letter domain.
pub fn random_email(rng: &mut impl Rng) -> String {
    let prefix_len = rng.gen_range(1..=20);
    let prefix = pool(rng, Alphabet::LowercaseDigits, prefix_len);
    let domain_len = rng.gen_range(1..=12);
    let domain = pool(rng, Alphabet::Lowercase, domain_len);
    let tld = pool(rng, Alphabet::Lowercase, 2);
    format!("{prefix}@{domain}.{tld}")
}

/// `http://www.domain.tld` with a 1-12 letter domain.
pub fn random_website(rng: &mut impl Rng) -> String {
    let domain_len = rng.gen_range(1..=12);
    let domain = pool(rng, Alphabet::Lowercase, domain_len);
    let tld = pool(rng, Alphabet::Lowercase, 2);
    format!("http://www.{domain}.{tld}")
}

/// Letters and digits, [`DEFAULT_PASSWORD_LENGTH`] long unless `length` is given.
pub fn random_password(rng: &mut impl Rng, length: Option<usize>) -> String {
    pool(rng, Alphabet::Alphanumeric, length.unwrap_or(DEFAULT_PASSWORD_LENGTH))
}

/// `0dddd/ddddddd`
pub fn random_phone_number(rng: &mut impl Rng) -> String {
    format!(
        "0{}/{}",
        random_numeric_string(rng, 4),
        random_numeric_string(rng, 7)
    )
}

/// `0ddd/ddddddd`
pub fn random_mobile_number(rng: &mut impl Rng) -> String {
    format!(
        "0{}/{}",
        random_numeric_string(rng, 3),
        random_numeric_string(rng, 7)
    )
}

/// The phone number with its last two digits read as a number and incremented.
///
/// `"0123/4567899"` becomes `"0123/45678100"`.
pub fn random_fax_number(phone: &str) -> Result<String, SynthesisError> {
    let split = phone
        .len()
        .checked_sub(2)
        .filter(|at| phone.is_char_boundary(*at))
        .ok_or_else(|| SynthesisError::invalid(format!("phone number {phone:?} is too short")))?;
    let (stem, extension) = phone.split_at(split);
    let extension: u32 = extension.parse().map_err(|_| {
        SynthesisError::invalid(format!("phone number {phone:?} does not end in two digits"))
    })?;
    Ok(format!("{stem}{}", extension + 1))
}

/// `info@` followed by everything after `www.` in `url`.
pub fn info_mail_from_website(url: &str) -> Result<String, SynthesisError> {
    url.split_once("www.")
        .map(|(_, host)| format!("info@{host}"))
        .ok_or_else(|| SynthesisError::invalid(format!("{url:?} contains no `www.`")))
}

/// `xx.xxxx.xx.<unix millis>.xx` over letters and digits.
pub fn random_id(rng: &mut impl Rng) -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    format!(
        "{}.{}.{}.{millis}.{}",
        pool(rng, Alphabet::Alphanumeric, 2),
        pool(rng, Alphabet::Alphanumeric, 4),
        pool(rng, Alphabet::Alphanumeric, 2),
        pool(rng, Alphabet::Alphanumeric, 2),
    )
}

/// The given characters in random order.
pub fn shuffle_name(rng: &mut impl Rng, chars: &[char]) -> String {
    let mut chars = chars.to_vec();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::EntropySource;

    #[test]
    fn test_email_shape() {
        let mut rng = EntropySource::new();
        for _ in 0..100 {
            let email = random_email(&mut rng);
            let (prefix, host) = email.split_once('@').unwrap();
            assert!((1..=20).contains(&prefix.len()));
            let (domain, tld) = host.rsplit_once('.').unwrap();
            assert!((1..=12).contains(&domain.len()));
            assert_eq!(tld.len(), 2);
        }
    }

    #[test]
    fn test_website_and_info_mail() {
        let mut rng = EntropySource::new();
        let site = random_website(&mut rng);
        assert!(site.starts_with("http://www."));
        let mail = info_mail_from_website(&site).unwrap();
        assert_eq!(mail, format!("info@{}", &site["http://www.".len()..]));
        assert_eq!(info_mail_from_website("www.example.org").unwrap(), "info@example.org");
        assert!(info_mail_from_website("http://example.org").is_err());
    }

    #[test]
    fn test_phone_formats() {
        let mut rng = EntropySource::new();
        let phone = random_phone_number(&mut rng);
        assert_eq!(phone.len(), 13);
        assert_eq!(&phone[..1], "0");
        assert_eq!(&phone[5..6], "/");
        let mobile = random_mobile_number(&mut rng);
        assert_eq!(mobile.len(), 12);
        assert_eq!(&mobile[4..5], "/");
    }

    #[test]
    fn test_fax_increments_extension() {
        assert_eq!(random_fax_number("0123/4567812").unwrap(), "0123/4567813");
        assert_eq!(random_fax_number("0123/4567899").unwrap(), "0123/45678100");
        assert!(random_fax_number("7").is_err());
        assert!(random_fax_number("0123/45678ab").is_err());
    }

    #[test]
    fn test_password_length() {
        let mut rng = EntropySource::new();
        assert_eq!(random_password(&mut rng, None).len(), DEFAULT_PASSWORD_LENGTH);
        assert_eq!(random_password(&mut rng, Some(20)).len(), 20);
    }

    #[test]
    fn test_random_id_and_shuffle() {
        let mut rng = EntropySource::new();
        let id = random_id(&mut rng);
        assert_eq!(id.split('.').count(), 5);

        let name = shuffle_name(&mut rng, &['a', 'n', 'n', 'a', 'x']);
        let mut sorted: Vec<char> = name.chars().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!['a', 'a', 'n', 'n', 'x']);
    }
}
