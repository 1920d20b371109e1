//! vCard import and export
//!
//! Import is lenient: it understands vCard 2.1, 3.0 and 4.0 cards as exported
//! by common address books, keeps the first EMAIL and TEL, and ignores
//! properties it has no field for. Quoted-printable is decoded only where a
//! property declares it. Export writes vCard 4.0, folding long lines.

use kinfolk_domain::{Category, Contact};
use regex::Regex;
use std::sync::LazyLock;

/// Card delimiters count only when they fill a whole line
static CARD_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ims)^[ \t]*BEGIN:VCARD[ \t]*$.*?^[ \t]*END:VCARD[ \t]*$")
        .unwrap_or_else(|_| unreachable!())
});

/// Longest physical line `write_vcards` emits, in octets
const MAX_LINE_OCTETS: usize = 75;

/// Name fields of the structured `N` property
#[derive(Debug, Default)]
struct StructuredName {
    family: Option<String>,
    given: Option<String>,
    middle: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
}

/// Properties collected from one card before it becomes a [`Contact`]
#[derive(Debug, Default)]
struct Card {
    formatted_name: Option<String>,
    name: Option<StructuredName>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    birthday: Option<String>,
    note: Option<String>,
    categories: Vec<String>,
}

/// Parse every card in `text` into a contact with a fresh id
///
/// Cards carrying neither `FN` nor `N` are skipped.
///
/// # Examples
///
/// ```
/// use kinfolk_store::parse_vcards;
///
/// let text = "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Lovelace;Ada;;;\r\nFN:Ada Lovelace\r\nEND:VCARD\r\n";
/// let contacts = parse_vcards(text);
/// assert_eq!(contacts[0].display_name(), "Ada Lovelace");
/// ```
pub fn parse_vcards(text: &str) -> Vec<Contact> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let unfolded = normalized.replace("\n ", "").replace("\n\t", "");

    let mut skipped = 0usize;
    let contacts: Vec<Contact> = CARD_BLOCK
        .find_iter(&unfolded)
        .filter_map(|block| {
            let contact = parse_card(block.as_str()).map(Card::into_contact);
            if contact.is_none() {
                skipped += 1;
            }
            contact
        })
        .collect();

    tracing::debug!(imported = contacts.len(), skipped, "Parsed vCard text");
    contacts
}

fn parse_card(block: &str) -> Option<Card> {
    let mut card = Card::default();
    let mut lines = block.lines().filter(|l| !l.trim().is_empty());

    while let Some(line) = lines.next() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let mut params = key.split(';');
        let property = params.next().unwrap_or_default().trim().to_uppercase();
        let quoted_printable = params.any(is_quoted_printable);

        // A trailing `=` is a quoted-printable soft line break
        let mut value = value.trim().to_string();
        if quoted_printable {
            while value.ends_with('=') {
                let Some(next) = lines.next() else {
                    break;
                };
                value.pop();
                value.push_str(next);
            }
        }
        let value = value.as_str();
        let decode = |raw: &str| decode_value(raw, quoted_printable);

        match property.as_str() {
            "FN" => card.formatted_name = non_empty(decode(value)),
            "N" => {
                let mut parts = split_unescaped(value, ';')
                    .into_iter()
                    .map(|p| non_empty(decode(p)));
                card.name = Some(StructuredName {
                    family: parts.next().flatten(),
                    given: parts.next().flatten(),
                    middle: parts.next().flatten(),
                    prefix: parts.next().flatten(),
                    suffix: parts.next().flatten(),
                });
            }
            "EMAIL" if card.email.is_none() => card.email = non_empty(decode(value)),
            "TEL" if card.phone.is_none() => card.phone = non_empty(decode(value)),
            "ADR" => {
                let parts: Vec<String> = split_unescaped(value, ';')
                    .into_iter()
                    .skip(2)
                    .take(5)
                    .map(decode)
                    .filter(|p| !p.is_empty())
                    .collect();
                if !parts.is_empty() {
                    card.address = Some(parts.join(", "));
                }
            }
            "BDAY" => card.birthday = normalize_birthday(value),
            "NOTE" => card.note = non_empty(decode(value)),
            "CATEGORIES" => {
                card.categories = split_unescaped(value, ',')
                    .into_iter()
                    .map(decode)
                    .filter(|c| !c.is_empty())
                    .collect();
            }
            _ => {}
        }
    }

    if card.formatted_name.is_none() && card.name.is_none() {
        return None;
    }
    Some(card)
}

impl Card {
    fn into_contact(self) -> Contact {
        let mut contact = Contact::new("", "");

        if let Some(name) = self.name {
            contact.family_name = name.family;
            contact.given_name = name.given;
            contact.additional_names = name.middle;
            contact.honorific_prefixes = name.prefix;
            contact.honorific_suffixes = name.suffix;
        }

        if contact.given_name.is_none() && contact.family_name.is_none() {
            if let Some(formatted) = self.formatted_name {
                match formatted.rsplit_once(' ') {
                    Some((given, family)) => {
                        contact.given_name = non_empty(given.trim().to_string());
                        contact.family_name = non_empty(family.trim().to_string());
                    }
                    None => contact.given_name = Some(formatted),
                }
            }
        }

        contact.email = self.email;
        contact.phone = self.phone;
        contact.address = self.address;
        contact.birthday = self.birthday;
        contact.notes = self.note;

        if let Some((first, rest)) = self.categories.split_first() {
            contact.category = Category::parse(first);
            contact.interests = rest.to_vec();
        }
        contact.categories = self.categories;

        contact
    }
}

/// Normalize `YYYYMMDD`, `--MMDD` and ISO forms to dashed dates; time parts are dropped
fn normalize_birthday(value: &str) -> Option<String> {
    let date_part = value.split(['T', 't']).next().unwrap_or_default();
    let cleaned: String = date_part
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    if let Some(month_day) = cleaned.strip_prefix("--") {
        return match month_day.len() {
            4 => Some(format!("--{}-{}", &month_day[..2], &month_day[2..])),
            5 => Some(cleaned),
            _ => None,
        };
    }

    if cleaned.contains('-') {
        Some(cleaned)
    } else if cleaned.len() == 8 {
        Some(format!("{}-{}-{}", &cleaned[..4], &cleaned[4..6], &cleaned[6..]))
    } else {
        None
    }
}

/// Split on `separator`, leaving backslash-escaped separators in place
fn split_unescaped(value: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in value.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == separator {
            parts.push(&value[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&value[start..]);
    parts
}

/// `ENCODING=QUOTED-PRINTABLE`, or the bare vCard 2.1 `QUOTED-PRINTABLE` parameter
fn is_quoted_printable(param: &str) -> bool {
    let param = param.trim();
    param.eq_ignore_ascii_case("QUOTED-PRINTABLE")
        || param
            .split_once('=')
            .is_some_and(|(name, value)| {
                name.trim().eq_ignore_ascii_case("ENCODING")
                    && value.trim().eq_ignore_ascii_case("QUOTED-PRINTABLE")
            })
}

/// Undo quoted-printable `=HH` sequences when declared, then text escapes
fn decode_value(value: &str, quoted_printable: bool) -> String {
    let text = if quoted_printable {
        decode_quoted_printable(value)
    } else {
        value.to_string()
    };

    let mut unescaped = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => unescaped.push('\n'),
            Some(other @ (',' | ';' | '\\')) => unescaped.push(other),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }

    unescaped.trim().to_string()
}

fn decode_quoted_printable(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'=' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                decoded.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escaped_field(field: &Option<String>) -> String {
    field.as_deref().map(escape_value).unwrap_or_default()
}

/// Write contacts as vCard 4.0 with CRLF line endings
pub fn write_vcards(contacts: &[Contact]) -> String {
    let mut out = String::new();

    for contact in contacts {
        let mut lines = vec![
            "BEGIN:VCARD".to_string(),
            "VERSION:4.0".to_string(),
            format!("FN:{}", escape_value(&contact.display_name())),
            format!(
                "N:{};{};{};{};{}",
                escaped_field(&contact.family_name),
                escaped_field(&contact.given_name),
                escaped_field(&contact.additional_names),
                escaped_field(&contact.honorific_prefixes),
                escaped_field(&contact.honorific_suffixes),
            ),
        ];

        if let Some(email) = &contact.email {
            lines.push(format!("EMAIL:{}", escape_value(email)));
        }
        if let Some(phone) = &contact.phone {
            lines.push(format!("TEL:{}", escape_value(phone)));
        }
        if let Some(address) = &contact.address {
            lines.push(format!("ADR:;;{};;;;", escape_value(address)));
        }
        if let Some(birthday) = &contact.birthday {
            lines.push(format!("BDAY:{}", compact_birthday(birthday)));
        }
        if let Some(notes) = &contact.notes {
            lines.push(format!("NOTE:{}", escape_value(notes)));
        }

        let mut categories: Vec<String> = contact
            .category
            .iter()
            .map(|c| c.as_str().to_string())
            .chain(contact.interests.iter().cloned())
            .collect();
        if categories.is_empty() {
            categories = contact.categories.clone();
        }
        if !categories.is_empty() {
            let joined: Vec<String> = categories.iter().map(|c| escape_value(c)).collect();
            lines.push(format!("CATEGORIES:{}", joined.join(",")));
        }

        lines.push("END:VCARD".to_string());
        for line in lines {
            out.push_str(&fold_line(&line));
            out.push_str("\r\n");
        }
    }

    out
}

/// Break `line` so no physical line exceeds [`MAX_LINE_OCTETS`]; each
/// continuation starts with a space
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    for c in line.chars() {
        if width + c.len_utf8() > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(c);
        width += c.len_utf8();
    }
    folded
}

/// `1990-05-01` becomes `19900501`; `--05-01` becomes `--0501`
fn compact_birthday(birthday: &str) -> String {
    match birthday.strip_prefix("--") {
        Some(month_day) => format!("--{}", month_day.replace('-', "")),
        None => birthday.replace('-', ""),
    }
}
