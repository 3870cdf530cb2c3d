// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and metadata.
//!
//! Covers the ISO 639-1 two-letter codes accepted by qa-hub's `--lang`
//! flag. Validation is deliberately wider than the three languages the
//! app can display, so the CLI can tell "real code we don't support"
//! apart from "not a language code at all" when reporting errors.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(qa_hub::i18n::is_valid_iso639_1("en"));
/// assert!(qa_hub::i18n::is_valid_iso639_1("am"));
/// assert!(!qa_hub::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Returns the English name of an ISO 639-1 code.
///
/// Returns `None` for unrecognised codes. Covers the three languages
/// qa-hub displays, plus neighbors of the dataset's language family that
/// show up in user requests and error messages.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "ar" => Some("Arabic"),
        "am" => Some("Amharic"),
        "ti" => Some("Tigrinya"),
        "om" => Some("Oromo"),
        "so" => Some("Somali"),
        "he" => Some("Hebrew"),
        "fr" => Some("French"),
        "es" => Some("Spanish"),
        "sw" => Some("Swahili"),
        _ => None,
    }
}

/// Returns the native name of an ISO 639-1 language code.
///
/// Used in language selection UIs where users should see their language
/// written in its own script.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "ar" => Some("العربية"),
        "am" => Some("አማርኛ"),
        "ti" => Some("ትግርኛ"),
        "om" => Some("Afaan Oromoo"),
        "so" => Some("Soomaali"),
        "he" => Some("עברית"),
        "fr" => Some("Français"),
        "es" => Some("Español"),
        "sw" => Some("Kiswahili"),
        _ => None,
    }
}
