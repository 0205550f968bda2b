//! Country name alias tables
//!
//! Forward direction: scan aliases for the first substring match in a
//! context string to derive an ISO 3166-1 alpha-2 code. Reverse
//! direction: all known names for a code (including formal/official
//! names), used to validate that a geocoded address really is in the
//! expected country.
//!
//! Table order defines alias precedence and is load-bearing: when a
//! context mentions both a country and a region alias, the first
//! listed alias wins.

use std::collections::HashMap;
use std::sync::OnceLock;

use domain::CountryCode;

/// Country name aliases in precedence order, lowercase
pub(crate) const COUNTRY_ALIASES: &[(&str, &str)] = &[
    // Africa
    ("algeria", "dz"),
    ("angola", "ao"),
    ("benin", "bj"),
    ("botswana", "bw"),
    ("burkina faso", "bf"),
    ("burundi", "bi"),
    ("cameroon", "cm"),
    ("cape verde", "cv"),
    ("cabo verde", "cv"),
    ("central african republic", "cf"),
    ("chad", "td"),
    ("comoros", "km"),
    ("congo", "cg"),
    ("democratic republic of the congo", "cd"),
    ("drc", "cd"),
    ("djibouti", "dj"),
    ("egypt", "eg"),
    ("equatorial guinea", "gq"),
    ("eritrea", "er"),
    ("eswatini", "sz"),
    ("swaziland", "sz"),
    ("ethiopia", "et"),
    ("gabon", "ga"),
    ("gambia", "gm"),
    ("ghana", "gh"),
    ("guinea", "gn"),
    ("guinea-bissau", "gw"),
    ("ivory coast", "ci"),
    ("cote d'ivoire", "ci"),
    ("kenya", "ke"),
    ("lesotho", "ls"),
    ("liberia", "lr"),
    ("libya", "ly"),
    ("madagascar", "mg"),
    ("malawi", "mw"),
    ("mali", "ml"),
    ("mauritania", "mr"),
    ("mauritius", "mu"),
    ("morocco", "ma"),
    ("mozambique", "mz"),
    ("namibia", "na"),
    ("niger", "ne"),
    ("nigeria", "ng"),
    ("rwanda", "rw"),
    ("sao tome and principe", "st"),
    ("senegal", "sn"),
    ("seychelles", "sc"),
    ("sierra leone", "sl"),
    ("somalia", "so"),
    ("south africa", "za"),
    ("south sudan", "ss"),
    ("sudan", "sd"),
    ("tanzania", "tz"),
    ("togo", "tg"),
    ("tunisia", "tn"),
    ("uganda", "ug"),
    ("zambia", "zm"),
    ("zimbabwe", "zw"),
    // Americas - North
    ("canada", "ca"),
    ("mexico", "mx"),
    ("united states", "us"),
    ("usa", "us"),
    ("america", "us"),
    // Americas - Central
    ("belize", "bz"),
    ("costa rica", "cr"),
    ("el salvador", "sv"),
    ("guatemala", "gt"),
    ("honduras", "hn"),
    ("nicaragua", "ni"),
    ("panama", "pa"),
    // Americas - Caribbean
    ("antigua and barbuda", "ag"),
    ("bahamas", "bs"),
    ("barbados", "bb"),
    ("cuba", "cu"),
    ("dominica", "dm"),
    ("dominican republic", "do"),
    ("grenada", "gd"),
    ("haiti", "ht"),
    ("jamaica", "jm"),
    ("puerto rico", "pr"),
    ("saint kitts and nevis", "kn"),
    ("saint lucia", "lc"),
    ("saint vincent and the grenadines", "vc"),
    ("trinidad and tobago", "tt"),
    // Americas - South
    ("argentina", "ar"),
    ("bolivia", "bo"),
    ("brazil", "br"),
    ("chile", "cl"),
    ("colombia", "co"),
    ("ecuador", "ec"),
    ("guyana", "gy"),
    ("paraguay", "py"),
    ("peru", "pe"),
    ("suriname", "sr"),
    ("uruguay", "uy"),
    ("venezuela", "ve"),
    // Asia - East
    ("china", "cn"),
    ("hong kong", "hk"),
    ("japan", "jp"),
    ("macau", "mo"),
    ("mongolia", "mn"),
    ("north korea", "kp"),
    ("south korea", "kr"),
    ("korea", "kr"),
    ("taiwan", "tw"),
    // Asia - Southeast
    ("brunei", "bn"),
    ("cambodia", "kh"),
    ("indonesia", "id"),
    ("laos", "la"),
    ("malaysia", "my"),
    ("myanmar", "mm"),
    ("burma", "mm"),
    ("philippines", "ph"),
    ("singapore", "sg"),
    ("thailand", "th"),
    ("timor-leste", "tl"),
    ("east timor", "tl"),
    ("vietnam", "vn"),
    // Asia - South
    ("afghanistan", "af"),
    ("bangladesh", "bd"),
    ("bhutan", "bt"),
    ("india", "in"),
    ("maldives", "mv"),
    ("nepal", "np"),
    ("pakistan", "pk"),
    ("sri lanka", "lk"),
    // Asia - Central
    ("kazakhstan", "kz"),
    ("kyrgyzstan", "kg"),
    ("tajikistan", "tj"),
    ("turkmenistan", "tm"),
    ("uzbekistan", "uz"),
    // Asia - West / Middle East
    ("armenia", "am"),
    ("azerbaijan", "az"),
    ("bahrain", "bh"),
    ("cyprus", "cy"),
    ("georgia", "ge"),
    ("iran", "ir"),
    ("iraq", "iq"),
    ("israel", "il"),
    ("jordan", "jo"),
    ("kuwait", "kw"),
    ("lebanon", "lb"),
    ("oman", "om"),
    ("palestine", "ps"),
    ("qatar", "qa"),
    ("saudi arabia", "sa"),
    ("syria", "sy"),
    ("turkey", "tr"),
    ("turkiye", "tr"),
    ("united arab emirates", "ae"),
    ("uae", "ae"),
    ("yemen", "ye"),
    // Europe - Western
    ("austria", "at"),
    ("belgium", "be"),
    ("france", "fr"),
    ("germany", "de"),
    ("liechtenstein", "li"),
    ("luxembourg", "lu"),
    ("monaco", "mc"),
    ("netherlands", "nl"),
    ("holland", "nl"),
    ("switzerland", "ch"),
    // Europe - Northern
    ("denmark", "dk"),
    ("estonia", "ee"),
    ("finland", "fi"),
    ("iceland", "is"),
    ("ireland", "ie"),
    ("latvia", "lv"),
    ("lithuania", "lt"),
    ("norway", "no"),
    ("sweden", "se"),
    ("united kingdom", "gb"),
    ("uk", "gb"),
    ("england", "gb"),
    ("scotland", "gb"),
    ("wales", "gb"),
    ("northern ireland", "gb"),
    ("great britain", "gb"),
    // Europe - Southern
    ("albania", "al"),
    ("andorra", "ad"),
    ("bosnia and herzegovina", "ba"),
    ("croatia", "hr"),
    ("greece", "gr"),
    ("italy", "it"),
    ("kosovo", "xk"),
    ("malta", "mt"),
    ("montenegro", "me"),
    ("north macedonia", "mk"),
    ("macedonia", "mk"),
    ("portugal", "pt"),
    ("san marino", "sm"),
    ("serbia", "rs"),
    ("slovenia", "si"),
    ("spain", "es"),
    ("vatican city", "va"),
    // Europe - Eastern
    ("belarus", "by"),
    ("bulgaria", "bg"),
    ("czech republic", "cz"),
    ("czechia", "cz"),
    ("hungary", "hu"),
    ("moldova", "md"),
    ("poland", "pl"),
    ("romania", "ro"),
    ("russia", "ru"),
    ("slovakia", "sk"),
    ("ukraine", "ua"),
    // Oceania
    ("australia", "au"),
    ("fiji", "fj"),
    ("kiribati", "ki"),
    ("marshall islands", "mh"),
    ("micronesia", "fm"),
    ("nauru", "nr"),
    ("new zealand", "nz"),
    ("palau", "pw"),
    ("papua new guinea", "pg"),
    ("samoa", "ws"),
    ("solomon islands", "sb"),
    ("tonga", "to"),
    ("tuvalu", "tv"),
    ("vanuatu", "vu"),
];

/// Formal/official names that geocoders print but nobody types
const ADDITIONAL_NAMES: &[(&str, &[&str])] = &[
    ("us", &["united states of america", "u.s.a.", "u.s."]),
    ("gb", &["britain", "uk"]),
    ("kr", &["republic of korea"]),
    ("kp", &["democratic people's republic of korea"]),
    ("cn", &["people's republic of china"]),
    ("tw", &["chinese taipei"]),
    ("ae", &["emirates"]),
    ("bd", &["people's republic of bangladesh"]),
    ("vn", &["viet nam"]),
    ("la", &["lao people's democratic republic", "lao pdr"]),
    ("ir", &["islamic republic of iran", "persia"]),
    ("ru", &["russian federation"]),
    ("cz", &["czech"]),
    ("mm", &["burma"]),
];

/// Reverse mapping, code -> every known name, built once at first use
fn alias_index() -> &'static HashMap<&'static str, Vec<&'static str>> {
    static INDEX: OnceLock<HashMap<&'static str, Vec<&'static str>>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
        for &(alias, code) in COUNTRY_ALIASES {
            index.entry(code).or_default().push(alias);
        }
        for &(code, names) in ADDITIONAL_NAMES {
            index.entry(code).or_default().extend_from_slice(names);
        }
        index
    })
}

/// Detect a country code from a free-form context string
///
/// The first alias (in table order) that appears as a substring of
/// the lower-cased context wins.
pub(crate) fn detect(context: &str) -> Option<CountryCode> {
    let haystack = context.trim().to_lowercase();
    if haystack.is_empty() {
        return None;
    }

    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| haystack.contains(alias))
        .and_then(|(_, code)| CountryCode::new(code).ok())
}

/// Every known name for a country code, empty when the code is unknown
pub(crate) fn names_for(code: &CountryCode) -> &'static [&'static str] {
    alias_index()
        .get(code.as_str())
        .map_or(&[], |names| names.as_slice())
}
