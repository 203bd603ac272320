//! Locale tables for display patterns
//!
//! Names and long-date formats follow the moment.js locale data the LMS
//! templates were written against, so `ll` renders "Oct 14, 2016" in `en`
//! and "14 oct. 2016" in `fr`.

use std::borrow::Cow;

/// Long-date format expansions (`LT`, `LTS`, `L`, `LL`, `LLL`, `LLLL`)
#[derive(Debug, Clone, Copy)]
pub struct LongDateFormats {
    pub lt: &'static str,
    pub lts: &'static str,
    pub l: &'static str,
    pub ll: &'static str,
    pub lll: &'static str,
    pub llll: &'static str,
}

/// Display data for one locale
#[derive(Debug)]
pub struct LocaleData {
    /// Lowercase BCP 47 tag (e.g. "en", "en-gb")
    pub tag: &'static str,
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    /// Sunday first
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    pub weekdays_min: [&'static str; 7],
    pub formats: LongDateFormats,
    ordinal: fn(u32) -> String,
    meridiem: fn(u32) -> &'static str,
}

impl LocaleData {
    /// Day-of-month ordinal (`Do`)
    pub fn ordinal(&self, day: u32) -> String {
        (self.ordinal)(day)
    }

    /// Meridiem for an hour in 0..24 (`A`, lowercased for `a`)
    pub fn meridiem(&self, hour: u32, lowercase: bool) -> String {
        let value = (self.meridiem)(hour);
        if lowercase {
            value.to_lowercase()
        } else {
            value.to_string()
        }
    }

    /// Expansion of a long-date token, or `None` if `token` is not one
    ///
    /// The lowercase forms are derived from the uppercase ones by dropping
    /// one letter from `MMMM`, `MM`, `DD` and `dddd`.
    pub fn long_date_format(&self, token: &str) -> Option<Cow<'static, str>> {
        let f = &self.formats;
        let long = match token {
            "LT" => return Some(Cow::Borrowed(f.lt)),
            "LTS" => return Some(Cow::Borrowed(f.lts)),
            "L" => return Some(Cow::Borrowed(f.l)),
            "LL" => return Some(Cow::Borrowed(f.ll)),
            "LLL" => return Some(Cow::Borrowed(f.lll)),
            "LLLL" => return Some(Cow::Borrowed(f.llll)),
            "l" => f.l,
            "ll" => f.ll,
            "lll" => f.lll,
            "llll" => f.llll,
            _ => return None,
        };
        Some(Cow::Owned(shorten(long)))
    }
}

fn shorten(format: &str) -> String {
    const LONG_TOKENS: [&str; 4] = ["MMMM", "MM", "DD", "dddd"];

    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    while !rest.is_empty() {
        if let Some(token) = LONG_TOKENS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str(&token[1..]);
            rest = &rest[token.len()..];
        } else if let Some(c) = rest.chars().next() {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

fn english_ordinal(n: u32) -> String {
    let suffix = if (n % 100) / 10 == 1 {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}

fn english_meridiem(hour: u32) -> &'static str {
    if hour < 12 {
        "AM"
    } else {
        "PM"
    }
}

fn french_ordinal(n: u32) -> String {
    if n == 1 {
        "1er".to_string()
    } else {
        n.to_string()
    }
}

fn german_ordinal(n: u32) -> String {
    format!("{}.", n)
}

fn spanish_ordinal(n: u32) -> String {
    format!("{}º", n)
}

fn russian_ordinal(n: u32) -> String {
    format!("{}-го", n)
}

fn russian_meridiem(hour: u32) -> &'static str {
    match hour {
        0..=3 => "ночи",
        4..=11 => "утра",
        12..=16 => "дня",
        _ => "вечера",
    }
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ENGLISH_WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const ENGLISH_WEEKDAYS_MIN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub static EN: LocaleData = LocaleData {
    tag: "en",
    months: ENGLISH_MONTHS,
    months_short: ENGLISH_MONTHS_SHORT,
    weekdays: ENGLISH_WEEKDAYS,
    weekdays_short: ENGLISH_WEEKDAYS_SHORT,
    weekdays_min: ENGLISH_WEEKDAYS_MIN,
    formats: LongDateFormats {
        lt: "h:mm A",
        lts: "h:mm:ss A",
        l: "MM/DD/YYYY",
        ll: "MMMM D, YYYY",
        lll: "MMMM D, YYYY h:mm A",
        llll: "dddd, MMMM D, YYYY h:mm A",
    },
    ordinal: english_ordinal,
    meridiem: english_meridiem,
};

pub static EN_GB: LocaleData = LocaleData {
    tag: "en-gb",
    months: ENGLISH_MONTHS,
    months_short: ENGLISH_MONTHS_SHORT,
    weekdays: ENGLISH_WEEKDAYS,
    weekdays_short: ENGLISH_WEEKDAYS_SHORT,
    weekdays_min: ENGLISH_WEEKDAYS_MIN,
    formats: LongDateFormats {
        lt: "HH:mm",
        lts: "HH:mm:ss",
        l: "DD/MM/YYYY",
        ll: "D MMMM YYYY",
        lll: "D MMMM YYYY HH:mm",
        llll: "dddd, D MMMM YYYY HH:mm",
    },
    ordinal: english_ordinal,
    meridiem: english_meridiem,
};

pub static FR: LocaleData = LocaleData {
    tag: "fr",
    months: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    months_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    weekdays: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    weekdays_short: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    weekdays_min: ["di", "lu", "ma", "me", "je", "ve", "sa"],
    formats: LongDateFormats {
        lt: "HH:mm",
        lts: "HH:mm:ss",
        l: "DD/MM/YYYY",
        ll: "D MMMM YYYY",
        lll: "D MMMM YYYY HH:mm",
        llll: "dddd D MMMM YYYY HH:mm",
    },
    ordinal: french_ordinal,
    meridiem: english_meridiem,
};

pub static DE: LocaleData = LocaleData {
    tag: "de",
    months: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    months_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    weekdays_short: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    weekdays_min: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    formats: LongDateFormats {
        lt: "HH:mm",
        lts: "HH:mm:ss",
        l: "DD.MM.YYYY",
        ll: "D. MMMM YYYY",
        lll: "D. MMMM YYYY HH:mm",
        llll: "dddd, D. MMMM YYYY HH:mm",
    },
    ordinal: german_ordinal,
    meridiem: english_meridiem,
};

pub static ES: LocaleData = LocaleData {
    tag: "es",
    months: [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ],
    months_short: [
        "ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sep.", "oct.", "nov.",
        "dic.",
    ],
    weekdays: [
        "domingo",
        "lunes",
        "martes",
        "miércoles",
        "jueves",
        "viernes",
        "sábado",
    ],
    weekdays_short: ["dom.", "lun.", "mar.", "mié.", "jue.", "vie.", "sáb."],
    weekdays_min: ["do", "lu", "ma", "mi", "ju", "vi", "sá"],
    formats: LongDateFormats {
        lt: "H:mm",
        lts: "H:mm:ss",
        l: "DD/MM/YYYY",
        ll: "D [de] MMMM [de] YYYY",
        lll: "D [de] MMMM [de] YYYY H:mm",
        llll: "dddd, D [de] MMMM [de] YYYY H:mm",
    },
    ordinal: spanish_ordinal,
    meridiem: english_meridiem,
};

pub static RU: LocaleData = LocaleData {
    tag: "ru",
    // genitive forms, as used after a day number
    months: [
        "января",
        "февраля",
        "марта",
        "апреля",
        "мая",
        "июня",
        "июля",
        "августа",
        "сентября",
        "октября",
        "ноября",
        "декабря",
    ],
    months_short: [
        "янв.", "февр.", "мар.", "апр.", "мая", "июня", "июля", "авг.", "сент.", "окт.", "нояб.",
        "дек.",
    ],
    weekdays: [
        "воскресенье",
        "понедельник",
        "вторник",
        "среда",
        "четверг",
        "пятница",
        "суббота",
    ],
    weekdays_short: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
    weekdays_min: ["вс", "пн", "вт", "ср", "чт", "пт", "сб"],
    formats: LongDateFormats {
        lt: "H:mm",
        lts: "H:mm:ss",
        l: "DD.MM.YYYY",
        ll: "D MMMM YYYY г.",
        lll: "D MMMM YYYY г., H:mm",
        llll: "dddd, D MMMM YYYY г., H:mm",
    },
    ordinal: russian_ordinal,
    meridiem: russian_meridiem,
};

static LOCALES: &[&LocaleData] = &[&EN, &EN_GB, &FR, &DE, &ES, &RU];

fn normalize(tag: &str) -> String {
    tag.trim().replace('_', "-").to_ascii_lowercase()
}

/// Find locale data for a language tag, if the exact tag or its primary
/// subtag is known
pub fn find(tag: &str) -> Option<&'static LocaleData> {
    let tag = normalize(tag);
    if tag.is_empty() {
        return None;
    }

    if let Some(data) = LOCALES.iter().find(|l| l.tag == tag) {
        return Some(*data);
    }

    let primary = tag.split('-').next().unwrap_or(tag.as_str());
    LOCALES.iter().find(|l| l.tag == primary).copied()
}

/// Locale data for a language tag, falling back to `en`
pub fn lookup(tag: &str) -> &'static LocaleData {
    find(tag).unwrap_or(&EN)
}
